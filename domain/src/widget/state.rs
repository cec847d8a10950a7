//! Widget lifecycle state machine.
//!
//! ```text
//! Idle ──▶ Submitting ──▶ Updated ──▶ Idle
//!               │  │
//!               │  └───▶ Failed ───▶ Idle
//!               └──────────────────▶ Idle
//! ```
//!
//! A request is either fully applied (`Updated`) or fully discarded
//! (`Failed`). `Submitting → Submitting` is legal because a second
//! interaction may start while the first request is still in flight, and
//! `Submitting → Idle` is how a superseded request settles without
//! touching the page.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical state of a toolbar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    /// No request in flight
    #[default]
    Idle,
    /// A refresh or navigation has been initiated
    Submitting,
    /// New content applied, history and scroll adjusted
    Updated,
    /// A user-visible alert was shown; nothing was applied
    Failed,
}

impl WidgetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetState::Idle => "idle",
            WidgetState::Submitting => "submitting",
            WidgetState::Updated => "updated",
            WidgetState::Failed => "failed",
        }
    }

    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(&self, next: WidgetState) -> bool {
        use WidgetState::*;
        matches!(
            (self, next),
            (Idle, Submitting)
                | (Submitting, Submitting)
                | (Submitting, Updated)
                | (Submitting, Failed)
                | (Submitting, Idle)
                | (Updated, Idle)
                | (Failed, Idle)
                // a second in-flight request may start before the first settles
                | (Updated, Submitting)
                | (Failed, Submitting)
        )
    }

    /// Validate and perform a transition.
    pub fn transition(self, next: WidgetState) -> Result<WidgetState, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Terminal states settle back to `Idle`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WidgetState::Updated | WidgetState::Failed)
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = WidgetState::default()
            .transition(WidgetState::Submitting)
            .and_then(|s| s.transition(WidgetState::Updated))
            .and_then(|s| s.transition(WidgetState::Idle))
            .unwrap();
        assert_eq!(state, WidgetState::Idle);
    }

    #[test]
    fn test_failure_path() {
        let state = WidgetState::Idle
            .transition(WidgetState::Submitting)
            .and_then(|s| s.transition(WidgetState::Failed))
            .and_then(|s| s.transition(WidgetState::Idle))
            .unwrap();
        assert_eq!(state, WidgetState::Idle);
    }

    #[test]
    fn test_no_partial_state() {
        assert!(WidgetState::Idle.transition(WidgetState::Updated).is_err());
        assert!(WidgetState::Failed.transition(WidgetState::Updated).is_err());
        assert!(WidgetState::Updated.transition(WidgetState::Failed).is_err());
    }

    #[test]
    fn test_superseded_path_skips_terminal_state() {
        let state = WidgetState::Idle
            .transition(WidgetState::Submitting)
            .and_then(|s| s.transition(WidgetState::Idle))
            .unwrap();
        assert_eq!(state, WidgetState::Idle);
    }

    #[test]
    fn test_concurrent_submission_allowed() {
        assert!(WidgetState::Submitting.can_transition_to(WidgetState::Submitting));
    }

    #[test]
    fn test_terminal_states() {
        assert!(WidgetState::Updated.is_terminal());
        assert!(WidgetState::Failed.is_terminal());
        assert!(!WidgetState::Submitting.is_terminal());
    }
}
