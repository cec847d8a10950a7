//! Domain error types

use thiserror::Error;

use crate::widget::state::WidgetState;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid widget state transition: {from} -> {to}")]
    InvalidTransition { from: WidgetState, to: WidgetState },

    #[error("Unknown control role: {0}")]
    UnknownRole(String),

    #[error("Invalid options payload: {0}")]
    InvalidOptions(String),

    #[error("Malformed refresh response: {0}")]
    MalformedResponse(String),
}

impl DomainError {
    /// Check if this error came from the widget state machine
    pub fn is_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: WidgetState::Idle,
            to: WidgetState::Updated,
        };
        assert_eq!(
            error.to_string(),
            "Invalid widget state transition: idle -> updated"
        );
    }

    #[test]
    fn test_is_transition_check() {
        assert!(
            DomainError::InvalidTransition {
                from: WidgetState::Failed,
                to: WidgetState::Updated,
            }
            .is_transition()
        );
        assert!(!DomainError::UnknownRole("x".to_string()).is_transition());
    }
}
