//! Scroll easing curves.
//!
//! Names follow the storefront's animation vocabulary so a configured
//! easing string maps directly onto a curve. Unknown or empty names fall
//! back to [`Easing::Swing`].

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    #[default]
    Swing,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Lenient lookup used for configuration values.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "linear" => Easing::Linear,
            "easeInQuad" => Easing::EaseInQuad,
            "easeOutQuad" => Easing::EaseOutQuad,
            "easeInOutQuad" => Easing::EaseInOutQuad,
            "easeOutCubic" => Easing::EaseOutCubic,
            _ => Easing::Swing,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Swing => "swing",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseOutCubic => "easeOutCubic",
        }
    }

    /// Progress in `[0, 1]` for elapsed fraction `t` (clamped).
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Swing => 0.5 - (t * PI).cos() / 2.0,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
        }
    }

    /// Interpolated scroll position between `from` and `to`.
    pub fn position(&self, from: i64, to: i64, t: f64) -> i64 {
        let delta = (to - from) as f64;
        from + (delta * self.apply(t)).round() as i64
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Swing,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseOutCubic,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing} at 1");
        }
    }

    #[test]
    fn test_swing_midpoint() {
        assert!((Easing::Swing.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_name_falls_back_to_swing() {
        assert_eq!(Easing::from_name(""), Easing::Swing);
        assert_eq!(Easing::from_name("bounce"), Easing::Swing);
        assert_eq!(Easing::from_name("linear"), Easing::Linear);
    }

    #[test]
    fn test_position_scrolling_up() {
        assert_eq!(Easing::Linear.position(1000, 200, 0.5), 600);
        assert_eq!(Easing::Linear.position(1000, 200, 1.0), 200);
    }
}
