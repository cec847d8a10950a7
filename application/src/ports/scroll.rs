//! Scroll animation port

use async_trait::async_trait;
use std::time::Duration;
use toolbar_domain::Easing;

/// Animates the page scroll position.
///
/// `animate_to` resolves only once the animation has finished; the widget
/// relies on this to defer content replacement until the scroll settles.
#[async_trait]
pub trait ScrollAnimator: Send + Sync {
    async fn animate_to(&self, target_px: i64, duration: Duration, easing: Easing);
}

/// Animator that does nothing and completes immediately.
pub struct NoScroll;

#[async_trait]
impl ScrollAnimator for NoScroll {
    async fn animate_to(&self, _target_px: i64, _duration: Duration, _easing: Easing) {}
}
