//! Smooth-scroll vocabulary.

pub mod easing;

pub use easing::Easing;
