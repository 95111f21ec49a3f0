//! Time-driven camera animations.
//!
//! Animations here are plain values advanced by an explicit per-frame call;
//! completion is a state check on the animation, never a callback.

/// Easing curves.
pub mod easing;
/// Turn-to-face animation after a tap selection.
pub mod look_at;
/// Enter/leave Focused mode flights.
pub mod transition;

pub use easing::EasingFunction;
pub use look_at::LookAtAnimation;
pub use transition::{TransitionAnimation, TransitionKind};
