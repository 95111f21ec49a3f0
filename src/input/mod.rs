//! Input handling: per-frame touch and sensor snapshots, and the
//! tap-versus-drag classifier used for object selection.

/// Tap-versus-drag state machine.
pub mod tap;
/// Touch contacts and the per-frame input snapshot.
pub mod touch;

pub use tap::TapClassifier;
pub use touch::{FrameInput, Touch, TouchPhase};
