//! Camera state and the per-mode rotation producers.
//!
//! Exactly one producer drives the camera each frame: the orientation
//! estimator in Gyro mode, the drag controller in Manual mode, or the orbit
//! controller in Focused mode. Pinch zoom runs alongside whichever is
//! active.

/// Camera state, projection, and angle helpers.
pub mod core;
/// Touch-drag rotation with pole clamping.
pub mod drag;
/// Pinch-to-zoom field of view.
pub mod fov;
/// Device attitude to camera rotation, with yaw calibration.
pub mod orientation;
/// Orbit around a focused object.
pub mod orbit;

pub use self::core::{CameraState, CameraUniform};
pub use drag::ManualDragController;
pub use fov::FieldOfViewController;
pub use orbit::FocusOrbitController;
pub use orientation::OrientationEstimator;
