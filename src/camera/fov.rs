//! Pinch-to-zoom field of view.

use super::core::CameraState;
use crate::input::Touch;
use crate::options::FovRange;

/// Change in distance between two touches since the previous frame.
///
/// Positive when the fingers spread apart. `None` unless exactly two
/// touches are active.
#[must_use]
pub fn pinch_delta(touches: &[Touch]) -> Option<f32> {
    let [first, second] = touches else {
        return None;
    };
    let now = first.position.distance(second.position);
    let before = first
        .previous_position()
        .distance(second.previous_position());
    Some(now - before)
}

/// Pinch-to-zoom with a caller-supplied clamp range.
#[derive(Debug, Clone)]
pub struct FieldOfViewController {
    fov_sensitivity: f32,
}

impl FieldOfViewController {
    /// Create a controller where `fov_sensitivity` pixels of pinch change
    /// the field of view by one degree.
    #[must_use]
    pub fn new(fov_sensitivity: f32) -> Self {
        Self { fov_sensitivity }
    }

    /// Apply this frame's pinch, if any, then clamp to `range`.
    ///
    /// Spreading the fingers narrows the field of view (zooms in). Returns
    /// `true` when a pinch was processed.
    pub fn apply(
        &self,
        camera: &mut CameraState,
        touches: &[Touch],
        range: FovRange,
    ) -> bool {
        let Some(delta) = pinch_delta(touches) else {
            return false;
        };
        camera.fov = range.clamp(camera.fov - delta / self.fov_sensitivity);
        log::trace!("Pinch {delta:.2}px -> fov {:.2}", camera.fov);
        true
    }
}
