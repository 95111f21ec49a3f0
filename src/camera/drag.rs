//! Touch-drag rotation for Manual mode.

use glam::Quat;

use super::core::{angles_of, rotation_from_angles, CameraState};
use crate::input::{Touch, TouchPhase};

/// Keep pitch out of the band that would carry the camera over a pole.
///
/// Pitch is in degrees below the horizon, normalized to `[0, 360)` first.
/// Anything in `[90, 180]` sticks at 90 (straight down); anything in
/// `[180, 275]` sticks at 275 (just short of straight up).
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    let pitch = pitch.rem_euclid(360.0);
    if (90.0..=180.0).contains(&pitch) {
        90.0
    } else if (180.0..=275.0).contains(&pitch) {
        275.0
    } else {
        pitch
    }
}

/// Converts single-finger drags into pitch/yaw rotation.
#[derive(Debug, Clone)]
pub struct ManualDragController {
    drag_sensitivity: f32,
}

impl ManualDragController {
    /// Create a controller with the given drag sensitivity.
    #[must_use]
    pub fn new(drag_sensitivity: f32) -> Self {
        Self { drag_sensitivity }
    }

    /// Target rotation after dragging by `touch` from the camera's current
    /// orientation.
    ///
    /// The per-pixel step is `fov / drag_sensitivity` degrees, so zooming in
    /// makes the same drag turn the view less.
    #[must_use]
    pub fn dragged_rotation(&self, camera: &CameraState, touch: &Touch) -> Quat {
        let (yaw, pitch, roll) = angles_of(camera.rotation);
        let sensitivity = self.drag_sensitivity / camera.fov;
        let pitch = clamp_pitch(pitch + touch.delta.y / sensitivity);
        let yaw = yaw + touch.delta.x / sensitivity;
        rotation_from_angles(yaw, pitch, roll)
    }

    /// Manual-mode frame step.
    ///
    /// Skipped entirely while the pointer is over UI. A single moving touch
    /// retargets `target`; the camera then blends toward `target` at
    /// `smoothing`.
    pub fn apply(
        &self,
        camera: &mut CameraState,
        target: &mut Quat,
        touches: &[Touch],
        pointer_over_ui: bool,
        smoothing: f32,
    ) {
        if pointer_over_ui {
            return;
        }

        if let [touch] = touches {
            if touch.phase == TouchPhase::Moved {
                *target = self.dragged_rotation(camera, touch);
            }
        }

        camera.rotation = camera
            .rotation
            .slerp(*target, smoothing.clamp(0.0, 1.0))
            .normalize();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    fn camera() -> CameraState {
        CameraState::new(Quat::IDENTITY, 50.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn pitch_clamp_bands() {
        assert_eq!(clamp_pitch(95.0), 90.0);
        assert_eq!(clamp_pitch(270.0), 275.0);
        assert_eq!(clamp_pitch(45.0), 45.0);
        assert_eq!(clamp_pitch(90.0), 90.0);
        assert_eq!(clamp_pitch(180.0), 90.0);
        assert_eq!(clamp_pitch(300.0), 300.0);
        // Negative pitch wraps before clamping
        assert_eq!(clamp_pitch(-100.0), 275.0);
    }

    #[test]
    fn drag_up_looks_down() {
        let drag = ManualDragController::new(2.0);
        let cam = camera();
        let touch = Touch::moved(Vec2::new(100.0, 100.0), Vec2::new(0.0, 0.1));
        let target = drag.dragged_rotation(&cam, &touch);
        let (_, pitch, _) = angles_of(target);
        // 0.1 px at 25 deg/px
        assert!((pitch - 2.5).abs() < 1e-3, "pitch {pitch}");
    }

    #[test]
    fn narrower_fov_turns_less() {
        let drag = ManualDragController::new(2.0);
        let touch = Touch::moved(Vec2::ZERO, Vec2::new(0.1, 0.0));
        let wide = camera();
        let mut narrow = camera();
        narrow.fov = 10.0;

        let turned_wide = drag.dragged_rotation(&wide, &touch);
        let turned_narrow = drag.dragged_rotation(&narrow, &touch);
        assert!(
            turned_narrow.angle_between(Quat::IDENTITY)
                < turned_wide.angle_between(Quat::IDENTITY)
        );
    }

    #[test]
    fn large_drag_sticks_at_nadir() {
        let drag = ManualDragController::new(2.0);
        let cam = camera();
        let touch = Touch::moved(Vec2::ZERO, Vec2::new(0.0, 4.0));
        let target = drag.dragged_rotation(&cam, &touch);
        let fwd = target * Vec3::NEG_Z;
        assert!((fwd - Vec3::NEG_Y).length() < 1e-3, "got {fwd}");
    }

    #[test]
    fn over_ui_leaves_camera_alone() {
        let drag = ManualDragController::new(2.0);
        let mut cam = camera();
        let mut target = Quat::from_rotation_y(1.0);
        let touch = Touch::moved(Vec2::ZERO, Vec2::new(1.0, 0.0));
        drag.apply(&mut cam, &mut target, &[touch], true, 0.1);
        assert_eq!(cam.rotation, Quat::IDENTITY);
        assert_eq!(target, Quat::from_rotation_y(1.0));
    }

    #[test]
    fn camera_blends_toward_target_without_touch() {
        let drag = ManualDragController::new(2.0);
        let mut cam = camera();
        let mut target = Quat::from_rotation_y(1.0);
        drag.apply(&mut cam, &mut target, &[], false, 0.5);
        let moved = cam.rotation.angle_between(Quat::IDENTITY);
        assert!((moved - 0.5).abs() < 1e-3);
    }

    #[test]
    fn stationary_touch_does_not_retarget() {
        let drag = ManualDragController::new(2.0);
        let mut cam = camera();
        let mut target = Quat::IDENTITY;
        let touch = Touch::at(Vec2::new(10.0, 10.0));
        drag.apply(&mut cam, &mut target, &[touch], false, 0.1);
        assert_eq!(target, Quat::IDENTITY);
    }
}
