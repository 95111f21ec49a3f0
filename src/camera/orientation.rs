//! Device attitude to camera rotation, with a one-time yaw calibration.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Quat;

use super::core::{angles_of, CameraState};
use crate::util::remap::remap;

/// Rotation sensitivity for a given field of view.
///
/// FOV 30 maps to 1.0 and FOV 1 maps to 0.1, extrapolating linearly
/// outside that range, so zoomed-in views turn more slowly.
#[must_use]
pub fn fov_sensitivity(fov: f32) -> f32 {
    remap(fov, 30.0, 1.0, 1.0, 0.1)
}

/// Express a raw sensor attitude in scene space.
///
/// The sensor reports orientation relative to a z-up reference frame with
/// the device's back camera along its local -Z. The reference frame is
/// first tipped a quarter turn about X so that its up axis becomes the
/// scene's +Y, then turned half way round about +Y so sensor north faces
/// the scene's authored forward.
#[must_use]
pub fn sensor_to_world(attitude: Quat) -> Quat {
    let tip_up = Quat::from_rotation_x(-FRAC_PI_2);
    let face_north = Quat::from_rotation_y(PI);
    (face_north * tip_up * attitude).normalize()
}

/// Turns raw attitude samples into a smoothed camera rotation.
///
/// A calibration pass runs once, `delay` seconds after construction: it
/// records how far the sensor yaw sits from the camera's authored yaw and
/// counter-rotates every later reading by that amount. On the calibration
/// frame smoothing is forced to 1 so the camera snaps into place.
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    initial_yaw: f32,
    offset: Option<f32>,
    countdown: Option<f32>,
    snap_this_frame: bool,
    last_raw_yaw: f32,
}

impl OrientationEstimator {
    /// Create an estimator for a camera authored with `initial_rotation`,
    /// calibrating after `delay` seconds.
    #[must_use]
    pub fn new(initial_rotation: Quat, delay: f32) -> Self {
        let (initial_yaw, _, _) = angles_of(initial_rotation);
        Self {
            initial_yaw,
            offset: None,
            countdown: Some(delay.max(0.0)),
            snap_this_frame: false,
            last_raw_yaw: 0.0,
        }
    }

    /// The yaw correction in degrees, once calibrated.
    #[must_use]
    pub fn calibration_offset(&self) -> Option<f32> {
        self.offset
    }

    /// Schedule a fresh calibration for the next frame.
    pub fn recalibrate(&mut self) {
        self.countdown = Some(0.0);
    }

    /// Smoothing to use this frame: 1 on the calibration frame, else
    /// `configured`.
    #[must_use]
    pub fn smoothing(&self, configured: f32) -> f32 {
        if self.snap_this_frame {
            1.0
        } else {
            configured
        }
    }

    /// Advance the calibration schedule by `dt` seconds.
    ///
    /// Runs every frame regardless of mode. When the countdown expires the
    /// offset is taken from `attitude` if a reading arrived this frame,
    /// otherwise from the last reading seen (which may be stale). Returns
    /// `true` on the frame calibration happens.
    pub fn advance_calibration(
        &mut self,
        dt: f32,
        attitude: Option<Quat>,
    ) -> bool {
        self.snap_this_frame = false;

        let Some(remaining) = self.countdown else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.countdown = Some(remaining);
            return false;
        }

        if let Some(attitude) = attitude {
            self.last_raw_yaw = angles_of(sensor_to_world(attitude)).0;
        }
        let offset = self.last_raw_yaw - self.initial_yaw;
        self.offset = Some(offset);
        self.countdown = None;
        self.snap_this_frame = true;
        log::info!("Calibrated sensor yaw offset: {offset:.2}°");
        true
    }

    /// Calibrated scene-space rotation for a raw attitude sample.
    ///
    /// Also remembers the uncorrected yaw for a later calibration.
    pub fn target_rotation(&mut self, attitude: Quat) -> Quat {
        let world = sensor_to_world(attitude);
        self.last_raw_yaw = angles_of(world).0;
        match self.offset {
            Some(offset) => {
                (Quat::from_rotation_y(-offset.to_radians()) * world)
                    .normalize()
            }
            None => world,
        }
    }

    /// Gyro-mode frame step.
    ///
    /// Updates `target` from `attitude` when a reading is present, then
    /// blends the camera toward it at `smoothing × fov_sensitivity`.
    pub fn apply(
        &mut self,
        camera: &mut CameraState,
        target: &mut Quat,
        attitude: Option<Quat>,
        smoothing: f32,
    ) {
        if let Some(attitude) = attitude {
            *target = self.target_rotation(attitude);
        }
        let rate =
            (self.smoothing(smoothing) * fov_sensitivity(camera.fov))
                .clamp(0.0, 1.0);
        camera.rotation = camera.rotation.slerp(*target, rate).normalize();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::core::rotation_from_angles;

    /// Smallest signed difference `a - b` between two angles in degrees.
    fn angle_delta(a: f32, b: f32) -> f32 {
        (a - b + 180.0).rem_euclid(360.0) - 180.0
    }

    fn camera(rotation: Quat) -> CameraState {
        CameraState::new(rotation, 50.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn sensitivity_endpoints() {
        assert!((fov_sensitivity(30.0) - 1.0).abs() < 1e-6);
        assert!((fov_sensitivity(1.0) - 0.1).abs() < 1e-6);
        assert!(fov_sensitivity(10.0) < fov_sensitivity(20.0));
    }

    #[test]
    fn flat_device_looks_down() {
        let world = sensor_to_world(Quat::IDENTITY);
        let fwd = world * Vec3::NEG_Z;
        assert!((fwd - Vec3::NEG_Y).length() < 1e-5, "got {fwd}");
    }

    #[test]
    fn upright_device_looks_at_horizon() {
        let upright = Quat::from_rotation_x(FRAC_PI_2);
        let world = sensor_to_world(upright);
        let fwd = world * Vec3::NEG_Z;
        assert!(fwd.y.abs() < 1e-5, "got {fwd}");
        assert!(((world * Vec3::Y) - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn calibration_waits_for_delay() {
        let mut est = OrientationEstimator::new(Quat::IDENTITY, 1.0);
        assert!(!est.advance_calibration(0.5, None));
        assert!(est.calibration_offset().is_none());
        assert!(est.advance_calibration(0.6, None));
        assert_eq!(est.calibration_offset(), Some(0.0));
        // Runs once; later frames leave the offset alone
        assert!(!est.advance_calibration(5.0, None));
    }

    #[test]
    fn calibration_frame_snaps() {
        let mut est = OrientationEstimator::new(Quat::IDENTITY, 0.0);
        assert!(est.advance_calibration(0.016, None));
        assert_eq!(est.smoothing(0.1), 1.0);
        assert!(!est.advance_calibration(0.016, None));
        assert_eq!(est.smoothing(0.1), 0.1);
    }

    #[test]
    fn calibration_is_deterministic_and_removes_yaw_drift() {
        let authored = rotation_from_angles(40.0, 0.0, 0.0);
        let attitude = Quat::from_rotation_z(0.7) * Quat::from_rotation_x(1.3);

        let mut offsets = Vec::new();
        for _ in 0..2 {
            let mut est = OrientationEstimator::new(authored, 1.0);
            let mut cam = camera(authored);
            let mut target = authored;
            for _ in 0..70 {
                let _ = est.advance_calibration(1.0 / 60.0, Some(attitude));
                est.apply(&mut cam, &mut target, Some(attitude), 0.1);
            }
            offsets.push(est.calibration_offset().unwrap());

            let (target_yaw, _, _) = angles_of(target);
            assert!(angle_delta(target_yaw, 40.0).abs() < 1e-2);
            let (cam_yaw, _, _) = angles_of(cam.rotation);
            assert!(angle_delta(cam_yaw, 40.0).abs() < 0.5, "yaw {cam_yaw}");
        }
        assert_eq!(offsets[0], offsets[1]);
    }

    #[test]
    fn recalibrate_runs_next_frame() {
        let mut est = OrientationEstimator::new(Quat::IDENTITY, 0.0);
        let level = Quat::from_rotation_x(1.2);
        let _ = est.advance_calibration(0.016, Some(level));
        let first = est.calibration_offset();

        let turned = Quat::from_rotation_z(0.5) * Quat::from_rotation_x(1.0);
        est.recalibrate();
        assert!(est.advance_calibration(0.016, Some(turned)));
        assert_ne!(est.calibration_offset(), first);
    }

    #[test]
    fn narrow_fov_blends_slower() {
        let attitude = Quat::from_rotation_x(FRAC_PI_2);
        let mut wide_est = OrientationEstimator::new(Quat::IDENTITY, 10.0);
        let mut narrow_est = OrientationEstimator::new(Quat::IDENTITY, 10.0);

        let mut wide = camera(Quat::IDENTITY);
        wide.fov = 30.0;
        let mut narrow = camera(Quat::IDENTITY);
        narrow.fov = 2.0;
        let mut t1 = Quat::IDENTITY;
        let mut t2 = Quat::IDENTITY;

        wide_est.apply(&mut wide, &mut t1, Some(attitude), 0.1);
        narrow_est.apply(&mut narrow, &mut t2, Some(attitude), 0.1);

        let moved_wide = wide.rotation.angle_between(Quat::IDENTITY);
        let moved_narrow = narrow.rotation.angle_between(Quat::IDENTITY);
        assert!(moved_narrow < moved_wide);
    }
}
