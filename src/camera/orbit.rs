//! Orbiting around a focused object.

use glam::{Quat, Vec3};

use super::core::CameraState;
use crate::input::Touch;
use crate::scene::CelestialObject;

/// Where the camera sits to frame `object` while looking along `forward`.
///
/// The distance is `standoff × object.scale`, so larger bodies are viewed
/// from further away.
#[must_use]
pub fn standoff_position(
    object: &CelestialObject,
    forward: Vec3,
    standoff: f32,
) -> Vec3 {
    object.position - forward * standoff * object.scale
}

/// Rotate the camera's position and orientation about an axis through
/// `pivot` by `angle` radians.
pub fn rotate_around(
    camera: &mut CameraState,
    pivot: Vec3,
    axis: Vec3,
    angle: f32,
) {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO || angle == 0.0 {
        return;
    }
    let rotation = Quat::from_axis_angle(axis, angle);
    camera.position = pivot + rotation * (camera.position - pivot);
    camera.rotation = (rotation * camera.rotation).normalize();
}

/// Focused-mode camera: fixed standoff plus touch-driven orbit.
#[derive(Debug, Clone)]
pub struct FocusOrbitController {
    standoff: f32,
    ease: f32,
}

impl FocusOrbitController {
    /// Create an orbit controller. `standoff` is in multiples of the
    /// object's scale, `ease` is the fraction of each touch delta (in
    /// pixels) applied as degrees of orbit.
    #[must_use]
    pub fn new(standoff: f32, ease: f32) -> Self {
        Self { standoff, ease }
    }

    /// Standoff multiple.
    #[must_use]
    pub fn standoff(&self) -> f32 {
        self.standoff
    }

    /// Focused-mode frame step.
    ///
    /// Re-seats the camera at the standoff distance every frame. Unless the
    /// pointer is over UI, a single touch orbits the camera about the
    /// object: vertical movement around the camera's right axis, horizontal
    /// around its up axis. The deltas are applied once, not carried over.
    pub fn apply(
        &self,
        camera: &mut CameraState,
        object: &CelestialObject,
        touches: &[Touch],
        pointer_over_ui: bool,
    ) {
        camera.position =
            standoff_position(object, camera.forward(), self.standoff);

        if pointer_over_ui {
            return;
        }

        if let [touch] = touches {
            let pitch = lerp(0.0, touch.delta.y, self.ease);
            let yaw = lerp(0.0, touch.delta.x, self.ease);
            let right = camera.right();
            rotate_around(camera, object.position, right, pitch.to_radians());
            let up = camera.up();
            rotate_around(camera, object.position, up, -yaw.to_radians());
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
