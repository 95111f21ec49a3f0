use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4Swizzles};

/// Perspective camera looking down its local -Z axis with +Y up.
///
/// Screen coordinates follow the host renderer's convention: origin at the
/// bottom-left corner, x to the right, y up, measured in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// World-space orientation.
    pub rotation: Quat,
    /// World-space position. The observer sits at the origin outside
    /// Focused mode.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near_clip: f32,
    /// Far clipping plane distance.
    pub far_clip: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Far clipping plane distance.
    pub far_clip: f32,
}

impl CameraState {
    /// Camera at the origin with the given orientation and field of view.
    #[must_use]
    pub fn new(rotation: Quat, fov: f32, viewport: Vec2) -> Self {
        Self {
            rotation,
            position: Vec3::ZERO,
            fov,
            near_clip: 0.3,
            far_clip: 120.0,
            viewport,
        }
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Unit vector pointing to the top of the screen.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Perspective projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect(),
            self.near_clip,
            self.far_clip,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world position to normalized viewport coordinates.
    ///
    /// `x` and `y` are in `[0, 1]` for points inside the view, with
    /// `(0.5, 0.5)` at the image center. `z` is the distance in front of
    /// the camera along its forward axis (negative when behind). Points
    /// behind the camera project mirrored through the center, so callers
    /// that care must check `z` or facing.
    #[must_use]
    pub fn world_to_viewport(&self, world: Vec3) -> Vec3 {
        let clip = self.build_matrix() * world.extend(1.0);
        let w = if clip.w.abs() < f32::EPSILON {
            f32::EPSILON.copysign(clip.w)
        } else {
            clip.w
        };
        let ndc = clip.xy() / w;
        let depth = (world - self.position).dot(self.forward());
        Vec3::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5, depth)
    }

    /// Project a world position to screen pixels. `z` carries the same
    /// forward distance as [`world_to_viewport`](Self::world_to_viewport).
    #[must_use]
    pub fn world_to_screen(&self, world: Vec3) -> Vec3 {
        let vp = self.world_to_viewport(world);
        Vec3::new(vp.x * self.viewport.x, vp.y * self.viewport.y, vp.z)
    }

    /// Turn the camera to look along `direction`, keeping world +Y up.
    pub fn look_along(&mut self, direction: Vec3) {
        self.rotation = look_rotation(direction, Vec3::Y);
    }

    /// Pack the per-frame outputs for GPU upload.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_matrix().to_cols_array_2d(),
            position: self.position.to_array(),
            fov: self.fov,
            forward: self.forward().to_array(),
            far_clip: self.far_clip,
        }
    }
}

/// Orientation whose forward (-Z) axis points along `direction`.
///
/// Falls back to an arbitrary perpendicular when `direction` is parallel to
/// `up`, and to identity for a zero direction.
#[must_use]
pub fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = forward.cross(up);
    if right.length_squared() < 1e-8 {
        right = forward.any_orthonormal_vector();
    }
    let right = right.normalize();
    let cam_up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, cam_up, -forward)).normalize()
}

/// Build an orientation from yaw, pitch, and roll in degrees.
///
/// Yaw turns counter-clockwise about world +Y (viewed from above). Pitch
/// is measured *below* the horizon, so 90 looks straight down and 270
/// straight up. Roll spins about the view axis.
#[must_use]
pub fn rotation_from_angles(yaw: f32, pitch: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        -pitch.to_radians(),
        roll.to_radians(),
    )
}

/// Decompose an orientation into `(yaw, pitch, roll)` degrees using the
/// conventions of [`rotation_from_angles`]. Pitch is normalized to
/// `[0, 360)`.
#[must_use]
pub fn angles_of(rotation: Quat) -> (f32, f32, f32) {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    (
        yaw.to_degrees(),
        (-pitch.to_degrees()).rem_euclid(360.0),
        roll.to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraState {
        CameraState::new(Quat::IDENTITY, 50.0, Vec2::new(1000.0, 800.0))
    }

    #[test]
    fn forward_is_negative_z() {
        let cam = camera();
        assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((cam.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let cam = camera();
        let screen = cam.world_to_screen(Vec3::new(0.0, 0.0, -100.0));
        assert!((screen.x - 500.0).abs() < 1e-2);
        assert!((screen.y - 400.0).abs() < 1e-2);
        assert!((screen.z - 100.0).abs() < 1e-3);
    }

    #[test]
    fn screen_y_grows_upward() {
        let cam = camera();
        let above = cam.world_to_screen(Vec3::new(0.0, 10.0, -100.0));
        let right = cam.world_to_screen(Vec3::new(10.0, 0.0, -100.0));
        assert!(above.y > 400.0);
        assert!(right.x > 500.0);
    }

    #[test]
    fn point_behind_has_negative_depth() {
        let cam = camera();
        let vp = cam.world_to_viewport(Vec3::new(0.0, 0.0, 50.0));
        assert!(vp.z < 0.0);
    }

    #[test]
    fn look_rotation_points_forward() {
        let dir = Vec3::new(1.0, 0.5, -2.0);
        let rot = look_rotation(dir, Vec3::Y);
        let fwd = rot * Vec3::NEG_Z;
        assert!((fwd - dir.normalize()).length() < 1e-5);
    }

    #[test]
    fn look_rotation_handles_vertical() {
        let rot = look_rotation(Vec3::Y, Vec3::Y);
        let fwd = rot * Vec3::NEG_Z;
        assert!((fwd - Vec3::Y).length() < 1e-5);
        assert_eq!(look_rotation(Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn angles_round_trip() {
        let rot = rotation_from_angles(30.0, 20.0, 0.0);
        let (yaw, pitch, roll) = angles_of(rot);
        assert!((yaw - 30.0).abs() < 1e-3);
        assert!((pitch - 20.0).abs() < 1e-3);
        assert!(roll.abs() < 1e-3);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let rot = rotation_from_angles(0.0, 45.0, 0.0);
        assert!((rot * Vec3::NEG_Z).y < 0.0);
        let (_, pitch, _) = angles_of(rotation_from_angles(0.0, -10.0, 0.0));
        assert!((pitch - 350.0).abs() < 1e-3);
    }

    #[test]
    fn uniform_carries_outputs() {
        let mut cam = camera();
        cam.far_clip = 50.0;
        let u = cam.uniform();
        assert_eq!(u.fov, 50.0);
        assert_eq!(u.far_clip, 50.0);
        assert_eq!(u.forward, [0.0, 0.0, -1.0]);
    }
}
