//! Animated switch into or out of Focused mode.

use glam::Vec3;

use super::easing::EasingFunction;
use crate::camera::CameraState;
use crate::scene::ObjectId;

/// Which way a transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fly toward the object and widen the view.
    EnterFocus(ObjectId),
    /// Fly back to the observer and face the object from there.
    LeaveFocus,
}

/// Time-accumulated interpolation between a captured camera state and a
/// mode's end state.
///
/// The animation only records the start of the flight and its progress;
/// the end position depends on the live camera and is resolved by the
/// caller each frame. Progress advances by elapsed time, so the wall-clock
/// duration does not depend on frame rate.
#[derive(Debug, Clone)]
pub struct TransitionAnimation {
    kind: TransitionKind,
    start_position: Vec3,
    start_forward: Vec3,
    start_fov: f32,
    end_fov: f32,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

impl TransitionAnimation {
    /// Capture `camera` as the start state of a transition ending at
    /// `end_fov` after `duration` seconds.
    #[must_use]
    pub fn new(
        kind: TransitionKind,
        camera: &CameraState,
        end_fov: f32,
        duration: f32,
    ) -> Self {
        Self {
            kind,
            start_position: camera.position,
            start_forward: camera.forward(),
            start_fov: camera.fov,
            end_fov,
            duration,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
        }
    }

    /// Use a non-linear easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Direction of the transition.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Camera position when the transition started.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    /// Camera forward direction when the transition started.
    #[must_use]
    pub fn start_forward(&self) -> Vec3 {
        self.start_forward
    }

    /// Field of view the transition ends at.
    #[must_use]
    pub fn end_fov(&self) -> f32 {
        self.end_fov
    }

    /// Raw progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn eased(&self) -> f32 {
        self.easing.evaluate(self.progress())
    }

    /// Field of view at eased progress `t`.
    #[must_use]
    pub fn fov_at(&self, t: f32) -> f32 {
        self.start_fov + (self.end_fov - self.start_fov) * t
    }

    /// Whether the accumulated time has reached the duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Accumulate `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}
