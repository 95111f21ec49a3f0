//! Mode switches: the focus flight in both directions, the Gyro/Manual
//! toggle, and the tap-driven look-at.

use glam::Vec3;

use super::{ModeController, RotationMode, SkyEvent};
use crate::animation::{LookAtAnimation, TransitionAnimation, TransitionKind};
use crate::camera::core::look_rotation;
use crate::camera::orbit::standoff_position;
use crate::scene::ObjectId;

impl ModeController {
    /// Start flying into Focused mode around `target`.
    ///
    /// Ignored while another transition runs, when `target` is `None`, or
    /// when it names no catalog object. On acceptance the target becomes
    /// the focus, labels are cleared, rankings are suspended, the compass
    /// is hidden and the object's own render is enabled. The mode flips to
    /// Focused once the flight completes.
    pub fn request_focused_mode(&mut self, target: Option<ObjectId>) -> bool {
        if self.is_switching_mode() {
            log::debug!("Focus request ignored: transition in flight");
            return false;
        }
        let Some(id) = target else {
            log::debug!("Focus request ignored: no target");
            return false;
        };
        let Some(object) = self.catalog.get(id) else {
            log::debug!("Focus request ignored: unknown object {id:?}");
            return false;
        };
        log::info!("Focusing on {}", object.name);

        if self.mode.is_sky() {
            self.saved_mode = self.mode;
        }
        self.focus = Some(id);
        self.look_at = None;
        self.labels.clear();
        self.rankings_suspended = true;
        let _ = self.catalog.set_visible(id, true);
        self.events.push(SkyEvent::ObjectRenderEnabled { id, enabled: true });
        self.events.push(SkyEvent::CompassVisibility(false));
        self.camera.far_clip = self.options.camera.focused_far_clip;

        self.transition = Some(TransitionAnimation::new(
            TransitionKind::EnterFocus(id),
            &self.camera,
            self.options.transitions.focused_fov,
            self.options.transitions.focus_duration,
        )
        .with_easing(self.options.transitions.easing));
        true
    }

    /// Start flying back from Focused mode to the saved sky mode.
    ///
    /// Only valid in Focused mode with no transition running; anything
    /// else is a no-op that leaves the camera untouched.
    pub fn request_leave_focused_mode(&mut self) -> bool {
        if self.is_switching_mode() || self.mode != RotationMode::Focused {
            return false;
        }
        log::info!("Leaving focused mode");

        self.rankings_suspended = false;
        self.events.push(SkyEvent::CompassVisibility(true));
        if let Some(id) = self.focus {
            self.events
                .push(SkyEvent::ObjectRenderEnabled { id, enabled: false });
        }
        self.camera.far_clip = self.options.camera.far_clip;

        self.transition = Some(TransitionAnimation::new(
            TransitionKind::LeaveFocus,
            &self.camera,
            self.options.transitions.sky_fov,
            self.options.transitions.focus_duration,
        )
        .with_easing(self.options.transitions.easing));
        true
    }

    /// Flip between Gyro and Manual and remember the choice.
    ///
    /// Ignored while Focused or mid-transition.
    pub fn toggle_gyro_manual(&mut self) -> bool {
        if self.is_switching_mode() || self.mode == RotationMode::Focused {
            return false;
        }
        let next = match self.mode {
            RotationMode::Gyro => RotationMode::Manual,
            _ => RotationMode::Gyro,
        };
        self.look_at = None;
        self.target_rotation = self.camera.rotation;
        self.set_mode(next);
        self.saved_mode = next;
        true
    }

    /// Replace the focus target. Unknown handles are rejected.
    pub fn set_focus_target(&mut self, id: ObjectId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        self.focus = Some(id);
        true
    }

    /// Ease the drag target toward facing `id`. Manual mode only.
    pub fn rotate_toward(&mut self, id: ObjectId) -> bool {
        if self.mode != RotationMode::Manual {
            return false;
        }
        let Some(object) = self.catalog.get(id) else {
            return false;
        };
        let goal =
            look_rotation(object.position - self.camera.position, Vec3::Y);
        self.look_at = Some(LookAtAnimation::new(
            goal,
            self.options.transitions.look_at_duration,
        ));
        true
    }

    /// Schedule a fresh yaw calibration on the next frame.
    pub fn recalibrate(&mut self) {
        log::info!("Recalibration requested");
        self.orientation.recalibrate();
    }

    pub(super) fn set_mode(&mut self, mode: RotationMode) {
        if mode == self.mode {
            return;
        }
        log::info!("Rotation mode {} -> {mode}", self.mode);
        self.events.push(SkyEvent::ModeChanged {
            from: self.mode,
            to: mode,
        });
        self.mode = mode;
    }

    /// Step the running transition and finish it when its time is up.
    pub(super) fn advance_transition(&mut self, dt: f32) {
        let Some(mut anim) = self.transition.take() else {
            return;
        };
        anim.advance(dt);
        if anim.is_finished() {
            self.complete_transition(&anim);
            return;
        }

        let t = anim.eased();
        self.camera.fov = anim.fov_at(t);
        let focus = self.focus.and_then(|id| self.catalog.get(id));

        match anim.kind() {
            TransitionKind::EnterFocus(id) => {
                if let Some(object) = self.catalog.get(id) {
                    let goal = standoff_position(
                        object,
                        self.camera.forward(),
                        self.orbit.standoff(),
                    );
                    self.camera.position =
                        anim.start_position().lerp(goal, t);
                }
            }
            TransitionKind::LeaveFocus => {
                self.camera.position =
                    anim.start_position().lerp(Vec3::ZERO, t);
                if let Some(object) = focus {
                    let toward = (object.position - self.camera.position)
                        .normalize_or_zero();
                    self.camera.look_along(anim.start_forward().lerp(toward, t));
                }
            }
        }
        self.transition = Some(anim);
    }

    fn complete_transition(&mut self, anim: &TransitionAnimation) {
        self.camera.fov = anim.end_fov();
        match anim.kind() {
            TransitionKind::EnterFocus(id) => {
                if let Some(object) = self.catalog.get(id) {
                    self.camera.position = standoff_position(
                        object,
                        self.camera.forward(),
                        self.orbit.standoff(),
                    );
                }
                self.set_mode(RotationMode::Focused);
            }
            TransitionKind::LeaveFocus => {
                self.camera.position = Vec3::ZERO;
                if let Some(object) =
                    self.focus.and_then(|id| self.catalog.get(id))
                {
                    self.camera.look_along(object.position);
                }
                self.target_rotation = self.camera.rotation;
                self.set_mode(self.saved_mode);
            }
        }
    }
}
