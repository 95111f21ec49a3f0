//! The per-frame controller that owns the camera and the rotation-mode
//! state machine.
//!
//! [`ModeController::update`] is the single writer of camera state. Each
//! frame it resolves, in order:
//!
//! 1. the calibration schedule,
//! 2. a running focus transition (which suspends everything below),
//! 3. the active mode's rotation producer and pinch zoom,
//! 4. the look-at animation,
//! 5. tap selection,
//! 6. label placement.

mod command;
mod event;
mod mode;
mod transitions;

pub use command::SkyCommand;
pub use event::SkyEvent;
use glam::{Quat, Vec2};
pub use mode::RotationMode;

use crate::animation::{LookAtAnimation, TransitionAnimation};
use crate::camera::{
    CameraState, FieldOfViewController, FocusOrbitController,
    ManualDragController, OrientationEstimator,
};
use crate::input::FrameInput;
use crate::labels::{LabelPlacer, LabelSlot};
use crate::options::SkyOptions;
use crate::scene::{ObjectId, SkyCatalog};
use crate::selection::SelectionEngine;

/// Orientation, gesture, and selection controller for a sky viewer.
#[derive(Debug, Clone)]
pub struct ModeController {
    options: SkyOptions,
    camera: CameraState,
    /// Rotation the Gyro and Manual producers blend toward.
    target_rotation: Quat,
    mode: RotationMode,
    saved_mode: RotationMode,
    transition: Option<TransitionAnimation>,
    look_at: Option<LookAtAnimation>,
    focus: Option<ObjectId>,
    catalog: SkyCatalog,
    orientation: OrientationEstimator,
    drag: ManualDragController,
    orbit: FocusOrbitController,
    fov: FieldOfViewController,
    selection: SelectionEngine,
    labels: LabelPlacer,
    rankings_suspended: bool,
    events: Vec<SkyEvent>,
}

impl ModeController {
    /// Create a controller in Gyro mode with the camera at the origin.
    ///
    /// `initial_rotation` is the authored camera orientation; the sensor
    /// yaw is calibrated against it once `calibration_delay` has passed.
    #[must_use]
    pub fn new(
        options: SkyOptions,
        catalog: SkyCatalog,
        viewport: Vec2,
        initial_rotation: Quat,
    ) -> Self {
        let cam = &options.camera;
        let mut camera =
            CameraState::new(initial_rotation, cam.initial_fov, viewport);
        camera.near_clip = cam.near_clip;
        camera.far_clip = cam.far_clip;

        Self {
            camera,
            target_rotation: initial_rotation,
            mode: RotationMode::Gyro,
            saved_mode: RotationMode::Gyro,
            transition: None,
            look_at: None,
            focus: None,
            catalog,
            orientation: OrientationEstimator::new(
                initial_rotation,
                cam.calibration_delay,
            ),
            drag: ManualDragController::new(cam.drag_sensitivity),
            orbit: FocusOrbitController::new(cam.focus_standoff, cam.orbit_ease),
            fov: FieldOfViewController::new(cam.fov_sensitivity),
            selection: SelectionEngine::new(
                options.gesture.clone(),
                options.selection.clone(),
            ),
            labels: LabelPlacer::new(options.labels.clone()),
            rankings_suspended: false,
            events: Vec::new(),
            options,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self, input: &FrameInput<'_>) {
        let _ = self
            .orientation
            .advance_calibration(input.dt, input.attitude);

        if self.is_switching_mode() {
            self.advance_transition(input.dt);
            return;
        }

        let smoothing = self.options.camera.smoothing;
        match self.mode {
            RotationMode::Gyro => self.orientation.apply(
                &mut self.camera,
                &mut self.target_rotation,
                input.attitude,
                smoothing,
            ),
            RotationMode::Manual => self.drag.apply(
                &mut self.camera,
                &mut self.target_rotation,
                input.touches,
                input.pointer_over_ui,
                smoothing,
            ),
            RotationMode::Focused => {
                if let Some(object) =
                    self.focus.and_then(|id| self.catalog.get(id))
                {
                    self.orbit.apply(
                        &mut self.camera,
                        object,
                        input.touches,
                        input.pointer_over_ui,
                    );
                }
            }
        }

        let range = if self.mode == RotationMode::Focused {
            self.options.camera.focused_fov_range
        } else {
            self.options.camera.sky_fov_range
        };
        let _ = self.fov.apply(&mut self.camera, input.touches, range);

        if let Some(look) = self.look_at.as_mut() {
            let finished = look.is_finished();
            self.target_rotation = look.step(self.target_rotation, input.dt);
            if finished {
                self.look_at = None;
            }
        }

        if let Some(id) =
            self.selection.update(&self.camera, &self.catalog, input)
        {
            self.events.push(SkyEvent::FocusActivated(id));
            let _ = self.rotate_toward(id);
            let _ = self.set_focus_target(id);
        }

        if self.mode != RotationMode::Focused {
            self.labels.place(
                &self.camera,
                &self.catalog,
                input.principal_ranking,
                input.closest_ranking,
            );
        }
    }

    /// Active rotation mode.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Sky mode restored when leaving Focused.
    #[must_use]
    pub fn saved_mode(&self) -> RotationMode {
        self.saved_mode
    }

    /// Whether a focus transition is in flight.
    #[must_use]
    pub fn is_switching_mode(&self) -> bool {
        self.transition.is_some()
    }

    /// Camera state produced by the last update.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Resize the projection viewport (in pixels).
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.camera.viewport = viewport;
    }

    /// Current focus target, if any.
    #[must_use]
    pub fn focus_target(&self) -> Option<ObjectId> {
        self.focus
    }

    /// The label pool as laid out by the last update.
    #[must_use]
    pub fn label_slots(&self) -> &[LabelSlot] {
        self.labels.slots()
    }

    /// Objects the controller selects from.
    #[must_use]
    pub fn catalog(&self) -> &SkyCatalog {
        &self.catalog
    }

    /// Mutable access for scene population between frames.
    pub fn catalog_mut(&mut self) -> &mut SkyCatalog {
        &mut self.catalog
    }

    /// Sensor yaw correction in degrees, once calibrated.
    #[must_use]
    pub fn calibration_offset(&self) -> Option<f32> {
        self.orientation.calibration_offset()
    }

    /// Whether the host should stop refreshing the principal/closest
    /// rankings (true while Focused).
    #[must_use]
    pub fn rankings_suspended(&self) -> bool {
        self.rankings_suspended
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &SkyOptions {
        &self.options
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<SkyEvent> {
        std::mem::take(&mut self.events)
    }
}
