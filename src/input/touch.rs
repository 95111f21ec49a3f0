use glam::{Quat, Vec2};

use crate::scene::ObjectId;

/// Lifecycle phase of a touch contact, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPhase {
    /// The finger touched down this frame.
    #[default]
    Began,
    /// The finger moved since the last frame.
    Moved,
    /// The finger is down but did not move.
    Stationary,
    /// The finger lifted this frame.
    Ended,
    /// The platform cancelled the contact.
    Canceled,
}

/// One active touch contact for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Touch {
    /// Screen position in pixels (origin bottom-left, y up).
    pub position: Vec2,
    /// Movement since the previous frame, in pixels.
    pub delta: Vec2,
    /// Contact phase.
    pub phase: TouchPhase,
}

impl Touch {
    /// A stationary contact at `position`.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
            phase: TouchPhase::Stationary,
        }
    }

    /// A contact at `position` that moved by `delta` this frame.
    #[must_use]
    pub fn moved(position: Vec2, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            phase: TouchPhase::Moved,
        }
    }

    /// Where this contact was one frame ago.
    #[must_use]
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Everything the controller reads from the outside world for one frame.
///
/// Built fresh by the host every frame; nothing in here outlives the
/// [`update`](crate::controller::ModeController::update) call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput<'a> {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Raw device attitude, if the sensor produced a reading.
    pub attitude: Option<Quat>,
    /// Active touch contacts.
    pub touches: &'a [Touch],
    /// Whether the pointer currently sits over a UI element.
    pub pointer_over_ui: bool,
    /// Externally ranked principal objects visible this frame.
    pub principal_ranking: &'a [ObjectId],
    /// Externally ranked objects closest to the view center this frame.
    pub closest_ranking: &'a [ObjectId],
}

impl<'a> FrameInput<'a> {
    /// Input for a frame lasting `dt` seconds with no sensor or touch data.
    #[must_use]
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Attach a sensor attitude reading.
    #[must_use]
    pub fn with_attitude(mut self, attitude: Quat) -> Self {
        self.attitude = Some(attitude);
        self
    }

    /// Attach the active touches.
    #[must_use]
    pub fn with_touches(mut self, touches: &'a [Touch]) -> Self {
        self.touches = touches;
        self
    }

    /// Mark the pointer as over a UI element.
    #[must_use]
    pub fn over_ui(mut self, over: bool) -> Self {
        self.pointer_over_ui = over;
        self
    }

    /// Attach the principal and closest rankings used for labels.
    #[must_use]
    pub fn with_rankings(
        mut self,
        principal: &'a [ObjectId],
        closest: &'a [ObjectId],
    ) -> Self {
        self.principal_ranking = principal;
        self.closest_ranking = closest;
        self
    }
}
