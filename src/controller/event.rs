//! Outbound notifications for the host UI.

use super::RotationMode;
use crate::scene::ObjectId;

/// Side effects the controller delegates to its host.
///
/// Events are queued during [`ModeController::update`] and the mode-switch
/// calls, and drained with
/// [`ModeController::take_events`](super::ModeController::take_events).
///
/// [`ModeController::update`]: super::ModeController::update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyEvent {
    /// A tap selected an object; show its details panel.
    FocusActivated(ObjectId),
    /// Show or hide the compass overlay.
    CompassVisibility(bool),
    /// Enable or disable an object's own close-up render.
    ObjectRenderEnabled {
        /// Object whose render flag changes.
        id: ObjectId,
        /// New state.
        enabled: bool,
    },
    /// The active rotation mode changed.
    ModeChanged {
        /// Mode before the change.
        from: RotationMode,
        /// Mode after the change.
        to: RotationMode,
    },
}
