//! The controller's complete external vocabulary.
//!
//! GUI buttons, key bindings and API callers all build a [`SkyCommand`]
//! and hand it to [`ModeController::execute`].

use super::ModeController;
use crate::scene::ObjectId;

/// A user-facing operation on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCommand {
    /// Fly to the current focus target and orbit it.
    RequestFocusedMode,
    /// Fly back to the observer and restore the saved sky mode.
    LeaveFocusedMode,
    /// Flip between Gyro and Manual.
    ToggleGyroManual,
    /// Replace the focus target.
    SetFocusTarget {
        /// Object to focus.
        id: ObjectId,
    },
    /// Turn toward an object (Manual mode only).
    RotateToward {
        /// Object to face.
        id: ObjectId,
    },
    /// Schedule a fresh yaw calibration.
    Recalibrate,
}

impl ModeController {
    /// Run a command. Returns `true` if it changed any state, `false` when
    /// it was ignored by policy (e.g. a transition is already running).
    pub fn execute(&mut self, command: SkyCommand) -> bool {
        log::debug!("Executing {command:?}");
        match command {
            SkyCommand::RequestFocusedMode => {
                self.request_focused_mode(self.focus_target())
            }
            SkyCommand::LeaveFocusedMode => self.request_leave_focused_mode(),
            SkyCommand::ToggleGyroManual => self.toggle_gyro_manual(),
            SkyCommand::SetFocusTarget { id } => self.set_focus_target(id),
            SkyCommand::RotateToward { id } => self.rotate_toward(id),
            SkyCommand::Recalibrate => {
                self.recalibrate();
                true
            }
        }
    }
}
