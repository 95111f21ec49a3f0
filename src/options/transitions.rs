use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Durations and end states of the animated mode switches.
pub struct TransitionOptions {
    /// Seconds to fly into or out of Focused mode.
    #[schemars(title = "Focus Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub focus_duration: f32,
    /// Seconds to turn toward a tapped object in Manual mode.
    #[schemars(title = "Look-At Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub look_at_duration: f32,
    /// Field of view reached when entering Focused mode.
    #[schemars(skip)]
    pub focused_fov: f32,
    /// Field of view restored when leaving Focused mode.
    #[schemars(skip)]
    pub sky_fov: f32,
    /// Curve applied to focus-flight progress.
    #[schemars(title = "Focus Easing")]
    pub easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            focus_duration: 1.0,
            look_at_duration: 0.5,
            focused_fov: 80.0,
            sky_fov: 50.0,
            easing: EasingFunction::Linear,
        }
    }
}
