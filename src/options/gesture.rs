use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Tap-versus-drag classification thresholds.
///
/// A release counts as a tap when the accumulated still-time lies strictly
/// between `tap_min_duration` and `tap_max_duration`.
pub struct GestureOptions {
    /// Shortest accepted tap, in seconds. Shorter contacts are noise.
    #[schemars(title = "Min Tap Duration", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub tap_min_duration: f32,
    /// Longest accepted tap, in seconds. Longer contacts are holds.
    #[schemars(title = "Max Tap Duration", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub tap_max_duration: f32,
    /// Per-frame movement above which the contact becomes a drag.
    #[schemars(skip)]
    pub jitter_threshold: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            tap_min_duration: 0.05,
            tap_max_duration: 0.2,
            jitter_threshold: 0.05,
        }
    }
}
