use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Screen-space radii for the nearest-object search.
pub struct SelectionOptions {
    /// Largest screen distance at which an ordinary object can be picked.
    #[schemars(title = "Pick Radius", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Screen radius within which a principal object wins outright.
    #[schemars(title = "Principal Pick Radius", range(min = 10.0, max = 500.0), extend("step" = 10.0))]
    pub principal_radius: f32,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            max_distance: 300.0,
            principal_radius: 100.0,
        }
    }
}
