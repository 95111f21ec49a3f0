//! Centralized controller options with TOML preset support.
//!
//! All tweakable settings (camera smoothing and sensitivity, tap thresholds,
//! pick radii, label layout, transition timing) are consolidated here.
//! Options serialize to/from TOML so a host can ship device-specific
//! presets.

mod camera;
mod gesture;
mod labels;
mod selection;
mod transitions;

use std::path::Path;

pub use camera::{CameraOptions, FovRange};
pub use gesture::GestureOptions;
pub use labels::LabelOptions;
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};
pub use transitions::TransitionOptions;

use crate::error::SkyError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct SkyOptions {
    /// Camera smoothing, sensitivity, and projection parameters.
    pub camera: CameraOptions,
    /// Tap-versus-drag thresholds.
    pub gesture: GestureOptions,
    /// Nearest-object search radii.
    pub selection: SelectionOptions,
    /// Label pool and placement.
    pub labels: LabelOptions,
    /// Mode-switch animation timing.
    pub transitions: TransitionOptions,
}

impl SkyOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SkyOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// Field-of-view ranges must be finite with `min <= max`.
    pub fn load(path: &Path) -> Result<Self, SkyError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| SkyError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject inverted or non-finite field-of-view ranges.
    pub fn validate(&self) -> Result<(), SkyError> {
        let ranges = [
            ("camera.sky_fov_range", self.camera.sky_fov_range),
            ("camera.focused_fov_range", self.camera.focused_fov_range),
            ("labels.offset_fov_range", self.labels.offset_fov_range),
        ];
        for (name, range) in ranges {
            if !range.is_valid() {
                return Err(SkyError::OptionsParse(format!(
                    "{name}: expected finite min <= max, got [{}, {}]",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SkyError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkyError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(SkyError::Io)
    }
}
