use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive field-of-view range in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FovRange {
    /// Narrowest allowed field of view.
    pub min: f32,
    /// Widest allowed field of view.
    pub max: f32,
}

impl FovRange {
    /// Create a range from its bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `fov` into this range. Inverted bounds are treated as if
    /// swapped.
    #[must_use]
    pub fn clamp(&self, fov: f32) -> f32 {
        let (lo, hi) = self.ordered();
        fov.max(lo).min(hi)
    }

    /// Whether both bounds are finite and `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    fn ordered(&self) -> (f32, f32) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Whether `fov` lies inside this range.
    #[must_use]
    pub fn contains(&self, fov: f32) -> bool {
        (self.min..=self.max).contains(&fov)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera smoothing, sensitivity, and projection parameters.
pub struct CameraOptions {
    /// Per-frame blend rate toward the target rotation (0 = frozen, 1 =
    /// snap).
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Drag sensitivity; divided by the field of view to get pixels per
    /// degree.
    #[schemars(title = "Drag Sensitivity", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub drag_sensitivity: f32,
    /// Pixels of pinch distance per degree of field of view.
    #[schemars(title = "Pinch Sensitivity", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub fov_sensitivity: f32,
    /// Field of view at startup, in degrees.
    #[schemars(skip)]
    pub initial_fov: f32,
    /// Far clipping distance outside Focused mode.
    #[schemars(skip)]
    pub far_clip: f32,
    /// Far clipping distance while Focused.
    #[schemars(skip)]
    pub focused_far_clip: f32,
    /// Near clipping distance.
    #[schemars(skip)]
    pub near_clip: f32,
    /// Pinch-zoom range in Gyro and Manual modes.
    #[schemars(skip)]
    pub sky_fov_range: FovRange,
    /// Pinch-zoom range in Focused mode.
    #[schemars(skip)]
    pub focused_fov_range: FovRange,
    /// Fraction of each touch delta applied as orbit degrees while Focused.
    #[schemars(title = "Orbit Speed", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub orbit_ease: f32,
    /// Standoff from a focused object, in multiples of its visual scale.
    #[schemars(skip)]
    pub focus_standoff: f32,
    /// Seconds after startup before the yaw calibration runs.
    #[schemars(skip)]
    pub calibration_delay: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            drag_sensitivity: 2.0,
            fov_sensitivity: 15.0,
            initial_fov: 50.0,
            far_clip: 120.0,
            focused_far_clip: 50.0,
            near_clip: 0.3,
            sky_fov_range: FovRange::new(1.0, 50.0),
            focused_fov_range: FovRange::new(30.0, 110.0),
            orbit_ease: 0.3,
            focus_standoff: 1.5,
            calibration_delay: 1.0,
        }
    }
}
