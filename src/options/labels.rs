use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::camera::FovRange;
use crate::util::remap::BalancedSegment;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Labels", inline)]
#[serde(default)]
/// Label pool size, source selection, and vertical offset curve.
pub struct LabelOptions {
    /// Number of label slots. Fixed for the lifetime of a controller.
    #[schemars(title = "Label Count", range(min = 0, max = 64))]
    pub slot_count: usize,
    /// Above this field of view labels come from the principal ranking,
    /// at or below it from the closest ranking.
    #[schemars(title = "Principal Labels Above FOV", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub principal_fov_threshold: f32,
    /// Field of view is clamped to this range before the offset remap.
    #[schemars(skip)]
    pub offset_fov_range: FovRange,
    /// Offset at the low end of `offset_fov_range`.
    #[schemars(skip)]
    pub offset_start: f32,
    /// Offset at the high end of `offset_fov_range`.
    #[schemars(skip)]
    pub offset_end: f32,
    /// How the offset span is shared across field-of-view sub-ranges.
    #[schemars(skip)]
    pub offset_segments: Vec<BalancedSegment>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            slot_count: 10,
            principal_fov_threshold: 15.0,
            offset_fov_range: FovRange::new(1.0, 50.0),
            offset_start: 70.0,
            offset_end: 30.0,
            offset_segments: vec![
                BalancedSegment::new(1.0, 8.0, 80.0),
                BalancedSegment::new(8.0, 50.0, 20.0),
            ],
        }
    }
}
