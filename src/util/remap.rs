//! Linear and piecewise-linear range remapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Map `value` from the range `[from_start, from_end]` onto
/// `[to_start, to_end]` without clamping.
///
/// Either range may be descending. A degenerate source range maps
/// everything to `to_start`.
#[must_use]
pub fn remap(
    value: f32,
    from_start: f32,
    from_end: f32,
    to_start: f32,
    to_end: f32,
) -> f32 {
    let span = from_end - from_start;
    if span == 0.0 {
        return to_start;
    }
    to_start + (value - from_start) / span * (to_end - to_start)
}

/// One input sub-range of a balanced remap and the percentage of the
/// output span it covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BalancedSegment {
    /// Input value where the segment starts.
    pub from: f32,
    /// Input value where the segment ends.
    pub to: f32,
    /// Share of the output span covered by this segment, in percent.
    pub weight: f32,
}

impl BalancedSegment {
    /// Create a segment covering `[from, to]` with `weight` percent of the
    /// output span.
    #[must_use]
    pub const fn new(from: f32, to: f32, weight: f32) -> Self {
        Self { from, to, weight }
    }
}

/// Piecewise-linear remap of `value` onto `[out_start, out_end]`.
///
/// Segments are walked in order; each one consumes `weight` percent of
/// the output span, so a short input range can be given a large share of
/// the output. Values outside the segments clamp to the nearest end.
#[must_use]
pub fn remap_balanced(
    value: f32,
    out_start: f32,
    out_end: f32,
    segments: &[BalancedSegment],
) -> f32 {
    let span = out_end - out_start;
    let mut acc = out_start;

    for (i, seg) in segments.iter().enumerate() {
        let share = span * seg.weight / 100.0;
        let is_last = i + 1 == segments.len();
        if value <= seg.to || is_last {
            let t = if seg.to == seg.from {
                1.0
            } else {
                ((value - seg.from) / (seg.to - seg.from)).clamp(0.0, 1.0)
            };
            return acc + share * t;
        }
        acc += share;
    }

    acc
}
