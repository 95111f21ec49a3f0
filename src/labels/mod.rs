//! Name labels for the objects nearest the center of the view.

use glam::{Vec2, Vec3};

use crate::camera::CameraState;
use crate::options::LabelOptions;
use crate::scene::{CelestialObject, ObjectId, SkyCatalog};
use crate::util::remap::remap_balanced;

/// One entry of the fixed label pool, read by the host UI every frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSlot {
    /// Opacity: 1 when showing an object, 0 when unused.
    pub alpha: f32,
    /// Display text.
    pub text: String,
    /// Screen position in pixels; `z` is the forward distance.
    pub position: Vec3,
}

/// Order visible objects from `ids` by how close their projection sits to
/// the image center, breaking ties by brightness.
///
/// Handles missing from the catalog are skipped.
#[must_use]
pub fn order_by_relevance<'a>(
    camera: &CameraState,
    catalog: &'a SkyCatalog,
    ids: &[ObjectId],
) -> Vec<&'a CelestialObject> {
    let center = Vec2::splat(0.5);
    let mut ranked: Vec<(&CelestialObject, f32)> = ids
        .iter()
        .filter_map(|&id| catalog.get(id))
        .filter(|object| object.visible)
        .map(|object| {
            let vp = camera.world_to_viewport(object.position).truncate();
            (object, vp.distance(center))
        })
        .collect();

    ranked.sort_by(|(a, da), (b, db)| {
        da.total_cmp(db).then(a.magnitude.total_cmp(&b.magnitude))
    });
    ranked.into_iter().map(|(object, _)| object).collect()
}

/// Assigns ranked objects to a fixed pool of label slots.
#[derive(Debug, Clone)]
pub struct LabelPlacer {
    slots: Vec<LabelSlot>,
    options: LabelOptions,
}

impl LabelPlacer {
    /// Create a pool of `options.slot_count` hidden slots.
    #[must_use]
    pub fn new(options: LabelOptions) -> Self {
        Self {
            slots: vec![LabelSlot::default(); options.slot_count],
            options,
        }
    }

    /// The label pool, in display-priority order.
    #[must_use]
    pub fn slots(&self) -> &[LabelSlot] {
        &self.slots
    }

    /// Vertical distance between an object and its label at `fov`.
    ///
    /// The field of view is clamped into the configured range and run
    /// through a two-segment balanced remap, so most of the offset change
    /// happens at narrow fields of view where objects are drawn large.
    #[must_use]
    pub fn label_offset(&self, fov: f32) -> f32 {
        remap_balanced(
            self.options.offset_fov_range.clamp(fov),
            self.options.offset_start,
            self.options.offset_end,
            &self.options.offset_segments,
        )
    }

    /// Hide every slot and clear its text.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.alpha = 0.0;
            slot.text.clear();
        }
    }

    /// Lay out labels for this frame.
    ///
    /// Wide views label the principal ranking, narrow views the closest
    /// ranking. Slots beyond the number of visible objects are hidden.
    pub fn place(
        &mut self,
        camera: &CameraState,
        catalog: &SkyCatalog,
        principal: &[ObjectId],
        closest: &[ObjectId],
    ) {
        let source = if camera.fov > self.options.principal_fov_threshold {
            principal
        } else {
            closest
        };
        let ordered = order_by_relevance(camera, catalog, source);
        let offset = self.label_offset(camera.fov);

        for (i, slot) in self.slots.iter_mut().enumerate() {
            let Some(object) = ordered.get(i) else {
                slot.alpha = 0.0;
                continue;
            };
            let screen = camera.world_to_screen(object.position);
            slot.alpha = 1.0;
            slot.text.clone_from(&object.name);
            slot.position = Vec3::new(screen.x, screen.y - offset, screen.z);
        }
    }
}
