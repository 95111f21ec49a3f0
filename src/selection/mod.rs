//! Tap selection: gesture classification plus a nearest-object search in
//! screen space.

use glam::Vec2;

use crate::camera::CameraState;
use crate::input::{FrameInput, TapClassifier};
use crate::options::{GestureOptions, SelectionOptions};
use crate::scene::{CelestialObject, ObjectId, SkyCatalog};

/// Find the object a tap at `screen_pos` most plausibly meant.
///
/// Objects behind the camera are never picked. A principal object within
/// `principal_radius` pixels wins immediately, in catalog order. Otherwise
/// the visible object whose projection lies closest to `screen_pos` is
/// returned, provided it is within `max_distance` pixels.
#[must_use]
pub fn find_nearest<'a>(
    camera: &CameraState,
    catalog: &'a SkyCatalog,
    screen_pos: Vec2,
    options: &SelectionOptions,
) -> Option<&'a CelestialObject> {
    let forward = camera.forward();
    let mut best: Option<(&CelestialObject, f32)> = None;

    for object in catalog.iter() {
        let offset = object.position - camera.position;
        let angle = forward.angle_between(offset);
        let is_facing = angle.cos() * offset.length() > 0.0;
        if !is_facing {
            continue;
        }

        let screen = camera.world_to_screen(object.position).truncate();
        let screen_distance = screen_pos.distance(screen);

        if catalog.is_principal(object)
            && screen_distance < options.principal_radius
        {
            return Some(object);
        }

        if object.visible && best.is_none_or(|(_, d)| screen_distance < d) {
            best = Some((object, screen_distance));
        }
    }

    best.filter(|(_, d)| *d < options.max_distance)
        .map(|(object, _)| object)
}

/// Watches touches for taps and resolves them to objects.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    classifier: TapClassifier,
    options: SelectionOptions,
}

impl SelectionEngine {
    /// Create an engine with the given gesture thresholds and pick radii.
    #[must_use]
    pub fn new(gesture: GestureOptions, options: SelectionOptions) -> Self {
        Self {
            classifier: TapClassifier::new(gesture),
            options,
        }
    }

    /// The tap classifier's current state.
    #[must_use]
    pub fn classifier(&self) -> &TapClassifier {
        &self.classifier
    }

    /// Nearest-object search with this engine's radii.
    #[must_use]
    pub fn find_nearest<'a>(
        &self,
        camera: &CameraState,
        catalog: &'a SkyCatalog,
        screen_pos: Vec2,
    ) -> Option<&'a CelestialObject> {
        find_nearest(camera, catalog, screen_pos, &self.options)
    }

    /// Feed one frame. Returns the selected object on the release frame of
    /// a tap that landed near something.
    pub fn update(
        &mut self,
        camera: &CameraState,
        catalog: &SkyCatalog,
        input: &FrameInput<'_>,
    ) -> Option<ObjectId> {
        let tap = self.classifier.observe(
            input.touches,
            input.pointer_over_ui,
            input.dt,
        )?;

        match self.find_nearest(camera, catalog, tap) {
            Some(object) => {
                log::debug!(
                    "Tap at ({:.0}, {:.0}) selected {}",
                    tap.x,
                    tap.y,
                    object.name
                );
                Some(object.id)
            }
            None => {
                log::debug!("Tap at ({:.0}, {:.0}) hit nothing", tap.x, tap.y);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::input::Touch;

    const CENTER: Vec2 = Vec2::new(500.0, 400.0);

    fn camera() -> CameraState {
        CameraState::new(Quat::IDENTITY, 50.0, Vec2::new(1000.0, 800.0))
    }

    fn ahead(x: f32, y: f32) -> Vec3 {
        Vec3::new(x, y, -100.0)
    }

    #[test]
    fn principal_object_beats_closer_ordinary_one() {
        let mut catalog = SkyCatalog::new();
        let _ = catalog.add(CelestialObject::new("HD 1", ahead(0.5, 0.0)));
        let sirius = catalog.add_principal(CelestialObject::new("Sirius", ahead(7.0, 0.0)));

        let hit = find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default());
        assert_eq!(hit.map(|o| o.id), Some(sirius));
    }

    #[test]
    fn principal_outside_radius_loses() {
        let mut catalog = SkyCatalog::new();
        let near = catalog.add(CelestialObject::new("HD 1", ahead(0.5, 0.0)));
        let _ = catalog.add_principal(CelestialObject::new("Sirius", ahead(20.0, 0.0)));

        let hit = find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default());
        assert_eq!(hit.map(|o| o.id), Some(near));
    }

    #[test]
    fn nearest_visible_object_wins() {
        let mut catalog = SkyCatalog::new();
        let _ = catalog.add(CelestialObject::new("far", ahead(10.0, 0.0)));
        let close = catalog.add(CelestialObject::new("close", ahead(2.0, 1.0)));
        let _ = catalog.add(CelestialObject::new("hidden", ahead(0.1, 0.0)).hidden());

        let hit = find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default());
        assert_eq!(hit.map(|o| o.id), Some(close));
    }

    #[test]
    fn objects_behind_are_ignored() {
        let mut catalog = SkyCatalog::new();
        // Projects mirrored onto the screen center, but sits behind the camera
        let _ = catalog.add_principal(CelestialObject::new("Polaris", Vec3::new(0.0, 0.0, 100.0)));
        let _ = catalog.add(CelestialObject::new("Behind", Vec3::new(0.1, 0.0, 50.0)));

        let hit = find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default());
        assert!(hit.is_none());
    }

    #[test]
    fn beyond_max_distance_is_no_selection() {
        let mut catalog = SkyCatalog::new();
        let _ = catalog.add(CelestialObject::new("edge", ahead(45.0, 0.0)));

        let hit = find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default());
        assert!(hit.is_none());
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let catalog = SkyCatalog::new();
        assert!(find_nearest(&camera(), &catalog, CENTER, &SelectionOptions::default()).is_none());
    }

    #[test]
    fn tap_release_selects_object() {
        let mut catalog = SkyCatalog::new();
        let vega = catalog.add(CelestialObject::new("Vega", ahead(0.0, 0.0)));
        let cam = camera();
        let mut engine = SelectionEngine::new(GestureOptions::default(), SelectionOptions::default());

        let touch = [Touch::at(CENTER + Vec2::new(3.0, 0.0))];
        for _ in 0..6 {
            let input = FrameInput::new(1.0 / 60.0).with_touches(&touch);
            assert!(engine.update(&cam, &catalog, &input).is_none());
        }
        let release = FrameInput::new(1.0 / 60.0);
        assert_eq!(engine.update(&cam, &catalog, &release), Some(vega));
        assert_eq!(engine.classifier().timer(), 0.0);
    }
}
