//! The selectable object set.
//!
//! Objects are created by the host's scene population step and are
//! read-only to the controller apart from their visibility flag, which mode
//! transitions may switch on for the focused object.

mod object;

pub use object::{CelestialObject, ObjectId};
use rustc_hash::FxHashSet;

/// All selectable objects plus the names of the principal subset.
///
/// Principal objects get a wider, prioritized hit radius during selection
/// and supply labels at wide fields of view.
#[derive(Debug, Clone, Default)]
pub struct SkyCatalog {
    objects: Vec<CelestialObject>,
    principal_names: FxHashSet<String>,
}

impl SkyCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its assigned handle.
    pub fn add(&mut self, mut object: CelestialObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        object.id = id;
        self.objects.push(object);
        id
    }

    /// Add an object and mark it principal.
    pub fn add_principal(&mut self, object: CelestialObject) -> ObjectId {
        self.mark_principal(object.name.clone());
        self.add(object)
    }

    /// Mark every object named `name` as principal.
    pub fn mark_principal(&mut self, name: impl Into<String>) {
        let _ = self.principal_names.insert(name.into());
    }

    /// Whether `object` belongs to the principal subset.
    #[must_use]
    pub fn is_principal(&self, object: &CelestialObject) -> bool {
        self.principal_names.contains(&object.name)
    }

    /// Look up an object by handle.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&CelestialObject> {
        self.objects.get(id.0 as usize)
    }

    /// Find the first object with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Enable or disable an object's render. Returns `false` for an unknown
    /// handle.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        match self.objects.get_mut(id.0 as usize) {
            Some(object) => {
                object.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Iterate over every object in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter()
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalog holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn add_assigns_sequential_ids() {
        let mut catalog = SkyCatalog::new();
        let a = catalog.add(CelestialObject::new("Vega", Vec3::X));
        let b = catalog.add(CelestialObject::new("Deneb", Vec3::Y));
        assert_eq!(a, ObjectId(0));
        assert_eq!(b, ObjectId(1));
        assert_eq!(catalog.get(b).unwrap().name, "Deneb");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn principal_membership_is_by_name() {
        let mut catalog = SkyCatalog::new();
        let sirius = catalog.add_principal(CelestialObject::new("Sirius", Vec3::Z));
        let other = catalog.add(CelestialObject::new("HD 1234", Vec3::Z));
        assert!(catalog.is_principal(catalog.get(sirius).unwrap()));
        assert!(!catalog.is_principal(catalog.get(other).unwrap()));

        catalog.mark_principal("HD 1234");
        assert!(catalog.is_principal(catalog.get(other).unwrap()));
    }

    #[test]
    fn set_visible_toggles_flag() {
        let mut catalog = SkyCatalog::new();
        let id = catalog.add(CelestialObject::new("Mars", Vec3::X).hidden());
        assert!(!catalog.get(id).unwrap().visible);
        assert!(catalog.set_visible(id, true));
        assert!(catalog.get(id).unwrap().visible);
        assert!(!catalog.set_visible(ObjectId(9), true));
    }

    #[test]
    fn find_by_name() {
        let mut catalog = SkyCatalog::new();
        let _ = catalog.add(CelestialObject::new("Altair", Vec3::X));
        assert!(catalog.find_by_name("Altair").is_some());
        assert!(catalog.find_by_name("Rigel").is_none());
    }
}
