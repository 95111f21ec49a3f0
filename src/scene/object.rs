use glam::Vec3;

/// Stable handle for an object in a [`SkyCatalog`](super::SkyCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// A selectable body in the sky: a star, planet, or other named object.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    /// Handle assigned by the catalog on insertion.
    pub id: ObjectId,
    /// Display name, also used for principal-set membership.
    pub name: String,
    /// World-space position.
    pub position: Vec3,
    /// Visual radius; sets the standoff distance when focused.
    pub scale: f32,
    /// Apparent magnitude (lower is brighter).
    pub magnitude: f32,
    /// Whether the object's own render is currently enabled.
    pub visible: bool,
}

impl CelestialObject {
    /// A visible unit-scale object of magnitude 0 at `position`.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: ObjectId(0),
            name: name.into(),
            position,
            scale: 1.0,
            magnitude: 0.0,
            visible: true,
        }
    }

    /// Set the visual scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the apparent magnitude.
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Start with the object's render disabled.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
