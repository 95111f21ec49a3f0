use std::fmt;

/// Which rotation producer drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationMode {
    /// Device attitude sensor.
    #[default]
    Gyro,
    /// Single-finger drag.
    Manual,
    /// Orbit around the focus target.
    Focused,
}

impl RotationMode {
    /// Whether this is one of the free-looking sky modes.
    #[must_use]
    pub fn is_sky(self) -> bool {
        matches!(self, Self::Gyro | Self::Manual)
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gyro => "gyro",
            Self::Manual => "manual",
            Self::Focused => "focused",
        };
        f.write_str(name)
    }
}
