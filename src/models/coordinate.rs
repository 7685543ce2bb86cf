use serde::{Deserialize, Serialize};

/// A position in x,y(,z) axis order: x is the longitude-like value, y the
/// latitude-like one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::with_z(x, y, z)
    }
}
