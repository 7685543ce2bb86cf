use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConversionError, Result};
use crate::utils::constants::{MAX_LATITUDE, MAX_LONGITUDE};

/// Angular axis of a geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive `(min, max)` domain in decimal degrees.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-MAX_LATITUDE, MAX_LATITUDE),
            Axis::Longitude => (-MAX_LONGITUDE, MAX_LONGITUDE),
        }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    pub fn check(&self, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ConversionError::OutOfRange { axis: *self, value })
        }
    }

    /// Hemisphere letter for a signed value. Zero falls on the negative side.
    pub fn hemisphere_for(&self, value: f64) -> Hemisphere {
        match (self, value > 0.0) {
            (Axis::Latitude, true) => Hemisphere::North,
            (Axis::Latitude, false) => Hemisphere::South,
            (Axis::Longitude, true) => Hemisphere::East,
            (Axis::Longitude, false) => Hemisphere::West,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// `O` (Oeste) is accepted as a West alias.
    pub fn from_char(letter: char) -> Result<Self> {
        match letter {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            'E' => Ok(Hemisphere::East),
            'W' | 'O' => Ok(Hemisphere::West),
            _ => Err(ConversionError::InvalidFormat(format!(
                "unknown hemisphere letter '{}'",
                letter
            ))),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
