use crate::models::{Axis, Hemisphere};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid DMS format: {0}")]
    InvalidFormat(String),

    #[error("{axis} {value} is outside [{}, {}]", .axis.bounds().0, .axis.bounds().1)]
    OutOfRange { axis: Axis, value: f64 },

    #[error("Hemisphere {hemisphere} is not valid for {axis}")]
    HemisphereMismatch { axis: Axis, hemisphere: Hemisphere },

    #[error("Unknown coordinate reference system: {0}")]
    UnknownCrs(String),

    #[error("Transformation error: {0}")]
    Transformation(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl From<std::convert::Infallible> for ConversionError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
