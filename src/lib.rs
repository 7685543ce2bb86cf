pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod transform;
pub mod utils;

pub use config::TransformerSettings;
pub use error::{ConversionError, Result};
pub use transform::{CoordinateTransformer, TransformEngine};
pub use utils::coordinates::{dd_to_dms, dms_to_dd, latdd_to_latdms, londd_to_londms};
