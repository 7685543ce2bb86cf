pub mod engine;
pub mod proj4rs_engine;
#[cfg(feature = "proj")]
pub mod proj_engine;
pub mod transformer;

pub use engine::{CoordinateTuple, TransformEngine};
pub use proj4rs_engine::Proj4rsEngine;
#[cfg(feature = "proj")]
pub use proj_engine::ProjEngine;
pub use transformer::CoordinateTransformer;
