pub mod coordinate;
pub mod crs;
pub mod hemisphere;
pub mod point;

pub use coordinate::Coordinate;
pub use crs::CrsId;
pub use hemisphere::{Axis, Hemisphere};
pub use point::GeoPoint;
