pub mod constants;
pub mod coordinates;

pub use constants::*;
pub use coordinates::{
    dd_to_dms, dms_to_dd, latdd_to_latdms, londd_to_londms, parse_coordinate, parse_latitude,
    parse_longitude,
};
