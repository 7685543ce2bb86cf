/// Geographic bounds in decimal degrees
pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Sexagesimal units
pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Decimal places of the seconds field in formatted DMS strings
pub const DMS_SECONDS_PRECISION: usize = 5;

/// Decimal places kept when parsing DMS into decimal degrees
pub const DD_PRECISION: i32 = 5;

/// Environment prefix for transformer settings
pub const SETTINGS_ENV_PREFIX: &str = "COORDCONV";
