use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::models::{Axis, Hemisphere};
use crate::utils::constants::{
    DD_PRECISION, DMS_SECONDS_PRECISION, MINUTES_PER_DEGREE, SECONDS_PER_DEGREE,
    SECONDS_PER_MINUTE,
};

/// `D°M'S.s"H`, with an optional space after each marker and `´` as an
/// alternate minute marker.
static DMS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([0-9]{1,3})°\s?([0-5]?[0-9])['´]\s?([0-5]?[0-9](?:\.[0-9]*)?)"\s?([NSEWO])$"#)
        .expect("DMS pattern is valid")
});

/// Convert decimal degrees to the unsigned `D°M'S.sssss"` fragment
///
/// The sign is dropped; callers attach a hemisphere letter. Seconds that
/// round up to 60 carry into the minutes (and minutes into the degrees).
/// No range check is made: any finite magnitude is formatted, and a
/// non-finite input is written in the degrees field (`inf°0'0.00000"`,
/// `NaN°0'0.00000"`).
///
/// # Examples
/// ```
/// use coord_convert::utils::dd_to_dms;
///
/// assert_eq!(dd_to_dms(-34.7393611), "34°44'21.69996\"");
/// ```
pub fn dd_to_dms(coordinate: f64) -> String {
    let abs_decimal = coordinate.abs();

    if !abs_decimal.is_finite() {
        return format!(
            "{}°0'{:.prec$}\"",
            abs_decimal,
            0.0,
            prec = DMS_SECONDS_PRECISION
        );
    }

    let mut degrees = abs_decimal.floor();
    let minutes_decimal = (abs_decimal - degrees) * MINUTES_PER_DEGREE;
    let mut minutes = minutes_decimal.floor();
    let mut seconds = (minutes_decimal - minutes) * SECONDS_PER_MINUTE;

    let scale = 10f64.powi(DMS_SECONDS_PRECISION as i32);
    if (seconds * scale).round() / scale >= SECONDS_PER_MINUTE {
        seconds = 0.0;
        minutes += 1.0;
    }
    if minutes >= MINUTES_PER_DEGREE {
        minutes = 0.0;
        degrees += 1.0;
    }

    format!(
        "{:.0}°{:.0}'{:.prec$}\"",
        degrees,
        minutes,
        seconds,
        prec = DMS_SECONDS_PRECISION
    )
}

/// Convert a `D°M'S.s"H` string to signed decimal degrees
///
/// The result is rounded to five decimal places. N and E are positive;
/// S, W and O (the Spanish/Portuguese West) are negative. The magnitude
/// must fit the hemisphere's axis (90 for N/S, 180 for E/W).
///
/// # Examples
/// ```
/// use coord_convert::utils::dms_to_dd;
///
/// let decimal = dms_to_dd("33°41'12.2\"S").unwrap();
/// assert!((decimal - -33.68672).abs() < 1e-9);
/// ```
pub fn dms_to_dd(coordinate: &str) -> Result<f64> {
    let (magnitude, hemisphere) = parse_dms(coordinate)?;
    let value = hemisphere.sign() * magnitude;

    hemisphere.axis().check(value)
}

/// Parse a DMS string whose hemisphere must belong to the latitude axis
pub fn parse_latitude(coordinate: &str) -> Result<f64> {
    parse_for_axis(coordinate, Axis::Latitude)
}

/// Parse a DMS string whose hemisphere must belong to the longitude axis
pub fn parse_longitude(coordinate: &str) -> Result<f64> {
    parse_for_axis(coordinate, Axis::Longitude)
}

fn parse_for_axis(coordinate: &str, axis: Axis) -> Result<f64> {
    let (magnitude, hemisphere) = parse_dms(coordinate)?;
    if hemisphere.axis() != axis {
        return Err(ConversionError::HemisphereMismatch { axis, hemisphere });
    }

    axis.check(hemisphere.sign() * magnitude)
}

fn parse_dms(coordinate: &str) -> Result<(f64, Hemisphere)> {
    let captures = DMS_PATTERN.captures(coordinate).ok_or_else(|| {
        debug!(input = coordinate, "rejected DMS string");
        ConversionError::InvalidFormat(format!(
            "'{}'. Expected format: 'D°M'S.s\"H'",
            coordinate
        ))
    })?;

    let field = |index: usize, name: &str| -> Result<f64> {
        captures[index].parse::<f64>().map_err(|_| {
            ConversionError::InvalidFormat(format!(
                "Invalid {} value: '{}'",
                name, &captures[index]
            ))
        })
    };
    let degrees = field(1, "degrees")?;
    let minutes = field(2, "minutes")?;
    let seconds = field(3, "seconds")?;

    let hemisphere = captures[4]
        .chars()
        .next()
        .ok_or_else(|| ConversionError::InvalidFormat("missing hemisphere".to_string()))
        .and_then(Hemisphere::from_char)?;

    let magnitude = degrees + minutes / MINUTES_PER_DEGREE + seconds / SECONDS_PER_DEGREE;

    Ok((round_to(magnitude, DD_PRECISION), hemisphere))
}

/// Format a latitude as DMS with an N/S suffix
///
/// Zero is written as `S`.
pub fn latdd_to_latdms(coordinate: f64) -> Result<String> {
    with_hemisphere(coordinate, Axis::Latitude)
}

/// Format a longitude as DMS with an E/W suffix
///
/// Zero is written as `W`.
pub fn londd_to_londms(coordinate: f64) -> Result<String> {
    with_hemisphere(coordinate, Axis::Longitude)
}

fn with_hemisphere(coordinate: f64, axis: Axis) -> Result<String> {
    let coordinate = axis.check(coordinate)?;
    let direction = axis.hemisphere_for(coordinate);

    Ok(format!("{}{}", dd_to_dms(coordinate), direction))
}

/// Parse coordinate that might be in DMS or decimal format
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    if trimmed.contains('°') {
        dms_to_dd(trimmed)
    } else {
        trimmed.parse::<f64>().map_err(|_| {
            ConversionError::InvalidFormat(format!("Invalid coordinate value: '{}'", coord_str))
        })
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
