use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::utils::coordinates::{
    latdd_to_latdms, londd_to_londms, parse_latitude, parse_longitude,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point from an x,y pair (longitude first).
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(y, x)
    }

    /// Parses a latitude/longitude pair of DMS strings.
    pub fn from_dms(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self::new(parse_latitude(latitude)?, parse_longitude(longitude)?))
    }

    /// Returns `(latitude, longitude)` in DMS form.
    pub fn to_dms(&self) -> Result<(String, String)> {
        self.validate()?;
        Ok((
            latdd_to_latdms(self.latitude)?,
            londd_to_londms(self.longitude)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    #[test]
    fn test_point_validation() {
        let point = GeoPoint::new(-34.7393611, 112.12);
        assert!(point.validate().is_ok());

        let (lat, lon) = point.to_dms().unwrap();
        assert_eq!(lat, "34°44'21.69996\"S");
        assert_eq!(lon, "112°7'12.00000\"E");
    }

    #[test]
    fn test_invalid_point() {
        let point = GeoPoint::new(91.0, -0.1278);
        assert!(point.validate().is_err());
        assert!(matches!(
            point.to_dms(),
            Err(ConversionError::Validation(_))
        ));
    }

    #[test]
    fn test_from_dms() {
        let point = GeoPoint::from_dms("33°41'12.2\"S", "68° 01' 38.44\" O").unwrap();
        assert!((point.latitude - -33.68672).abs() < 1e-9);
        assert!((point.longitude - -68.02734).abs() < 1e-9);

        // Swapped axes are rejected
        assert!(GeoPoint::from_dms("68°01'38.44\"W", "33°41'12.2\"S").is_err());
    }

    #[test]
    fn test_from_xy_order() {
        let point = GeoPoint::from_xy(-57.6, -35.5);
        assert_eq!(point.longitude, -57.6);
        assert_eq!(point.latitude, -35.5);
    }
}
