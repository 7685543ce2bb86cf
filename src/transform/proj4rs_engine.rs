//! Pure Rust transformation engine backed by `proj4rs`.

use proj4rs::proj::Proj;
use std::fmt;
use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::models::{Coordinate, CrsId};
use crate::transform::engine::TransformEngine;

/// `proj4rs` works in radians for geographic systems and in x,y order for
/// all systems; this engine takes and returns degrees.
pub struct Proj4rsEngine {
    source: CrsId,
    target: CrsId,
    from: Proj,
    to: Proj,
}

impl Proj4rsEngine {
    pub fn new(source: CrsId, target: CrsId) -> Result<Self> {
        let from = resolve(&source)?;
        let to = resolve(&target)?;

        debug!(
            source = %source,
            target = %target,
            source_geographic = from.is_latlong(),
            target_geographic = to.is_latlong(),
            "proj4rs engine ready"
        );

        Ok(Self {
            source,
            target,
            from,
            to,
        })
    }

    pub fn source(&self) -> &CrsId {
        &self.source
    }

    pub fn target(&self) -> &CrsId {
        &self.target
    }
}

fn resolve(crs: &CrsId) -> Result<Proj> {
    let proj = match crs {
        CrsId::Epsg(code) => {
            let code = u16::try_from(*code).map_err(|_| {
                ConversionError::UnknownCrs(format!("EPSG code {} is out of range", code))
            })?;
            Proj::from_epsg_code(code)
        }
        CrsId::Proj4(definition) => Proj::from_proj_string(definition),
        CrsId::Wkt(_) | CrsId::Definition(_) => {
            return Err(ConversionError::UnknownCrs(format!(
                "{}: only EPSG codes and proj4 strings are supported without the `proj` engine",
                crs
            )))
        }
    };

    proj.map_err(|e| ConversionError::UnknownCrs(format!("{}: {}", crs, e)))
}

impl TransformEngine for Proj4rsEngine {
    fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate> {
        let mut point = coordinate.as_tuple();
        if self.from.is_latlong() {
            point.0 = point.0.to_radians();
            point.1 = point.1.to_radians();
        }

        proj4rs::transform::transform(&self.from, &self.to, &mut point).map_err(|e| {
            ConversionError::Transformation(format!(
                "({}, {}) from {} to {}: {}",
                coordinate.x, coordinate.y, self.source, self.target, e
            ))
        })?;

        if self.to.is_latlong() {
            point.0 = point.0.to_degrees();
            point.1 = point.1.to_degrees();
        }

        Ok(Coordinate::from(point))
    }
}

impl fmt::Debug for Proj4rsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proj4rsEngine")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let engine = Proj4rsEngine::new(CrsId::wgs84(), CrsId::wgs84()).unwrap();
        let out = engine
            .transform_one(Coordinate::new(-57.60365758800924, -35.4968257854251))
            .unwrap();

        assert!((out.x - -57.60365758800924).abs() < 1e-9);
        assert!((out.y - -35.4968257854251).abs() < 1e-9);
    }

    #[test]
    fn test_web_mercator_keeps_xy_order() {
        let engine = Proj4rsEngine::new(CrsId::wgs84(), CrsId::web_mercator()).unwrap();

        let origin = engine.transform_one(Coordinate::new(0.0, 0.0)).unwrap();
        assert!(origin.x.abs() < 1e-6 && origin.y.abs() < 1e-6);

        // 10 degrees of longitude on the WGS84 semi-major axis
        let east = engine.transform_one(Coordinate::new(10.0, 0.0)).unwrap();
        assert!((east.x - 1_113_194.907_932_7).abs() < 1e-3);
        assert!(east.y.abs() < 1e-6);
    }

    #[test]
    fn test_out_of_domain_point_fails() {
        let engine = Proj4rsEngine::new(CrsId::wgs84(), CrsId::web_mercator()).unwrap();
        assert!(matches!(
            engine.transform_one(Coordinate::new(0.0, 100.0)),
            Err(ConversionError::Transformation(_))
        ));
    }

    #[test]
    fn test_unresolvable_crs() {
        assert!(matches!(
            Proj4rsEngine::new(CrsId::Epsg(1), CrsId::wgs84()),
            Err(ConversionError::UnknownCrs(_))
        ));
        assert!(matches!(
            Proj4rsEngine::new(CrsId::wgs84(), CrsId::Epsg(70_000)),
            Err(ConversionError::UnknownCrs(_))
        ));
        assert!(matches!(
            Proj4rsEngine::new(CrsId::Wkt("GEOGCRS[]".to_string()), CrsId::wgs84()),
            Err(ConversionError::UnknownCrs(_))
        ));
        assert!(matches!(
            Proj4rsEngine::new(CrsId::wgs84(), "ESRI:102100".parse().unwrap()),
            Err(ConversionError::UnknownCrs(_))
        ));
    }
}
