//! Transformation engine backed by the PROJ C library.

use proj::Proj;
use std::fmt;
use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::models::{Coordinate, CrsId};
use crate::transform::engine::TransformEngine;

/// `Proj::new_known_crs` normalizes the pipeline for visualization, so
/// input and output are always x,y (longitude first) in degrees or metres.
/// The vertical component is passed through unchanged.
pub struct ProjEngine {
    source: CrsId,
    target: CrsId,
    proj: Proj,
}

impl ProjEngine {
    pub fn new(source: CrsId, target: CrsId) -> Result<Self> {
        let proj = Proj::new_known_crs(&source.to_string(), &target.to_string(), None)
            .map_err(|e| {
                ConversionError::UnknownCrs(format!("{} -> {}: {}", source, target, e))
            })?;

        debug!(source = %source, target = %target, "proj engine ready");

        Ok(Self {
            source,
            target,
            proj,
        })
    }

    pub fn source(&self) -> &CrsId {
        &self.source
    }

    pub fn target(&self) -> &CrsId {
        &self.target
    }
}

impl TransformEngine for ProjEngine {
    fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate> {
        let (x, y) = self
            .proj
            .convert((coordinate.x, coordinate.y))
            .map_err(|e| {
                ConversionError::Transformation(format!(
                    "({}, {}) from {} to {}: {}",
                    coordinate.x, coordinate.y, self.source, self.target, e
                ))
            })?;

        Ok(Coordinate::with_z(x, y, coordinate.z))
    }
}

impl fmt::Debug for ProjEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjEngine")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_to_web_mercator() {
        let engine = ProjEngine::new(CrsId::wgs84(), CrsId::web_mercator()).unwrap();
        let out = engine.transform_one(Coordinate::new(0.0, 0.0)).unwrap();
        assert!(out.x.abs() < 1e-6 && out.y.abs() < 1e-6);
    }

    #[test]
    fn authority_identifiers_are_forwarded() {
        for id in ["OGC:CRS84", "ESRI:102100", "urn:ogc:def:crs:EPSG::4326"] {
            let source: CrsId = id.parse().unwrap();
            assert!(matches!(source, CrsId::Definition(_)));
            assert!(ProjEngine::new(source, CrsId::web_mercator()).is_ok(), "{}", id);
        }

        let unknown = CrsId::Definition("NOPE:0".to_string());
        assert!(matches!(
            ProjEngine::new(unknown, CrsId::wgs84()),
            Err(ConversionError::UnknownCrs(_))
        ));
    }

    #[test]
    fn geographic_axis_order_is_xy() {
        // EPSG:4326 declares lat,lon; the engine must still read lon,lat
        let engine = ProjEngine::new(CrsId::wgs84(), CrsId::web_mercator()).unwrap();
        let out = engine.transform_one(Coordinate::new(10.0, 0.0)).unwrap();
        assert!((out.x - 1_113_194.907_932_7).abs() < 1e-3);
    }
}
