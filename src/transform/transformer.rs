use tracing::{debug, trace};

use crate::config::TransformerSettings;
use crate::error::{ConversionError, Result};
use crate::models::{Coordinate, CrsId};
use crate::transform::engine::{CoordinateTuple, TransformEngine};
use crate::transform::proj4rs_engine::Proj4rsEngine;

/// Reprojects coordinates between one fixed pair of reference systems.
///
/// The engine is built once at construction and shared by every call;
/// nothing is mutated afterwards.
#[derive(Debug)]
pub struct CoordinateTransformer<E = Proj4rsEngine> {
    engine: E,
}

impl CoordinateTransformer<Proj4rsEngine> {
    /// Accepts anything convertible to a [`CrsId`]: EPSG codes as `u32`,
    /// `"EPSG:4326"`/`"4326"` strings, proj4 strings or a `CrsId`.
    ///
    /// ```
    /// use coord_convert::transform::CoordinateTransformer;
    ///
    /// let transformer = CoordinateTransformer::new("4326", 3857u32).unwrap();
    /// let (x, y, _) = transformer.transform_pair(0.0, 0.0).unwrap();
    /// assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    /// ```
    pub fn new<S, T>(source: S, target: T) -> Result<Self>
    where
        S: TryInto<CrsId>,
        T: TryInto<CrsId>,
        ConversionError: From<S::Error> + From<T::Error>,
    {
        let source = source.try_into()?;
        let target = target.try_into()?;

        Ok(Self::with_engine(Proj4rsEngine::new(source, target)?))
    }

    pub fn from_settings(settings: &TransformerSettings) -> Result<Self> {
        Self::new(settings.source_crs.clone(), settings.target_crs.clone())
    }
}

impl<E: TransformEngine> CoordinateTransformer<E> {
    pub fn with_engine(engine: E) -> Self {
        debug!(engine = std::any::type_name::<E>(), "coordinate transformer built");
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Transforms a batch, preserving order, length and tuple shape.
    /// Fails as a whole on the first coordinate the engine rejects.
    pub fn transform_coordinates<I, C>(&self, coordinates: I) -> Result<Vec<C>>
    where
        I: IntoIterator<Item = C>,
        C: CoordinateTuple,
    {
        let mut buffer: Vec<Coordinate> = coordinates
            .into_iter()
            .map(|c| c.to_coordinate())
            .collect();

        trace!(count = buffer.len(), "transforming batch");
        self.engine.transform_many(&mut buffer)?;

        Ok(buffer.into_iter().map(C::from_coordinate).collect())
    }

    /// Lazy variant of [`transform_coordinates`](Self::transform_coordinates):
    /// each item is transformed when the iterator is advanced.
    pub fn itransform<'a, I, C>(
        &'a self,
        coordinates: I,
    ) -> impl Iterator<Item = Result<C>> + 'a
    where
        I: IntoIterator<Item = C>,
        I::IntoIter: 'a,
        C: CoordinateTuple + 'a,
    {
        coordinates.into_iter().map(move |c| {
            self.engine
                .transform_one(c.to_coordinate())
                .map(C::from_coordinate)
        })
    }

    /// Transforms a single pair with no vertical component (z = 0).
    pub fn transform_pair(&self, x: f64, y: f64) -> Result<(f64, f64, f64)> {
        self.transform_point(x, y, 0.0)
    }

    pub fn transform_point(&self, x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
        self.engine
            .transform_one(Coordinate::with_z(x, y, z))
            .map(|c| c.as_tuple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shifts x by a constant and rejects negative y.
    struct ShiftEngine;

    impl TransformEngine for ShiftEngine {
        fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate> {
            if coordinate.y < 0.0 {
                return Err(ConversionError::Transformation(format!(
                    "y {} outside domain",
                    coordinate.y
                )));
            }
            Ok(Coordinate::with_z(coordinate.x + 100.0, coordinate.y, coordinate.z))
        }
    }

    #[test]
    fn test_batch_keeps_order_and_shape() {
        let transformer = CoordinateTransformer::with_engine(ShiftEngine);

        let pairs = transformer
            .transform_coordinates(vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)])
            .unwrap();
        assert_eq!(pairs, vec![(101.0, 2.0), (103.0, 4.0), (105.0, 6.0)]);

        let triples = transformer
            .transform_coordinates([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(triples, vec![[101.0, 2.0, 3.0], [104.0, 5.0, 6.0]]);

        let empty: Vec<(f64, f64)> = transformer.transform_coordinates(Vec::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_batch_failure_is_propagated() {
        let transformer = CoordinateTransformer::with_engine(ShiftEngine);
        let result = transformer.transform_coordinates(vec![(1.0, 2.0), (3.0, -4.0)]);
        assert!(matches!(result, Err(ConversionError::Transformation(_))));
    }

    #[test]
    fn test_lazy_transform() {
        let transformer = CoordinateTransformer::with_engine(ShiftEngine);
        let mut iter = transformer.itransform(vec![(1.0, 1.0), (2.0, -1.0), (3.0, 1.0)]);

        assert_eq!(iter.next().unwrap().unwrap(), (101.0, 1.0));
        assert!(iter.next().unwrap().is_err());
        assert_eq!(iter.next().unwrap().unwrap(), (103.0, 1.0));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_pair_defaults_z_to_zero() {
        let transformer = CoordinateTransformer::with_engine(ShiftEngine);
        assert_eq!(transformer.transform_pair(1.0, 2.0).unwrap(), (101.0, 2.0, 0.0));
        assert_eq!(
            transformer.transform_point(1.0, 2.0, 7.5).unwrap(),
            (101.0, 2.0, 7.5)
        );
    }

    #[test]
    fn test_identity_projection() {
        let transformer = CoordinateTransformer::new(4326u32, "EPSG:4326").unwrap();
        let (x, y, z) = transformer
            .transform_pair(-57.51025409413067, -35.609455111208554)
            .unwrap();

        assert!((x - -57.51025409413067).abs() < 1e-9);
        assert!((y - -35.609455111208554).abs() < 1e-9);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_construction_rejects_unknown_crs() {
        assert!(matches!(
            CoordinateTransformer::new("not a crs", 4326u32),
            Err(ConversionError::UnknownCrs(_))
        ));
        assert!(matches!(
            CoordinateTransformer::new(4326u32, 1u32),
            Err(ConversionError::UnknownCrs(_))
        ));
    }
}
