use crate::error::Result;
use crate::models::Coordinate;

/// A CRS transformation bound to one source/target pair.
///
/// Implementations always take and return x,y(,z) axis order regardless of
/// the native axis order the CRS declares.
pub trait TransformEngine {
    fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate>;

    /// Transforms in place, stopping at the first failure.
    fn transform_many(&self, coordinates: &mut [Coordinate]) -> Result<()> {
        for coordinate in coordinates.iter_mut() {
            *coordinate = self.transform_one(*coordinate)?;
        }
        Ok(())
    }
}

impl<E: TransformEngine + ?Sized> TransformEngine for &E {
    fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate> {
        (**self).transform_one(coordinate)
    }

    fn transform_many(&self, coordinates: &mut [Coordinate]) -> Result<()> {
        (**self).transform_many(coordinates)
    }
}

impl<E: TransformEngine + ?Sized> TransformEngine for Box<E> {
    fn transform_one(&self, coordinate: Coordinate) -> Result<Coordinate> {
        (**self).transform_one(coordinate)
    }

    fn transform_many(&self, coordinates: &mut [Coordinate]) -> Result<()> {
        (**self).transform_many(coordinates)
    }
}

/// Shapes accepted by batch transforms. Outputs keep the input's shape;
/// two-dimensional inputs are transformed with z = 0 and the z is dropped.
pub trait CoordinateTuple: Sized {
    fn to_coordinate(&self) -> Coordinate;

    fn from_coordinate(coordinate: Coordinate) -> Self;
}

impl CoordinateTuple for Coordinate {
    fn to_coordinate(&self) -> Coordinate {
        *self
    }

    fn from_coordinate(coordinate: Coordinate) -> Self {
        coordinate
    }
}

impl CoordinateTuple for (f64, f64) {
    fn to_coordinate(&self) -> Coordinate {
        Coordinate::new(self.0, self.1)
    }

    fn from_coordinate(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl CoordinateTuple for (f64, f64, f64) {
    fn to_coordinate(&self) -> Coordinate {
        Coordinate::with_z(self.0, self.1, self.2)
    }

    fn from_coordinate(coordinate: Coordinate) -> Self {
        coordinate.as_tuple()
    }
}

impl CoordinateTuple for [f64; 2] {
    fn to_coordinate(&self) -> Coordinate {
        Coordinate::new(self[0], self[1])
    }

    fn from_coordinate(coordinate: Coordinate) -> Self {
        [coordinate.x, coordinate.y]
    }
}

impl CoordinateTuple for [f64; 3] {
    fn to_coordinate(&self) -> Coordinate {
        Coordinate::with_z(self[0], self[1], self[2])
    }

    fn from_coordinate(coordinate: Coordinate) -> Self {
        [coordinate.x, coordinate.y, coordinate.z]
    }
}
