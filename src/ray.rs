use crate::algebra::Tuple;
use crate::matrix::{Matrix, MatrixError};

/// `origin + t * direction`; origin is a point, direction a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Defined for every real `t`; negative values lie behind the origin.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    pub fn transform(&self, m: &Matrix) -> Result<Ray, MatrixError> {
        Ok(Ray::new(m.times_tuple(self.origin)?, m.times_tuple(self.direction)?))
    }
}
