//! src/algebra.rs
//! --------------
//! Homogeneous 4-tuples: points (w = 1), vectors (w = 0) and colors (w = 0).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::Deserialize;
use thiserror::Error;

/// Tolerance used by every approximate comparison in the crate.
pub const EPSILON: f64 = 1e-4;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error("cannot add two points")]
    PointPlusPoint,
    #[error("cannot subtract a point from a vector")]
    VectorMinusPoint,
    #[error("cannot negate a point")]
    NegatedPoint,
    #[error("cross product is only defined for vectors")]
    CrossOfNonVectors,
    #[error("cannot normalize a zero-length tuple")]
    ZeroLength,
}

/// Generic (x, y, z, w) value.
///
/// The `std::ops` impls are plain componentwise arithmetic and accept any `w`.
/// The named operations (`plus`, `minus`, `negate`, `cross`, `normalize`)
/// enforce the point/vector rules. Equality is approximate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

pub const fn color(r: f64, g: f64, b: f64) -> Tuple {
    Tuple::new(r, g, b, 0.0)
}

pub const BLACK: Tuple = color(0.0, 0.0, 0.0);
pub const WHITE: Tuple = color(1.0, 1.0, 1.0);

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn is_point(self) -> bool {
        self.w.round() == 1.0
    }

    pub fn is_vector(self) -> bool {
        self.w.round() == 0.0
    }

    pub fn plus(self, t: Self) -> Result<Self, TupleError> {
        if self.is_point() && t.is_point() {
            return Err(TupleError::PointPlusPoint);
        }
        Ok(self + t)
    }

    pub fn minus(self, t: Self) -> Result<Self, TupleError> {
        if self.is_vector() && t.is_point() {
            return Err(TupleError::VectorMinusPoint);
        }
        Ok(self - t)
    }

    pub fn negate(self) -> Result<Self, TupleError> {
        if self.is_point() {
            return Err(TupleError::NegatedPoint);
        }
        Ok(-self)
    }

    pub fn times(self, f: f64) -> Self {
        self * f
    }

    pub fn div(self, f: f64) -> Self {
        self / f
    }

    pub fn dot(self, t: Self) -> f64 {
        self.x * t.x + self.y * t.y + self.z * t.z + self.w * t.w
    }

    pub fn cross(self, t: Self) -> Result<Self, TupleError> {
        if !(self.is_vector() && t.is_vector()) {
            return Err(TupleError::CrossOfNonVectors);
        }
        Ok(vector(
            self.y * t.z - self.z * t.y,
            self.z * t.x - self.x * t.z,
            self.x * t.y - self.y * t.x,
        ))
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Result<Self, TupleError> {
        let m = self.magnitude();
        if !m.is_normal() {
            return Err(TupleError::ZeroLength);
        }
        Ok(self / m)
    }

    // ── color view ─────────────────────────────────────────────────────────

    pub fn red(self) -> f64 {
        self.x
    }

    pub fn green(self) -> f64 {
        self.y
    }

    pub fn blue(self) -> f64 {
        self.z
    }

    /// Componentwise product of two colors.
    pub fn hadamard(self, c: Self) -> Self {
        color(self.x * c.x, self.y * c.y, self.z * c.z)
    }

    /// Scale each channel from [0, 1] to [0, 255], clamping out-of-range values.
    pub fn to_rgb(self) -> [u8; 3] {
        let channel = |v: f64| (v * 255.0).clamp(0.0, 255.0).round() as u8;
        [channel(self.x), channel(self.y), channel(self.z)]
    }
}

/// Reflect `v` about the normal `n`.
pub fn reflect(v: Tuple, n: Tuple) -> Tuple {
    v - n * (2.0 * v.dot(n))
}

impl PartialEq for Tuple {
    fn eq(&self, t: &Self) -> bool {
        approx_eq(self.x, t.x)
            && approx_eq(self.y, t.y)
            && approx_eq(self.z, t.z)
            && approx_eq(self.w, t.w)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5}, {:.5}, {:.5})", self.x, self.y, self.z, self.w)
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, t: Self) -> Self {
        Self::new(self.x + t.x, self.y + t.y, self.z + t.z, self.w + t.w)
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, t: Self) -> Self {
        Self::new(self.x - t.x, self.y - t.y, self.z - t.z, self.w - t.w)
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, f: f64) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f, self.w * f)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;
    fn div(self, f: f64) -> Self {
        Self::new(self.x / f, self.y / f, self.z / f, self.w / f)
    }
}

/* Serde helpers so scene JSON arrays turn into tuples */
pub fn point_from_array<'de, D>(d: D) -> Result<Tuple, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let [x, y, z] = <[f64; 3]>::deserialize(d)?;
    Ok(point(x, y, z))
}

pub fn color_from_array<'de, D>(d: D) -> Result<Tuple, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let [r, g, b] = <[f64; 3]>::deserialize(d)?;
    Ok(color(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w_distinguishes_points_from_vectors() {
        let a = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert!(a.is_point());
        assert!(!a.is_vector());
        let b = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(b.is_vector());
        assert!(!b.is_point());
        assert_ne!(point(4.0, -4.0, 3.0), vector(4.0, -4.0, 3.0));
    }

    #[test]
    fn equality_is_approximate() {
        assert_eq!(point(1.0, 2.0, 3.0), point(1.00001, 2.0, 3.0));
        assert_ne!(point(1.0, 2.0, 3.0), point(1.001, 2.0, 3.0));
    }

    #[test]
    fn point_plus_vector_is_a_commutative_point() {
        let p = point(3.0, -2.0, 5.0);
        let v = vector(-2.0, 3.0, 1.0);
        assert_eq!(p.plus(v), Ok(point(1.0, 1.0, 6.0)));
        assert_eq!(v.plus(p), p.plus(v));
    }

    #[test]
    fn adding_two_points_fails() {
        assert_eq!(
            point(1.0, 2.0, 3.0).plus(point(1.0, 1.0, 1.0)),
            Err(TupleError::PointPlusPoint)
        );
    }

    #[test]
    fn subtraction_rules() {
        let p1 = point(3.0, 2.0, 1.0);
        let p2 = point(5.0, 6.0, 7.0);
        let v = vector(5.0, 6.0, 7.0);
        assert_eq!(p1.minus(p2), Ok(vector(-2.0, -4.0, -6.0)));
        assert_eq!(p1.minus(v), Ok(point(-2.0, -4.0, -6.0)));
        assert_eq!(vector(3.0, 2.0, 1.0).minus(v), Ok(vector(-2.0, -4.0, -6.0)));
        assert_eq!(v.minus(p1), Err(TupleError::VectorMinusPoint));
        assert_eq!(
            vector(0.0, 0.0, 0.0).minus(vector(1.0, -2.0, 3.0)),
            vector(1.0, -2.0, 3.0).negate()
        );
    }

    #[test]
    fn negating_a_point_fails() {
        assert_eq!(point(1.0, 2.0, 3.0).negate(), Err(TupleError::NegatedPoint));
        assert_eq!(Tuple::new(1.0, -2.0, 3.0, -4.0).negate(), Ok(Tuple::new(-1.0, 2.0, -3.0, 4.0)));
    }

    #[test]
    fn scalar_multiplication_and_division() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a.times(3.5), Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(a.times(0.5), Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a.div(2.0), Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_eq!(vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
        assert_eq!(vector(4.0, 0.0, 0.0).normalize(), Ok(vector(1.0, 0.0, 0.0)));
        let n = vector(1.0, 2.0, 3.0).normalize().unwrap();
        assert_eq!(n, vector(0.26726, 0.53452, 0.80178));
        assert!(approx_eq(n.magnitude(), 1.0));
        assert_eq!(vector(0.0, 0.0, 0.0).normalize(), Err(TupleError::ZeroLength));
    }

    #[test]
    fn dot_and_cross() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(a.cross(b), Ok(vector(-1.0, 2.0, -1.0)));
        assert_eq!(b.cross(a), Ok(vector(1.0, -2.0, 1.0)));
        assert_eq!(a.cross(point(1.0, 0.0, 0.0)), Err(TupleError::CrossOfNonVectors));
    }

    #[test]
    fn colors() {
        let c = color(-0.5, 0.4, 1.7);
        assert_eq!((c.red(), c.green(), c.blue()), (-0.5, 0.4, 1.7));
        assert_eq!(color(0.9, 0.6, 0.75).plus(color(0.7, 0.1, 0.25)), Ok(color(1.6, 0.7, 1.0)));
        assert_eq!(color(0.9, 0.6, 0.75).minus(color(0.7, 0.1, 0.25)), Ok(color(0.2, 0.5, 0.5)));
        assert_eq!(color(0.2, 0.3, 0.4).times(2.0), color(0.4, 0.6, 0.8));
        assert_eq!(color(1.0, 0.2, 0.4).hadamard(color(0.9, 1.0, 0.1)), color(0.9, 0.2, 0.04));
    }

    #[test]
    fn rgb_projection_clamps_and_rounds() {
        assert_eq!(color(1.0, 0.5, 0.0).to_rgb(), [255, 128, 0]);
        assert_eq!(color(1.5, -0.5, 0.2).to_rgb(), [255, 0, 51]);
    }

    #[test]
    fn reflecting_vectors() {
        assert_eq!(reflect(vector(1.0, -1.0, 0.0), vector(0.0, 1.0, 0.0)), vector(1.0, 1.0, 0.0));
        let h = 2f64.sqrt() / 2.0;
        assert_eq!(reflect(vector(0.0, -1.0, 0.0), vector(h, h, 0.0)), vector(1.0, 0.0, 0.0));
    }
}
