//! src/sphere.rs
//! -------------
//! Unit sphere at the object-space origin, placed in the world by its transform.

use crate::{
    algebra::{point, Tuple},
    error::Result,
    intersection::{Intersection, Intersections},
    material::Material,
    matrix::{Matrix, MatrixError},
    ray::Ray,
};

#[derive(Clone, Debug)]
pub struct Sphere {
    pub name: String,
    pub material: Material,
    transform: Matrix,
    inverse: Matrix,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            name: String::from("sphere"),
            material: Material::default(),
            transform: Matrix::identity(),
            inverse: Matrix::identity(),
        }
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, m: Matrix) -> Result<Self, MatrixError> {
        self.set_transform(m)?;
        Ok(self)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Object space -> world space. The inverse is computed here once, so a
    /// singular or non-4x4 matrix is rejected and the sphere keeps its old one.
    pub fn set_transform(&mut self, m: Matrix) -> Result<(), MatrixError> {
        if !m.is_transform() {
            return Err(MatrixError::NotATransform { rows: m.rows(), columns: m.columns() });
        }
        self.inverse = m.inverse()?;
        self.transform = m;
        Ok(())
    }

    /// Pair a transform with an inverse the caller already knows. The pair is
    /// checked against the identity in debug builds.
    pub(crate) fn with_known_inverse(mut self, transform: Matrix, inverse: Matrix) -> Self {
        debug_assert!(
            transform.times(&inverse).is_ok_and(|m| m == Matrix::identity()),
            "inverse does not undo the transform"
        );
        self.transform = transform;
        self.inverse = inverse;
        self
    }

    /// Both roots of the ray/unit-sphere quadratic, smaller first. Roots behind
    /// the ray are kept; only `Intersections::hit` filters them.
    pub fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>> {
        let r = ray.transform(&self.inverse)?;

        // Analytic quadratic
        let sphere_to_ray = r.origin.minus(point(0.0, 0.0, 0.0))?;
        let a = r.direction.dot(r.direction);
        // a zero-length direction has no parametric solution
        if !a.is_normal() {
            return Ok(Intersections::new());
        }
        let b = 2.0 * r.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return Ok(Intersections::new());
        }

        let sqrt = disc.sqrt();
        let t1 = (-b - sqrt) / (2.0 * a);
        let t2 = (-b + sqrt) / (2.0 * a);
        Ok([Intersection::new(t1, self), Intersection::new(t2, self)].into_iter().collect())
    }

    /// World-space surface normal at `world_point`, via the transpose of the
    /// inverse transform.
    pub fn normal_at(&self, world_point: Tuple) -> Result<Tuple> {
        let object_point = self.inverse.times_tuple(world_point)?;
        let object_normal = object_point.minus(point(0.0, 0.0, 0.0))?;
        let mut world_normal = self.inverse.transpose().times_tuple(object_normal)?;
        // the transposed translation column leaks into w
        world_normal.w = 0.0;
        Ok(world_normal.normalize()?)
    }
}
