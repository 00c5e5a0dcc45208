use log::debug;

use crate::{
    algebra::{color, point, Tuple, BLACK},
    error::Result,
    intersection::Intersections,
    light::PointLight,
    material::Material,
    matrix::Matrix,
    ray::Ray,
    sphere::Sphere,
};

/// Spheres plus at most one light.
#[derive(Clone, Debug)]
pub struct World {
    pub objects: Vec<Sphere>,
    pub light: Option<PointLight>,
}

impl World {
    pub fn new(objects: Vec<Sphere>, light: Option<PointLight>) -> Self {
        Self { objects, light }
    }

    /// Every object's intersections, merged into one collection.
    pub fn intersect<'a>(&'a self, ray: &Ray) -> Result<Intersections<'a>> {
        self.objects
            .iter()
            .try_fold(Intersections::new(), |acc, obj| -> Result<Intersections<'a>> {
                Ok(acc.merge(obj.intersect(ray)?))
            })
    }

    /// Shade whatever the ray hits first; black for a miss or an unlit world.
    pub fn color_at(&self, ray: &Ray) -> Result<Tuple> {
        let xs = self.intersect(ray)?;
        let (Some(hit), Some(light)) = (xs.hit(), self.light.as_ref()) else {
            return Ok(BLACK);
        };

        let point = ray.position(hit.t);
        let eyev = ray.direction.negate()?;
        let mut normalv = hit.object.normal_at(point)?;
        if normalv.dot(eyev) < 0.0 {
            debug!("eye inside '{}' at t={:.4}, flipping normal", hit.object.name, hit.t);
            normalv = normalv.negate()?;
        }
        Ok(hit.object.material.lighting(light, point, eyev, normalv)?)
    }
}

impl Default for World {
    /// The reference scene: a unit sphere and a half-size sphere inside it,
    /// lit from (-10, 10, -10).
    fn default() -> Self {
        let mut outer = Sphere::new().with_material(Material {
            color: color(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        });
        outer.name = String::from("outer");
        let mut inner = Sphere::new()
            .with_known_inverse(Matrix::scaling(0.5, 0.5, 0.5), Matrix::scaling(2.0, 2.0, 2.0));
        inner.name = String::from("inner");
        let light = PointLight::new(point(-10.0, 10.0, -10.0));
        Self::new(vec![outer, inner], Some(light))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::vector;

    #[test]
    fn an_empty_world() {
        let w = World::new(Vec::new(), None);
        assert!(w.objects.is_empty());
        assert!(w.light.is_none());
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        assert!(w.intersect(&r).unwrap().is_empty());
        assert_eq!(w.color_at(&r).unwrap(), BLACK);
    }

    #[test]
    fn default_world_is_the_reference_scene() {
        let w = World::default();
        assert_eq!(w.light, Some(PointLight::new(point(-10.0, 10.0, -10.0))));
        assert_eq!(w.objects.len(), 2);
        assert_eq!(w.objects[0].material.color, color(0.8, 1.0, 0.6));
        assert_eq!(w.objects[0].material.diffuse, 0.7);
        assert_eq!(w.objects[0].material.specular, 0.2);
        assert_eq!(w.objects[1].transform(), &Matrix::scaling(0.5, 0.5, 0.5));
    }

    #[test]
    fn unlit_world_is_black() {
        let mut w = World::default();
        w.light = None;
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        assert_eq!(w.color_at(&r).unwrap(), BLACK);
    }
}
