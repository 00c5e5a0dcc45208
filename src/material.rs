use crate::algebra::{approx_eq, reflect, Tuple, BLACK, WHITE};
use crate::error::TupleError;
use crate::light::PointLight;

/// Phong surface parameters. Equality is approximate.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: Tuple,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self { color: WHITE, ambient: 0.1, diffuse: 0.9, specular: 0.9, shininess: 200.0 }
    }
}

impl PartialEq for Material {
    fn eq(&self, m: &Self) -> bool {
        self.color == m.color
            && approx_eq(self.ambient, m.ambient)
            && approx_eq(self.diffuse, m.diffuse)
            && approx_eq(self.specular, m.specular)
            && approx_eq(self.shininess, m.shininess)
    }
}

impl Material {
    /// Local illumination at `point` from a single light: ambient + diffuse + specular.
    pub fn lighting(
        &self,
        light: &PointLight,
        point: Tuple,
        eyev: Tuple,
        normalv: Tuple,
    ) -> Result<Tuple, TupleError> {
        let effective = self.color.hadamard(light.intensity);
        let lightv = light.position.minus(point)?.normalize()?;
        let ambient = effective * self.ambient;

        let light_dot_normal = lightv.dot(normalv);
        let (diffuse, specular) = if light_dot_normal < 0.0 {
            // light is on the other side of the surface
            (BLACK, BLACK)
        } else {
            let diffuse = effective * self.diffuse * light_dot_normal;
            let reflectv = reflect(lightv.negate()?, normalv);
            let reflect_dot_eye = reflectv.dot(eyev);
            let specular = if reflect_dot_eye <= 0.0 {
                BLACK
            } else {
                light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
            };
            (diffuse, specular)
        };

        ambient.plus(diffuse)?.plus(specular)
    }
}
