use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    algebra::{color, color_from_array, point, point_from_array, Tuple, WHITE},
    error::Result,
    light::PointLight,
    material::Material,
    matrix::Matrix,
    sphere::Sphere,
    world::World,
};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("cannot read scene file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("object '{object}' uses undefined material '{material}'")]
    UnknownMaterial { object: String, material: String },
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RenderJson {
    pub width: usize,
    pub height: usize,
}

impl Default for RenderJson {
    fn default() -> Self {
        Self { width: 100, height: 100 }
    }
}

/// Rays start at `origin` and pass through a square wall of side `wall_size`
/// centered on the z axis at `wall_z`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewJson {
    #[serde(deserialize_with = "point_from_array")]
    pub origin: Tuple,
    pub wall_z: f64,
    pub wall_size: f64,
}

impl Default for ViewJson {
    fn default() -> Self {
        Self { origin: point(0.0, 0.0, -5.0), wall_z: 10.0, wall_size: 7.0 }
    }
}

#[derive(Deserialize)]
struct MaterialJson {
    rgb: [f64; 3],
    // missing fields fall back to `Material::default()`
    #[serde(default)]
    ambient: Option<f64>,
    #[serde(default)]
    diffuse: Option<f64>,
    #[serde(default)]
    specular: Option<f64>,
    #[serde(default)]
    shininess: Option<f64>,
}

impl From<MaterialJson> for Material {
    fn from(m: MaterialJson) -> Self {
        let d = Material::default();
        let [r, g, b] = m.rgb;
        Material {
            color: color(r, g, b),
            ambient: m.ambient.unwrap_or(d.ambient),
            diffuse: m.diffuse.unwrap_or(d.diffuse),
            specular: m.specular.unwrap_or(d.specular),
            shininess: m.shininess.unwrap_or(d.shininess),
        }
    }
}

/// One step of a transform chain, applied in listed order.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum TransformJson {
    Translate([f64; 3]),
    Scale([f64; 3]),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    Shear([f64; 6]),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectJson {
    Sphere { sphere: SphereDesc },
}

#[derive(Deserialize)]
struct SphereDesc {
    name: String,
    #[serde(default)]
    mat: Option<String>,
    #[serde(default)]
    transform: Vec<TransformJson>,
}

fn white() -> Tuple {
    WHITE
}

#[derive(Deserialize)]
struct LightJson {
    #[serde(deserialize_with = "point_from_array")]
    pos: Tuple,
    #[serde(default = "white", deserialize_with = "color_from_array")]
    intensity: Tuple,
}

#[derive(Deserialize)]
struct SceneFile {
    #[serde(default)]
    render: RenderJson,
    #[serde(default)]
    view: ViewJson,
    #[serde(default)]
    materials: HashMap<String, MaterialJson>,
    objects: Vec<ObjectJson>,
    #[serde(default)]
    light: Option<LightJson>,
}

/// Public "loaded" scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub render: RenderJson,
    pub view: ViewJson,
    pub world: World,
}

impl Scene {
    /// The default world seen through the default view.
    pub fn builtin() -> Self {
        Self { render: RenderJson::default(), view: ViewJson::default(), world: World::default() }
    }
}

fn compose(steps: &[TransformJson]) -> Result<Matrix> {
    steps.iter().try_fold(Matrix::identity(), |m, step| -> Result<Matrix> {
        let next = match *step {
            TransformJson::Translate([x, y, z]) => m.translate(x, y, z),
            TransformJson::Scale([x, y, z]) => m.scale(x, y, z),
            TransformJson::RotateX(r) => m.rotate_x(r),
            TransformJson::RotateY(r) => m.rotate_y(r),
            TransformJson::RotateZ(r) => m.rotate_z(r),
            TransformJson::Shear([xy, xz, yx, yz, zx, zy]) => m.shear(xy, xz, yx, yz, zx, zy),
        };
        Ok(next?)
    })
}

pub fn parse(json: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(json).map_err(SceneError::from)?;

    // 1. Create a library of materials from the JSON
    let materials: HashMap<String, Material> =
        file.materials.into_iter().map(|(name, m)| (name, m.into())).collect();

    // 2. Create objects and assign materials from the library by name
    let mut objects = Vec::with_capacity(file.objects.len());
    for o in file.objects {
        match o {
            ObjectJson::Sphere { sphere } => {
                let material = match &sphere.mat {
                    None => Material::default(),
                    Some(name) => *materials.get(name).ok_or_else(|| SceneError::UnknownMaterial {
                        object: sphere.name.clone(),
                        material: name.clone(),
                    })?,
                };
                let transform = compose(&sphere.transform)?;
                let mut s = Sphere::new().with_material(material).with_transform(transform)?;
                debug!(
                    "sphere '{}' with {} transform step(s)",
                    sphere.name,
                    sphere.transform.len()
                );
                s.name = sphere.name;
                objects.push(s);
            }
        }
    }

    let light = file.light.map(|l| PointLight::new(l.pos).with_intensity(l.intensity));
    if light.is_none() {
        warn!("scene has no light; every pixel will be black");
    }

    Ok(Scene { render: file.render, view: file.view, world: World::new(objects, light) })
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|source| SceneError::Read { path: path.to_path_buf(), source })?;
    parse(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_steps_apply_in_order() {
        let steps =
            [TransformJson::Scale([2.0, 2.0, 2.0]), TransformJson::Translate([1.0, 0.0, 0.0])];
        let m = compose(&steps).unwrap();
        assert_eq!(m.times_tuple(point(1.0, 0.0, 0.0)).unwrap(), point(3.0, 0.0, 0.0));
        assert_eq!(compose(&[]).unwrap(), Matrix::identity());
    }

    #[test]
    fn material_fields_default() {
        let json = r#"{ "rgb": [1, 0.2, 1], "diffuse": 0.5 }"#;
        let m: MaterialJson = serde_json::from_str(json).unwrap();
        let m = Material::from(m);
        assert_eq!(m.color, color(1.0, 0.2, 1.0));
        assert_eq!(m.diffuse, 0.5);
        assert_eq!(m.ambient, Material::default().ambient);
    }

    #[test]
    fn shear_step_parses() {
        let json = r#"{ "shear": [1, 0, 0, 0, 0, 0] }"#;
        let step: TransformJson = serde_json::from_str(json).unwrap();
        let m = compose(&[step]).unwrap();
        assert_eq!(m, Matrix::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    }
}
