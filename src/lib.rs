//! Ray/sphere intersection kernel: tuple algebra, 4x4 transforms, ordered
//! intersection sets and Phong shading, plus a PPM canvas and a JSON scene
//! loader around them.

pub mod algebra;
pub mod apps;
pub mod canvas;
pub mod error;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod world;

pub use error::{Error, Result};
