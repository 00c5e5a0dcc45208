use crate::algebra::{Tuple, WHITE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Tuple,
}

impl PointLight {
    /// White light at `position`.
    pub fn new(position: Tuple) -> Self {
        Self { position, intensity: WHITE }
    }

    pub fn with_intensity(mut self, intensity: Tuple) -> Self {
        self.intensity = intensity;
        self
    }
}
