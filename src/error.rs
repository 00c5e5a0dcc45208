use thiserror::Error;

pub use crate::algebra::TupleError;
pub use crate::matrix::MatrixError;
pub use crate::scene::SceneError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tuple(#[from] TupleError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
