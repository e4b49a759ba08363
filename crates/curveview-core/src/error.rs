use thiserror::Error;

use crate::validation::ValidationIssue;

#[derive(Error, Debug)]
pub enum CurveViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Degenerate transform: scale {scale:e} is below the minimum {min:e}")]
    DegenerateTransform { scale: f64, min: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(ValidationIssue),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CurveViewError>;
