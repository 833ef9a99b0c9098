extern crate image as image_rs;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PyramidError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("computation error: {0}")]
    ComputationError(String),
    #[error("octave index {index} is out of range for a pyramid with {octave_count} octaves")]
    OutOfRange { index: usize, octave_count: usize },
    #[error("level {level} is out of range for an octave with {level_count} levels")]
    LevelOutOfRange { level: usize, level_count: usize },
    #[error("could not parse runtime parameters: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image_rs::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PyramidError>;
