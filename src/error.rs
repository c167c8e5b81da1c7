use thiserror::Error;

/// Failures at the loading and output edges. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Failed to load OBJ model: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
