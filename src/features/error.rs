use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Unsupported file type for GPS tagging: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Could not read metadata of {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Could not write GPS metadata to {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("GPS value cannot be stored as an EXIF rational")]
    Rational(#[from] crate::coordinates::RationalError),
}
