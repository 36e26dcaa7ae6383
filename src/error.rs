use thiserror::Error;

/// The primary error type for the geotag crate.
#[derive(Error, Debug)]
pub enum GeotagError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not list files: {0}")]
    Walk(#[from] walkdir::Error),

    // --- Custom Module Errors ---
    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] crate::coordinates::CoordinateError),

    #[error("Rational encoding failed: {0}")]
    Rational(#[from] crate::coordinates::RationalError),

    #[error("GPS write failed: {0}")]
    Write(#[from] crate::features::error::WriteError),

    // --- Specific Logic Errors ---
    #[error("No location set, pick a latitude and longitude first")]
    NoLocation,
}
