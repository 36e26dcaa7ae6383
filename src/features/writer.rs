//! Writes GPS tags into JPEG files through `little_exif`.
//!
//! Only the GPS tags are touched; every other tag already in the file is kept.

use crate::features::error::WriteError;
use crate::features::payload::{GpsCoordinate, GpsTags};
use crate::utils::is_jpeg;
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::Path;
use tracing::{debug, warn};

/// Writes `tags` into the JPEG at `path`, replacing any earlier GPS position.
///
/// # Errors
///
/// * [`WriteError::UnsupportedFormat`] for anything but `.jpg`/`.jpeg`.
/// * [`WriteError::Read`] when the file cannot be opened.
/// * [`WriteError::Write`] when the container library rejects the update.
/// * [`WriteError::Rational`] when a value does not fit an unsigned 32-bit
///   rational.
pub fn write_gps<P: AsRef<Path>>(path: P, tags: &GpsTags) -> Result<(), WriteError> {
    let path = path.as_ref();
    if !is_jpeg(path) {
        return Err(WriteError::UnsupportedFormat(path.to_path_buf()));
    }
    std::fs::metadata(path).map_err(|e| WriteError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let exif_tags = exif_tags(tags)?;

    let mut metadata = match Metadata::new_from_path(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(path = %path.display(), error = ?e, "no readable EXIF block, starting a new one");
            Metadata::new()
        }
    };
    for tag in exif_tags {
        metadata.set_tag(tag);
    }

    metadata
        .write_to_file(path)
        .map_err(|e| WriteError::Write {
            path: path.to_path_buf(),
            reason: format!("{e:?}"),
        })?;
    debug!(path = %path.display(), "wrote GPS tags");
    Ok(())
}

/// Translates the tag set into `little_exif` tags, in GPS IFD order.
fn exif_tags(tags: &GpsTags) -> Result<Vec<ExifTag>, WriteError> {
    let latitude = &tags.position.latitude;
    let longitude = &tags.position.longitude;
    Ok(vec![
        ExifTag::GPSVersionID(tags.version_id.to_vec()),
        ExifTag::GPSLatitudeRef(latitude.reference_str()),
        ExifTag::GPSLatitude(to_ur64(latitude)?),
        ExifTag::GPSLongitudeRef(longitude.reference_str()),
        ExifTag::GPSLongitude(to_ur64(longitude)?),
        ExifTag::GPSAltitudeRef(vec![tags.altitude_ref]),
        ExifTag::GPSAltitude(vec![rational_to_ur64(tags.altitude.to_exif()?)]),
    ])
}

fn to_ur64(coordinate: &GpsCoordinate) -> Result<Vec<uR64>, WriteError> {
    Ok(coordinate
        .to_exif()?
        .into_iter()
        .map(rational_to_ur64)
        .collect())
}

fn rational_to_ur64((nominator, denominator): (u32, u32)) -> uR64 {
    uR64 {
        nominator,
        denominator,
    }
}
