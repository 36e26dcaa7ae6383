use crate::GeotagError;
use crate::features::error::WriteError;
use crate::features::gps::{GeoPoint, LocationName, gps_from_numeric_exif, location_name};
use crate::features::payload::{GpsPayload, GpsTags};
use crate::features::writer::write_gps;
use bon::bon;
use exiftool::ExifTool;
use rayon::prelude::*;
use reverse_geocoder::ReverseGeocoder;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The outcome of tagging a single file.
#[derive(Debug)]
pub struct TagReport {
    pub path: PathBuf,
    pub result: Result<(), WriteError>,
}

impl TagReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A serializable summary of a [`TagReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSummary {
    pub path: PathBuf,
    pub tagged: bool,
    pub error: Option<String>,
}

impl From<&TagReport> for TagSummary {
    fn from(report: &TagReport) -> Self {
        Self {
            path: report.path.clone(),
            tagged: report.is_ok(),
            error: report.result.as_ref().err().map(ToString::to_string),
        }
    }
}

/// The outcome of reading the stored position of a single file.
#[derive(Debug)]
pub struct ReadReport {
    pub path: PathBuf,
    pub result: Result<Option<GeoPoint>, GeotagError>,
}

impl ReadReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A serializable summary of a [`ReadReport`], with the nearest place named.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub path: PathBuf,
    pub position: Option<GeoPoint>,
    pub location: Option<LocationName>,
    pub error: Option<String>,
}

/// Writes one location into the GPS block of many JPEG files.
///
/// The coordinates are encoded once per batch; files are then written in
/// parallel. Use the builder to construct an instance:
///
/// ```rust,no_run
/// # use geotag::{GeoPoint, Geotagger, GeotagError};
/// # use std::path::PathBuf;
/// # fn main() -> Result<(), GeotagError> {
/// let tagger = Geotagger::builder().altitude(35.0).build()?;
/// let eiffel_tower = GeoPoint { latitude: 48.85826, longitude: 2.29448 };
/// let reports = tagger.tag_files(eiffel_tower, &[PathBuf::from("IMG_7103.jpg")])?;
/// assert!(reports.iter().all(|r| r.is_ok()));
/// # Ok(())
/// # }
/// ```
pub struct Geotagger {
    geocoder: ReverseGeocoder,
    exiftool_path: Option<PathBuf>,
    exiftool: Option<ExifTool>,
    altitude: Option<f64>,
}

#[bon]
impl Geotagger {
    /// Constructs a `Geotagger` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific `exiftool` executable, used only by [`Geotagger::read_location`]. If `None`, `exiftool` is searched for in the system's PATH. The process is started on the first read.
    /// * `altitude: Option<f64>` - Altitude in meters written with every position. Negative values are stored as below sea level. If `None`, the altitude is one meter above sea level.
    ///
    /// # Errors
    ///
    /// Returns [`GeotagError::Coordinate`] if `altitude` is not finite.
    #[builder]
    pub fn new(exiftool_path: Option<PathBuf>, altitude: Option<f64>) -> Result<Self, GeotagError> {
        if let Some(meters) = altitude
            && !meters.is_finite()
        {
            return Err(crate::coordinates::CoordinateError::NonFinite(meters).into());
        }
        Ok(Self {
            geocoder: ReverseGeocoder::new(),
            exiftool_path,
            exiftool: None,
            altitude,
        })
    }

    /// The full tag set that [`Geotagger::tag_files`] writes for `point`.
    pub fn payload(&self, point: GeoPoint) -> Result<GpsTags, GeotagError> {
        let tags = GpsTags::new(GpsPayload::from_point(point)?);
        match self.altitude {
            Some(meters) => tags.with_altitude(meters),
            None => Ok(tags),
        }
    }

    /// The nearest named place to `point`.
    pub fn describe(&self, point: GeoPoint) -> LocationName {
        location_name(&self.geocoder, point)
    }

    /// Writes `point` into every file in `files`.
    ///
    /// # Returns
    ///
    /// One [`TagReport`] per input file, in input order. A file that cannot
    /// be written does not stop the others.
    ///
    /// # Errors
    ///
    /// Fails before touching any file if `point` cannot be encoded, for
    /// example a latitude beyond the poles.
    pub fn tag_files(&self, point: GeoPoint, files: &[PathBuf]) -> Result<Vec<TagReport>, GeotagError> {
        let tags = self.payload(point)?;
        info!(%point, files = files.len(), "tagging files");

        let reports = files
            .par_iter()
            .map(|path| {
                let result = write_gps(path, &tags);
                match &result {
                    Ok(()) => info!(path = %path.display(), "tagged"),
                    Err(e) => warn!(path = %path.display(), error = %e, "could not tag"),
                }
                TagReport {
                    path: path.clone(),
                    result,
                }
            })
            .collect();
        Ok(reports)
    }

    /// Reads the GPS position stored in `path`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GeotagError::Exiftool`] if `exiftool` cannot be started or
    /// fails to read the file.
    pub fn read_location(&mut self, path: &Path) -> Result<Option<GeoPoint>, GeotagError> {
        let exiftool = match &mut self.exiftool {
            Some(exiftool) => exiftool,
            slot => slot.insert(match &self.exiftool_path {
                Some(executable) => ExifTool::with_executable(executable)?,
                None => ExifTool::new()?,
            }),
        };
        let numeric_exif = exiftool.json(path, &["-n"])?;
        Ok(gps_from_numeric_exif(&numeric_exif))
    }

    /// Reads the stored position of every file in `files`.
    ///
    /// # Returns
    ///
    /// One [`ReadReport`] per input file, in input order. A file that cannot
    /// be read does not stop the others.
    pub fn read_locations(&mut self, files: &[PathBuf]) -> Vec<ReadReport> {
        files
            .iter()
            .map(|path| {
                let result = self.read_location(path);
                if let Err(e) = &result {
                    warn!(path = %path.display(), error = %e, "could not read position");
                }
                ReadReport {
                    path: path.clone(),
                    result,
                }
            })
            .collect()
    }

    /// Summarizes `report`, naming the place of a stored position.
    pub fn summarize(&self, report: &ReadReport) -> LocationSummary {
        let position = report.result.as_ref().ok().copied().flatten();
        LocationSummary {
            path: report.path.clone(),
            position,
            location: position.map(|point| self.describe(point)),
            error: report.result.as_ref().err().map(ToString::to_string),
        }
    }
}
