//! # Geotag
//!
//! Write a location into the EXIF GPS block of JPEG files.
//!
//! EXIF has no signed coordinates and no floating point: a position is stored
//! as degrees, minutes and seconds, each an unsigned fraction, plus a
//! hemisphere letter per axis. This crate does that conversion exactly and
//! hands the result to an EXIF container library.
//!
//! ## Key Features
//!
//! - **DMS decomposition**: Splits signed decimal degrees into degrees, minutes, seconds and an N/S/E/W letter.
//! - **Exact rationals**: Encodes each part from its decimal text, so `48.343` becomes `48343/1000` and never a binary float expansion.
//! - **Batch tagging**: Writes one position into many JPEG files in parallel, reporting per file.
//! - **Reading back**: Reads the stored position with `exiftool` and names the nearest place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geotag::{GeoPoint, Geotagger};
//! use std::path::PathBuf;
//!
//! fn main() -> color_eyre::Result<()> {
//!     color_eyre::install()?;
//!
//!     let tagger = Geotagger::builder().build()?;
//!     let point = GeoPoint { latitude: 48.85826, longitude: 2.29448 };
//!
//!     println!("Tagging with {}", tagger.describe(point));
//!     for report in tagger.tag_files(point, &[PathBuf::from("IMG_7103.jpg")])? {
//!         println!("{}: {:?}", report.path.display(), report.result);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The conversion functions can be used on their own:
//!
//! ```rust
//! use geotag::coordinates::{Axis, to_rational};
//!
//! let dms = Axis::Longitude.decompose(-2.29448).unwrap();
//! assert_eq!((dms.degrees, dms.minutes, dms.seconds), (2, 17, 40.128));
//! assert_eq!(dms.hemisphere, Some('W'));
//! assert_eq!(to_rational(dms.seconds).unwrap().to_string(), "5016/125");
//! ```

pub mod coordinates;
mod error;
pub mod features;
pub mod geotagger;
pub mod utils;

pub use error::GeotagError;
pub use features::gps::{GeoPoint, LocationName};
pub use features::payload::{GpsCoordinate, GpsPayload, GpsTags};
pub use geotagger::{Geotagger, LocationSummary, ReadReport, TagReport, TagSummary};
