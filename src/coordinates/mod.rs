//! Conversion between signed decimal degrees and the EXIF GPS encoding.
//!
//! A coordinate is first split into degrees, minutes and seconds with a
//! hemisphere letter ([`decompose`]), then each part becomes an exact fraction
//! ([`to_rational`]).
mod decompose;
pub mod error;
mod rational;
pub mod structs;

pub use decompose::{SECONDS_DECIMALS, decompose};
pub use error::{CoordinateError, RationalError};
pub use rational::{MAX_FRACTION_DIGITS, Rational, to_rational};
pub use structs::{Axis, Dms, HemisphereLabels};
