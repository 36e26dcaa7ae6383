use thiserror::Error;

/// A coordinate that has no geographic meaning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Coordinate is not a finite number: {0}")]
    NonFinite(f64),

    #[error("Coordinate {value} is outside the range [-{limit}, {limit}]")]
    OutOfRange { value: f64, limit: f64 },
}

/// A value that cannot be stored as an exact fraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("Cannot encode a non-finite number as a rational: {0}")]
    NonFinite(String),

    #[error("Not a plain decimal number: {0:?}")]
    Malformed(String),

    #[error("Decimal {value} has {digits} fraction digits, at most {max} are supported")]
    TooManyDigits {
        value: String,
        digits: usize,
        max: usize,
    },

    #[error("Decimal {0} does not fit in the supported integer range")]
    Overflow(String),

    #[error("EXIF rationals are unsigned, got {0}")]
    Negative(String),
}
