use crate::coordinates::error::RationalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Most fraction digits accepted when parsing a decimal.
///
/// Seconds carry five; anything longer than this is a binary float artifact
/// such as `0.30000000000000004` rather than a real decimal value.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// An exact fraction, always in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawRational")]
pub struct Rational {
    numerator: i64,
    denominator: u64,
}

/// Wire form of [`Rational`], checked and reduced on the way in.
#[derive(Deserialize)]
struct RawRational {
    numerator: i64,
    denominator: u64,
}

impl TryFrom<RawRational> for Rational {
    type Error = RationalError;

    fn try_from(raw: RawRational) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator).ok_or_else(|| {
            RationalError::Malformed(format!("{}/{}", raw.numerator, raw.denominator))
        })
    }
}

impl Rational {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Builds a reduced fraction. Returns `None` for a zero denominator.
    pub fn new(numerator: i64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let divisor = gcd(u128::from(numerator.unsigned_abs()), u128::from(denominator));
        // Dividing by a common factor cannot grow either side.
        Some(Self {
            numerator: (i128::from(numerator) / divisor as i128) as i64,
            denominator: (u128::from(denominator) / divisor) as u64,
        })
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Narrows to the unsigned 32-bit pair EXIF stores.
    ///
    /// # Errors
    ///
    /// [`RationalError::Negative`] for negative values and
    /// [`RationalError::Overflow`] when either side exceeds `u32::MAX`.
    pub fn to_exif(&self) -> Result<(u32, u32), RationalError> {
        if self.numerator < 0 {
            return Err(RationalError::Negative(self.to_string()));
        }
        match (
            u32::try_from(self.numerator),
            u32::try_from(self.denominator),
        ) {
            (Ok(numerator), Ok(denominator)) => Ok((numerator, denominator)),
            _ => Err(RationalError::Overflow(self.to_string())),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u32> for Rational {
    fn from(value: u32) -> Self {
        Self {
            numerator: i64::from(value),
            denominator: 1,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses a plain decimal such as `-48.343`, `7`, `5.` or `.25` exactly.
///
/// Exponent notation is not accepted.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || RationalError::Malformed(s.to_string());

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(malformed());
        }
        if !int_digits.bytes().chain(frac_digits.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if frac_digits.len() > MAX_FRACTION_DIGITS {
            return Err(RationalError::TooManyDigits {
                value: text.to_string(),
                digits: frac_digits.len(),
                max: MAX_FRACTION_DIGITS,
            });
        }

        let overflow = || RationalError::Overflow(text.to_string());
        let int_digits = int_digits.trim_start_matches('0');
        // u128 holds 38 decimal digits.
        if int_digits.len() + frac_digits.len() > 38 {
            return Err(overflow());
        }
        let digits = format!("{int_digits}{frac_digits}");
        let numerator: u128 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| overflow())?
        };
        let denominator = 10u128.pow(frac_digits.len() as u32);

        let divisor = gcd(numerator, denominator);
        let (numerator, denominator) = (numerator / divisor, denominator / divisor);

        let numerator = i64::try_from(numerator).map_err(|_| overflow())?;
        let denominator = u64::try_from(denominator).map_err(|_| overflow())?;
        Ok(Self {
            numerator: if negative { -numerator } else { numerator },
            denominator,
        })
    }
}

/// Encodes `number` as an exact fraction of its shortest decimal form.
///
/// The float is printed with the shortest digits that read back to the same
/// value, then parsed as a decimal. `48.343` therefore becomes `48343/1000`
/// and not the binary expansion of the nearest double.
///
/// # Errors
///
/// * [`RationalError::NonFinite`] for NaN or infinite input.
/// * [`RationalError::TooManyDigits`] when the shortest form needs more than
///   [`MAX_FRACTION_DIGITS`] fraction digits.
/// * [`RationalError::Overflow`] when the magnitude does not fit an `i64`
///   numerator.
///
/// # Example
///
/// ```rust
/// use geotag::coordinates::to_rational;
///
/// let seconds = to_rational(29.736).unwrap();
/// assert_eq!((seconds.numerator(), seconds.denominator()), (3717, 125));
/// ```
pub fn to_rational(number: f64) -> Result<Rational, RationalError> {
    if !number.is_finite() {
        return Err(RationalError::NonFinite(number.to_string()));
    }
    number.to_string().parse()
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
