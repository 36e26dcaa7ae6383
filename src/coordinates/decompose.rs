use crate::coordinates::error::CoordinateError;
use crate::coordinates::structs::{Axis, Dms, HemisphereLabels};
use tracing::debug;

/// Decimal places kept on the seconds field.
pub const SECONDS_DECIMALS: i32 = 5;

/// No axis goes beyond half a turn.
const MAX_MAGNITUDE: f64 = 180.0;

/// Splits signed decimal degrees into degrees, minutes, seconds and a
/// hemisphere letter taken from `labels`.
///
/// Seconds are rounded half away from zero to [`SECONDS_DECIMALS`] places.
/// Exactly zero gets no hemisphere letter.
///
/// # Errors
///
/// * [`CoordinateError::NonFinite`] for NaN or infinite input.
/// * [`CoordinateError::OutOfRange`] when the magnitude exceeds 180 degrees.
///   Use [`Axis::decompose`] for the tighter latitude bound.
///
/// # Example
///
/// ```rust
/// use geotag::coordinates::{decompose, HemisphereLabels};
///
/// let dms = decompose(48.85826, HemisphereLabels::LATITUDE).unwrap();
/// assert_eq!((dms.degrees, dms.minutes, dms.seconds), (48, 51, 29.736));
/// assert_eq!(dms.hemisphere, Some('N'));
/// ```
pub fn decompose(value: f64, labels: HemisphereLabels) -> Result<Dms, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite(value));
    }
    let magnitude = value.abs();
    if magnitude > MAX_MAGNITUDE {
        return Err(CoordinateError::OutOfRange {
            value,
            limit: MAX_MAGNITUDE,
        });
    }

    let hemisphere = labels.for_value(value);

    let degrees = magnitude.floor();
    let minutes_raw = (magnitude - degrees) * 60.0;
    let minutes = minutes_raw.floor();
    let seconds = round_to_decimals((minutes_raw - minutes) * 60.0, SECONDS_DECIMALS);

    // Float error can land a field exactly on 60; carry it upwards.
    let (mut degrees, mut minutes, mut seconds) = (degrees as u32, minutes as u32, seconds);
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }

    let dms = Dms {
        degrees,
        minutes,
        seconds,
        hemisphere,
    };
    debug!(value, %dms, "decomposed coordinate");
    Ok(dms)
}

impl Axis {
    /// [`decompose`] with this axis' labels and range check.
    ///
    /// # Errors
    ///
    /// [`CoordinateError::OutOfRange`] when `value` lies outside
    /// `[-limit, limit]` for the axis, otherwise as [`decompose`].
    pub fn decompose(self, value: f64) -> Result<Dms, CoordinateError> {
        if value.is_finite() && value.abs() > self.limit() {
            return Err(CoordinateError::OutOfRange {
                value,
                limit: self.limit(),
            });
        }
        decompose(value, self.labels())
    }
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
