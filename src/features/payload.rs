use crate::coordinates::{
    Axis, CoordinateError, Dms, Rational, RationalError, to_rational,
};
use crate::error::GeotagError;
use crate::features::gps::GeoPoint;
use serde::{Deserialize, Serialize};

/// `GPSVersionID` written with every tag set.
pub const GPS_VERSION_ID: [u8; 4] = [2, 0, 0, 0];

/// `GPSAltitudeRef` value for heights above sea level.
pub const ABOVE_SEA_LEVEL: u8 = 0;

/// `GPSAltitudeRef` value for heights below sea level.
pub const BELOW_SEA_LEVEL: u8 = 1;

/// One axis ready for a `GPSLatitude`/`GPSLongitude` tag and its `Ref` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsCoordinate {
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
    pub reference: Option<char>,
}

impl GpsCoordinate {
    pub fn from_dms(dms: &Dms) -> Result<Self, RationalError> {
        Ok(Self {
            degrees: to_rational(f64::from(dms.degrees))?,
            minutes: to_rational(f64::from(dms.minutes))?,
            seconds: to_rational(dms.seconds)?,
            reference: dms.hemisphere,
        })
    }

    pub fn from_decimal(value: f64, axis: Axis) -> Result<Self, GeotagError> {
        let dms = axis.decompose(value)?;
        Ok(Self::from_dms(&dms)?)
    }

    /// The reference letter as stored, empty for a directionless zero.
    pub fn reference_str(&self) -> String {
        self.reference.map(String::from).unwrap_or_default()
    }

    /// The three parts narrowed to EXIF's unsigned pairs.
    pub fn to_exif(&self) -> Result<[(u32, u32); 3], RationalError> {
        Ok([
            self.degrees.to_exif()?,
            self.minutes.to_exif()?,
            self.seconds.to_exif()?,
        ])
    }
}

/// Both axes of one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsPayload {
    pub latitude: GpsCoordinate,
    pub longitude: GpsCoordinate,
}

impl GpsPayload {
    /// Encodes longitude, then latitude. The first failing axis is reported.
    pub fn from_point(point: GeoPoint) -> Result<Self, GeotagError> {
        let longitude = GpsCoordinate::from_decimal(point.longitude, Axis::Longitude)?;
        let latitude = GpsCoordinate::from_decimal(point.latitude, Axis::Latitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The complete GPS tag set written into a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsTags {
    pub version_id: [u8; 4],
    pub altitude_ref: u8,
    pub altitude: Rational,
    pub position: GpsPayload,
}

impl GpsTags {
    /// Tags for `position` at the default altitude of one meter above sea level.
    pub fn new(position: GpsPayload) -> Self {
        Self {
            version_id: GPS_VERSION_ID,
            altitude_ref: ABOVE_SEA_LEVEL,
            altitude: Rational::from(1),
            position,
        }
    }

    /// Replaces the altitude. Negative meters are stored as a positive
    /// height below sea level.
    pub fn with_altitude(mut self, meters: f64) -> Result<Self, GeotagError> {
        if !meters.is_finite() {
            return Err(CoordinateError::NonFinite(meters).into());
        }
        self.altitude_ref = if meters < 0.0 {
            BELOW_SEA_LEVEL
        } else {
            ABOVE_SEA_LEVEL
        };
        self.altitude = to_rational(meters.abs())?;
        Ok(self)
    }
}
