use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(negative, positive)` direction letters of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HemisphereLabels {
    pub negative: char,
    pub positive: char,
}

impl HemisphereLabels {
    pub const LATITUDE: Self = Self::new('S', 'N');
    pub const LONGITUDE: Self = Self::new('W', 'E');

    pub const fn new(negative: char, positive: char) -> Self {
        Self { negative, positive }
    }

    /// Picks the label for the sign of `value`. Zero is directionless.
    pub fn for_value(&self, value: f64) -> Option<char> {
        if value < 0.0 {
            Some(self.negative)
        } else if value > 0.0 {
            Some(self.positive)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub const fn labels(self) -> HemisphereLabels {
        match self {
            Self::Latitude => HemisphereLabels::LATITUDE,
            Self::Longitude => HemisphereLabels::LONGITUDE,
        }
    }

    /// Largest magnitude in degrees that is meaningful on this axis.
    pub const fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

/// A coordinate split into non-negative sexagesimal parts.
///
/// The sign of the original value lives only in `hemisphere`; `None` marks an
/// exact zero, which has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Option<char>,
}

impl Dms {
    /// The unsigned value in decimal degrees.
    pub fn magnitude(&self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0
    }

    /// The signed value in decimal degrees, reading the sign off `labels`.
    pub fn to_decimal(&self, labels: HemisphereLabels) -> f64 {
        match self.hemisphere {
            Some(c) if c == labels.negative => -self.magnitude(),
            _ => self.magnitude(),
        }
    }

    /// The hemisphere as the string stored in a `GPS*Ref` tag.
    pub fn hemisphere_ref(&self) -> String {
        self.hemisphere.map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)?;
        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{hemisphere}")?;
        }
        Ok(())
    }
}
