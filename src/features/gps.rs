use reverse_geocoder::ReverseGeocoder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A location in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationName {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub admin1: String,
    pub admin2: String,
    pub country_code: String,
    pub country_name: Option<String>,
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let country = self.country_name.as_deref().unwrap_or(&self.country_code);
        write!(f, "{}, {}, {}", self.name, self.admin1, country)
    }
}

/// Reads the position from `exiftool -n` output, where `GPSLatitude` and
/// `GPSLongitude` are already signed decimal degrees.
pub fn gps_from_numeric_exif(numeric_exif: &Value) -> Option<GeoPoint> {
    let (Some(latitude), Some(longitude)) = (
        numeric_exif.get("GPSLatitude").and_then(Value::as_f64),
        numeric_exif.get("GPSLongitude").and_then(Value::as_f64),
    ) else {
        return None;
    };
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

/// Finds the nearest named place to `point`.
pub fn location_name(geocoder: &ReverseGeocoder, point: GeoPoint) -> LocationName {
    let search_result = geocoder.search((point.latitude, point.longitude));
    let record = search_result.record;
    let country_name = rust_iso3166::from_alpha2(&record.cc);
    LocationName {
        latitude: record.lat,
        longitude: record.lon,
        name: record.name.clone(),
        admin1: record.admin1.clone(),
        admin2: record.admin2.clone(),
        country_code: record.cc.clone(),
        country_name: country_name.map(|a| a.name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_signed_position() {
        let numeric_exif = json!({
            "GPSLatitude": 40.7128,
            "GPSLongitude": -74.0060,
            "GPSAltitude": 10.5
        });

        let point = gps_from_numeric_exif(&numeric_exif).unwrap();
        assert_eq!(point.latitude, 40.7128);
        assert_eq!(point.longitude, -74.0060);
    }

    #[test]
    fn test_returns_none_if_latitude_is_missing() {
        let numeric_exif = json!({
            "GPSLongitude": 4.899_431,
        });
        assert!(
            gps_from_numeric_exif(&numeric_exif).is_none(),
            "Should return None when GPSLatitude is missing"
        );
    }

    #[test]
    fn test_returns_none_for_non_numeric_values() {
        // Without -n exiftool prints DMS strings, which are not accepted here.
        let numeric_exif = json!({
            "GPSLatitude": "48 deg 51' 29.74\" N",
            "GPSLongitude": "2 deg 17' 40.13\" E",
        });
        assert!(gps_from_numeric_exif(&numeric_exif).is_none());
    }

    #[test]
    fn test_returns_none_for_empty_exif_data() {
        assert!(gps_from_numeric_exif(&json!({})).is_none());
    }

    #[test]
    fn test_location_name_for_amsterdam() {
        let geocoder = ReverseGeocoder::new();
        let location = location_name(
            &geocoder,
            GeoPoint {
                latitude: 52.379_189,
                longitude: 4.899_431,
            },
        );
        assert_eq!(location.name, "Amsterdam");
        assert_eq!(location.admin1, "North Holland");
        assert_eq!(location.country_code, "NL");
        assert_eq!(location.country_name, Some("Netherlands".to_string()));
        assert_eq!(location.to_string(), "Amsterdam, North Holland, Netherlands");
    }

    #[test]
    fn test_point_display_uses_five_decimals() {
        let point = GeoPoint {
            latitude: 48.85826,
            longitude: -2.29448,
        };
        assert_eq!(point.to_string(), "48.85826, -2.29448");
    }
}
