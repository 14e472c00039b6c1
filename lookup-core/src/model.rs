use serde::{Deserialize, Serialize};

/// A stored weather record as returned by the backend.
///
/// The record is opaque, fully-formed collaborator data: every field is taken
/// verbatim from the response body, and nothing on this side computes or
/// rewrites one. The identifier it was stored under is not part of the record;
/// callers supply it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temperature: f64,
    pub feelslike: f64,
    pub weather_descriptions: Vec<String>,
    /// The first entry, when present, is the display icon URL.
    pub weather_icons: Vec<String>,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_dir: String,
    pub pressure: f64,
    pub uv_index: f64,
    pub astro: Astro,
    /// Missing in some upstream payloads.
    #[serde(default)]
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// US EPA air-quality index code, "1" through "6".
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Option<String>,
}

#[cfg(test)]
pub(crate) fn sample_record_json() -> &'static str {
    r#"{
        "location": {"name": "Paris", "country": "FR", "localtime": "2025-06-23 10:00"},
        "current": {
            "temperature": 22,
            "feelslike": 21,
            "weather_descriptions": ["Sunny"],
            "weather_icons": ["icon.png"],
            "humidity": 40,
            "wind_speed": 10,
            "wind_dir": "N",
            "pressure": 1012,
            "uv_index": 5,
            "astro": {"sunrise": "06:00", "sunset": "21:00"},
            "air_quality": {"us-epa-index": "2"}
        }
    }"#
}

#[cfg(test)]
pub(crate) fn sample_record() -> WeatherRecord {
    serde_json::from_str(sample_record_json()).expect("sample record must parse")
}
