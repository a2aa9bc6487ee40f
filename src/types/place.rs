use serde::{Deserialize, Serialize};

/// A latitude / longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point of interest or eatery, sourced from the gateway or the mock dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Average rating on a 0-5 scale
    pub rating: Option<f64>,
    /// Price tier, 0 (free) to 4 (very expensive)
    pub price_tier: Option<u8>,
    /// Category tags such as `tourist_attraction` or `restaurant`
    pub tags: Vec<String>,
    pub location: Coordinates,
    /// Photo references resolvable through the gateway's photo URL helper
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo_refs: Vec<String>,
}

impl PlaceCandidate {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Current conditions at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temperature: f64,
    pub description: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Kilometres per hour
    pub wind_speed: f64,
    /// OpenWeather-style icon code (e.g. "02d")
    pub icon: String,
}
