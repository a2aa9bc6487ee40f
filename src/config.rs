use crate::error::{PlannerError, Result};
use std::time::Duration;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

/// Connection settings for the mapping and weather services.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub api_key: String,
    pub places_base_url: String,
    pub weather_base_url: String,
    pub timeout: Duration,
    /// Search radius for attractions, in metres
    pub attraction_radius_m: u32,
    /// Search radius for restaurants, in metres
    pub restaurant_radius_m: u32,
    /// Bias radius for text search around a location, in metres
    pub text_search_radius_m: u32,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            attraction_radius_m: 10_000,
            restaurant_radius_m: 5_000,
            text_search_radius_m: 50_000,
        }
    }

    /// Build from `GOOGLE_MAPS_API_KEY`, with optional `PLACES_BASE_URL` and
    /// `WEATHER_BASE_URL` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_MAPS_API_KEY").map_err(|_| {
            PlannerError::Config(
                "GOOGLE_MAPS_API_KEY environment variable must be set for live place lookups"
                    .to_string(),
            )
        })?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("PLACES_BASE_URL") {
            config.places_base_url = url;
        }
        if let Ok(url) = std::env::var("WEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        Ok(config)
    }

    pub fn with_places_base_url(mut self, url: impl Into<String>) -> Self {
        self.places_base_url = url.into();
        self
    }

    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_radii(mut self, attractions_m: u32, restaurants_m: u32) -> Self {
        self.attraction_radius_m = attractions_m;
        self.restaurant_radius_m = restaurants_m;
        self
    }
}

/// What to do when some of the concurrent fetches fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Any failure discards every live result and the mock dataset is used.
    #[default]
    AllOrNothing,
    /// Each failed source is replaced by its mock counterpart on its own.
    PerSource,
}

/// Planner tuning knobs.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub max_attractions: usize,
    pub max_restaurants: usize,
    pub fallback: FallbackPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_attractions: 6,
            max_restaurants: 4,
            fallback: FallbackPolicy::AllOrNothing,
        }
    }
}

impl PlannerConfig {
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_limits(mut self, max_attractions: usize, max_restaurants: usize) -> Self {
        self.max_attractions = max_attractions;
        self.max_restaurants = max_restaurants;
        self
    }
}
