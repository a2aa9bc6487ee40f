use super::{weather::ForecastResponse, PlacesGateway};
use crate::{
    config::GatewayConfig,
    error::{PlannerError, Result},
    types::{Coordinates, PlaceCandidate, RouteStep, RouteSummary, WeatherSnapshot},
};
use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::OnceLock;
use tracing::debug;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const NEARBY_PATH: &str = "/maps/api/place/nearbysearch/json";
const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
const DETAILS_PATH: &str = "/maps/api/place/details/json";
const PHOTO_PATH: &str = "/maps/api/place/photo";
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";
const FORECAST_PATH: &str = "/v1/forecast";

const ATTRACTION_TYPE: &str = "tourist_attraction";
const RESTAURANT_TYPE: &str = "restaurant";

const DETAILS_FIELDS: &str = "place_id,name,rating,formatted_address,price_level,photos,types,geometry";

/// Google Maps Platform gateway (Geocoding + Places) with Open-Meteo weather.
#[derive(Clone, Debug)]
pub struct GoogleMapsGateway {
    config: GatewayConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawPlace>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    place_id: String,
    name: String,
    #[serde(default)]
    formatted_address: Option<String>,
    /// Nearby search returns a short address here instead of `formatted_address`
    #[serde(default)]
    vicinity: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
    geometry: Geometry,
    #[serde(default)]
    photos: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    result: Option<RawPlace>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    html_instructions: String,
    distance: TextValue,
    duration: TextValue,
}

/// Google's `{ "text": "5 km", "value": 5012 }` pairs; only the text is shown.
#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

impl From<RawLeg> for RouteSummary {
    fn from(leg: RawLeg) -> Self {
        Self {
            distance: leg.distance.text,
            duration: leg.duration.text,
            steps: leg
                .steps
                .into_iter()
                .map(|step| RouteStep {
                    instruction: strip_markup(&step.html_instructions),
                    distance: step.distance.text,
                    duration: step.duration.text,
                })
                .collect(),
        }
    }
}

/// Plain text from a Directions `html_instructions` string.
///
/// Tags become spaces so `<div>` blocks do not run into the preceding word,
/// then whitespace is collapsed.
pub fn strip_markup(html: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

    tag_re
        .replace_all(html, " ")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<RawPlace> for PlaceCandidate {
    fn from(raw: RawPlace) -> Self {
        Self {
            id: raw.place_id,
            name: raw.name,
            address: raw
                .formatted_address
                .or(raw.vicinity)
                .unwrap_or_default(),
            rating: raw.rating,
            price_tier: raw.price_level,
            tags: raw.types,
            location: raw.geometry.location,
            photo_refs: raw.photos.into_iter().map(|p| p.photo_reference).collect(),
        }
    }
}

/// Map a Google `status` field onto the error taxonomy.
fn check_status(status: &str, error_message: Option<&str>) -> Result<()> {
    let detail = || error_message.unwrap_or(status).to_string();
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Err(PlannerError::Quota(detail())),
        _ => Err(PlannerError::Gateway(format!("{}: {}", status, detail()))),
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl GoogleMapsGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PlannerError::Config("API key must not be empty".to_string()));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| PlannerError::Config(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &'static str,
    ) -> Result<T> {
        debug!(target: "trip_guru::gateway", %url, what, "sending request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    PlannerError::Timeout(format!("{what} request timed out"))
                } else {
                    PlannerError::Http(err)
                }
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PlannerError::Gateway(format!(
                "HTTP {} from {} endpoint",
                status, what
            )));
        }

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::Gateway(format!(
                "unexpected {} response at {}: {}",
                what,
                location,
                err.into_inner()
            ))
        })
    }

    fn keyed<'a>(&self, mut query: Vec<(&'a str, String)>) -> Vec<(&'a str, String)> {
        query.push(("key", self.config.api_key.clone()));
        query
    }

    /// Places of one type within `radius_m` metres of a point
    pub async fn nearby_search(
        &self,
        location: Coordinates,
        radius_m: u32,
        place_type: &str,
    ) -> Result<Vec<PlaceCandidate>> {
        let url = join_url(&self.config.places_base_url, NEARBY_PATH);
        let query = self.keyed(vec![
            ("location", format!("{},{}", location.lat, location.lng)),
            ("radius", radius_m.to_string()),
            ("type", place_type.to_string()),
        ]);
        let response: PlacesResponse = self.get_json(&url, &query, "nearby search").await?;
        check_status(&response.status, response.error_message.as_deref())?;
        Ok(response.results.into_iter().map(PlaceCandidate::from).collect())
    }

    /// Free-text place search, optionally biased towards a location
    pub async fn text_search(
        &self,
        text: &str,
        near: Option<Coordinates>,
    ) -> Result<Vec<PlaceCandidate>> {
        let url = join_url(&self.config.places_base_url, TEXT_SEARCH_PATH);
        let mut params = vec![("query", text.to_string())];
        if let Some(location) = near {
            params.push(("location", format!("{},{}", location.lat, location.lng)));
            params.push(("radius", self.config.text_search_radius_m.to_string()));
        }
        let query = self.keyed(params);
        let response: PlacesResponse = self.get_json(&url, &query, "text search").await?;
        check_status(&response.status, response.error_message.as_deref())?;
        Ok(response.results.into_iter().map(PlaceCandidate::from).collect())
    }

    /// Full record for one place id
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceCandidate> {
        let url = join_url(&self.config.places_base_url, DETAILS_PATH);
        let query = self.keyed(vec![
            ("place_id", place_id.to_string()),
            ("fields", DETAILS_FIELDS.to_string()),
        ]);
        let response: DetailsResponse = self.get_json(&url, &query, "place details").await?;
        check_status(&response.status, response.error_message.as_deref())?;
        response
            .result
            .map(PlaceCandidate::from)
            .ok_or_else(|| PlannerError::NotFound(format!("no place with id {place_id}")))
    }

    /// Displayable image URL for a photo reference
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<String> {
        let url = Url::parse_with_params(
            &join_url(&self.config.places_base_url, PHOTO_PATH),
            &[
                ("maxwidth", max_width.to_string()),
                ("photo_reference", photo_reference.to_string()),
                ("key", self.config.api_key.clone()),
            ],
        )
        .map_err(|err| PlannerError::Config(format!("Invalid places base URL: {err}")))?;
        Ok(url.into())
    }
}

#[async_trait]
impl PlacesGateway for GoogleMapsGateway {
    async fn geocode(&self, name: &str) -> Result<Option<Coordinates>> {
        let url = join_url(&self.config.places_base_url, GEOCODE_PATH);
        let query = self.keyed(vec![("address", name.to_string())]);
        let response: GeocodeResponse = self.get_json(&url, &query, "geocode").await?;
        check_status(&response.status, response.error_message.as_deref())?;
        Ok(response
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location))
    }

    async fn nearby_attractions(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        self.nearby_search(location, self.config.attraction_radius_m, ATTRACTION_TYPE)
            .await
    }

    async fn nearby_restaurants(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        self.nearby_search(location, self.config.restaurant_radius_m, RESTAURANT_TYPE)
            .await
    }

    async fn current_weather(&self, name: &str) -> Result<Option<WeatherSnapshot>> {
        let Some(location) = self.geocode(name).await? else {
            return Ok(None);
        };
        let url = join_url(&self.config.weather_base_url, FORECAST_PATH);
        let query = vec![
            ("latitude", location.lat.to_string()),
            ("longitude", location.lng.to_string()),
            (
                "current",
                "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code".to_string(),
            ),
            ("wind_speed_unit", "kmh".to_string()),
        ];
        let response: ForecastResponse = self.get_json(&url, &query, "weather").await?;
        Ok(Some(response.current.into()))
    }

    async fn route(&self, origin: &str, destination: &str) -> Result<Option<RouteSummary>> {
        let url = join_url(&self.config.places_base_url, DIRECTIONS_PATH);
        let query = self.keyed(vec![
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
        ]);
        let response: DirectionsResponse = self.get_json(&url, &query, "directions").await?;
        check_status(&response.status, response.error_message.as_deref())?;
        Ok(response
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .map(RouteSummary::from))
    }
}
