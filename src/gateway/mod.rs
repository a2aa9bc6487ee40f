//! Access to the external mapping and weather services.
//!
//! Gateways only report what the service said. Deciding to fall back to mock
//! data is the planner's job.

pub mod google;
pub mod mock;
pub mod weather;

use crate::{
    error::{PlannerError, Result},
    types::{Coordinates, PlaceCandidate, RouteSummary, WeatherSnapshot},
};
use async_trait::async_trait;

pub use google::GoogleMapsGateway;

/// Place and weather lookups used by the planner.
#[async_trait]
pub trait PlacesGateway: Send + Sync + std::fmt::Debug {
    /// Coordinates for a place name, `None` when the service knows no such place
    async fn geocode(&self, name: &str) -> Result<Option<Coordinates>>;

    /// Tourist attractions around a point
    async fn nearby_attractions(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>>;

    /// Restaurants around a point
    async fn nearby_restaurants(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>>;

    /// Current conditions for a place name, `None` when it cannot be located
    async fn current_weather(&self, name: &str) -> Result<Option<WeatherSnapshot>>;

    /// Directions between two place names, `None` when no route exists
    async fn route(&self, origin: &str, destination: &str) -> Result<Option<RouteSummary>>;
}

/// Gateway used when no API key is configured. Every call fails, which sends
/// the planner straight to the mock dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGateway;

impl OfflineGateway {
    fn unavailable<T>() -> Result<T> {
        Err(PlannerError::Config(
            "offline mode: no mapping service configured".to_string(),
        ))
    }
}

#[async_trait]
impl PlacesGateway for OfflineGateway {
    async fn geocode(&self, _name: &str) -> Result<Option<Coordinates>> {
        Self::unavailable()
    }

    async fn nearby_attractions(&self, _location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        Self::unavailable()
    }

    async fn nearby_restaurants(&self, _location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        Self::unavailable()
    }

    async fn current_weather(&self, _name: &str) -> Result<Option<WeatherSnapshot>> {
        Self::unavailable()
    }

    async fn route(&self, _origin: &str, _destination: &str) -> Result<Option<RouteSummary>> {
        Self::unavailable()
    }
}

#[async_trait]
impl<G: PlacesGateway + ?Sized> PlacesGateway for Box<G> {
    async fn geocode(&self, name: &str) -> Result<Option<Coordinates>> {
        (**self).geocode(name).await
    }

    async fn nearby_attractions(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        (**self).nearby_attractions(location).await
    }

    async fn nearby_restaurants(&self, location: Coordinates) -> Result<Vec<PlaceCandidate>> {
        (**self).nearby_restaurants(location).await
    }

    async fn current_weather(&self, name: &str) -> Result<Option<WeatherSnapshot>> {
        (**self).current_weather(name).await
    }

    async fn route(&self, origin: &str, destination: &str) -> Result<Option<RouteSummary>> {
        (**self).route(origin, destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_gateway_always_fails() {
        let gateway = OfflineGateway;
        let err = gateway.geocode("Goa").await.unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(gateway
            .nearby_attractions(Coordinates::new(15.3, 74.1))
            .await
            .is_err());
        assert!(gateway.route("Delhi", "Goa").await.is_err());
    }
}
