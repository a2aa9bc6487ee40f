use crate::{
    config::{FallbackPolicy, PlannerConfig},
    extract::extract,
    gateway::{mock, OfflineGateway, PlacesGateway},
    synth::synthesize,
    types::{
        Coordinates, CostBreakdown, DataSource, PlaceCandidate, RouteSummary, TravelPlan,
        TripRequest, WeatherSnapshot,
    },
};
use rand::Rng;
use tracing::{info, warn};

/// Place data gathered for one destination, live or mock.
#[derive(Debug, Clone)]
pub struct DestinationData {
    pub attractions: Vec<PlaceCandidate>,
    pub restaurants: Vec<PlaceCandidate>,
    pub weather: Option<WeatherSnapshot>,
    pub coordinates: Coordinates,
    pub source: DataSource,
}

impl DestinationData {
    /// The full mock dataset for a destination
    pub fn mock<R: Rng + ?Sized>(destination: &str, rng: &mut R) -> Self {
        Self {
            attractions: mock::mock_attractions(destination, rng),
            restaurants: mock::mock_restaurants(destination, rng),
            weather: Some(mock::mock_weather(rng)),
            coordinates: mock::mock_coordinates(destination),
            source: DataSource::Mock,
        }
    }
}

/// Runs one planning cycle: lookup, fallback, synthesis and costing.
#[derive(Debug)]
pub struct TripPlanner<G> {
    gateway: G,
    config: PlannerConfig,
}

impl TripPlanner<OfflineGateway> {
    /// Planner that never touches the network
    pub fn offline() -> Self {
        Self::new(OfflineGateway)
    }
}

impl<G: PlacesGateway> TripPlanner<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.config.fallback = fallback;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Extract a request from free text and plan it.
    pub async fn plan_prompt<R: Rng + Send + ?Sized>(&self, prompt: &str, rng: &mut R) -> TravelPlan {
        let request = extract(prompt);
        self.plan(&request, rng).await
    }

    /// Plan a trip. Never fails: lookup problems degrade to mock data and an
    /// empty dataset degrades to the canned itinerary.
    pub async fn plan<R: Rng + Send + ?Sized>(&self, request: &TripRequest, rng: &mut R) -> TravelPlan {
        info!(
            target: "trip_guru::planner",
            destination = %request.destination,
            days = %request.days,
            travel_mode = %request.travel_mode,
            "planning trip"
        );

        let (data, route) = tokio::join!(
            self.gather(&request.destination, rng),
            self.route(&request.starting_point, &request.destination)
        );
        let days = synthesize(request, &data.attractions, &data.restaurants, rng);
        let costs = CostBreakdown::for_request(request);
        let plan = TravelPlan::new(
            request.clone(),
            days,
            costs,
            data.weather,
            Some(data.coordinates),
            data.source,
        )
        .with_route(route);

        info!(
            target: "trip_guru::planner",
            days = plan.days.len(),
            grand_total = plan.grand_total,
            budget_remaining = plan.budget_remaining,
            source = ?plan.source,
            "trip planned"
        );
        plan
    }

    /// Directions from origin to destination. Optional: a failure only drops
    /// the route and never switches the plan to mock data.
    pub async fn route(&self, origin: &str, destination: &str) -> Option<RouteSummary> {
        match self.gateway.route(origin, destination).await {
            Ok(route) => route,
            Err(err) => {
                warn!(
                    target: "trip_guru::planner",
                    %origin,
                    %destination,
                    error = %err,
                    "route lookup failed, plan has no directions"
                );
                None
            }
        }
    }

    /// Fetch place and weather data for a destination, falling back per the
    /// configured policy.
    pub async fn gather<R: Rng + Send + ?Sized>(&self, destination: &str, rng: &mut R) -> DestinationData {
        let coordinates = match self.gateway.geocode(destination).await {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => {
                warn!(target: "trip_guru::planner", %destination, "destination not found, using mock data");
                return DestinationData::mock(destination, rng);
            }
            Err(err) => {
                warn!(target: "trip_guru::planner", %destination, error = %err, "geocoding failed, using mock data");
                return DestinationData::mock(destination, rng);
            }
        };

        let attractions = self.gateway.nearby_attractions(coordinates);
        let restaurants = self.gateway.nearby_restaurants(coordinates);
        let weather = self.gateway.current_weather(destination);

        let mut data = match self.config.fallback {
            FallbackPolicy::AllOrNothing => {
                match tokio::try_join!(attractions, restaurants, weather) {
                    Ok((attractions, restaurants, weather)) => DestinationData {
                        attractions,
                        restaurants,
                        weather,
                        coordinates,
                        source: DataSource::Live,
                    },
                    Err(err) => {
                        warn!(
                            target: "trip_guru::planner",
                            %destination,
                            error = %err,
                            "place lookup failed, using mock data for every source"
                        );
                        let mut data = DestinationData::mock(destination, rng);
                        data.coordinates = coordinates;
                        return data;
                    }
                }
            }
            FallbackPolicy::PerSource => {
                let (attractions, restaurants, weather) =
                    tokio::join!(attractions, restaurants, weather);
                let mut degraded = false;

                let attractions = attractions.unwrap_or_else(|err| {
                    warn!(target: "trip_guru::planner", error = %err, "attractions unavailable, using mock data");
                    degraded = true;
                    mock::mock_attractions(destination, rng)
                });
                let restaurants = restaurants.unwrap_or_else(|err| {
                    warn!(target: "trip_guru::planner", error = %err, "restaurants unavailable, using mock data");
                    degraded = true;
                    mock::mock_restaurants(destination, rng)
                });
                let weather = weather.unwrap_or_else(|err| {
                    warn!(target: "trip_guru::planner", error = %err, "weather unavailable, using mock data");
                    degraded = true;
                    Some(mock::mock_weather(rng))
                });

                DestinationData {
                    attractions,
                    restaurants,
                    weather,
                    coordinates,
                    source: if degraded {
                        DataSource::Partial
                    } else {
                        DataSource::Live
                    },
                }
            }
        };

        data.attractions.truncate(self.config.max_attractions);
        data.restaurants.truncate(self.config.max_restaurants);
        data
    }
}
