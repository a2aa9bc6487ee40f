//! trip-guru-rs: turn a one-line trip description into a day-by-day travel plan
//!
//! The pipeline is a rule-based extractor that fills a [`TripRequest`] from
//! free text, a gateway that looks up attractions, restaurants and weather
//! (falling back to a mock dataset when the service is unavailable), and a
//! synthesizer that lays candidates out over the trip's days with a cost summary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use trip_guru_rs::{GatewayConfig, GoogleMapsGateway, TripPlanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = GoogleMapsGateway::new(GatewayConfig::from_env()?)?;
//!     let planner = TripPlanner::new(gateway);
//!
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let plan = planner
//!         .plan_prompt("5 days in Manali from Delhi by bus, budget 30000 for a couple", &mut rng)
//!         .await;
//!     println!("{}", plan.summary());
//!     Ok(())
//! }
//! ```
//!
//! Without an API key, [`TripPlanner::offline`] plans from the mock dataset.

pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod schemas;
pub mod services;
pub mod synth;
pub mod types;

pub use config::{FallbackPolicy, GatewayConfig, PlannerConfig};
pub use error::{PlannerError, Result};
pub use extract::extract;
pub use gateway::{GoogleMapsGateway, OfflineGateway, PlacesGateway};
pub use schemas::{parse_trip_request, trip_request_schema, SchemaHandle};
pub use services::{DestinationData, TripPlanner};
pub use synth::synthesize;
pub use types::{
    Accommodation, Activity, Coordinates, CostBreakdown, DataSource, DayBucket, DayPlan, Meals,
    PlaceCandidate, TravelMode, TravelPlan, TravelerBucket, TripRequest, TripType,
    WeatherSnapshot,
};

#[cfg(feature = "cli")]
pub mod cli;
