pub mod itinerary;
pub mod place;
pub mod plan;
pub mod route;
pub mod trip;

pub use itinerary::{Activity, CostBreakdown, DayPlan, Meals};
pub use place::{Coordinates, PlaceCandidate, WeatherSnapshot};
pub use plan::{DataSource, TravelPlan};
pub use route::{RouteStep, RouteSummary};
pub use trip::{
    Accommodation, DayBucket, TravelMode, TravelerBucket, TripRequest, TripType, MAX_BUDGET,
};
