pub mod planner;

pub use planner::{DestinationData, TripPlanner};
