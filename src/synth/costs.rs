use crate::types::{CostBreakdown, TravelMode, TripRequest};

pub const BUS_FARE: u64 = 2_000;
pub const FLIGHT_FARE: u64 = 8_000;
pub const OTHER_FARE: u64 = 4_000;
pub const ACCOMMODATION: u64 = 7_000;
pub const FOOD: u64 = 4_000;
pub const ACTIVITIES: u64 = 3_550;
pub const MISCELLANEOUS: u64 = 1_000;

/// Transport fare by travel mode; everything but bus and flight shares one fare.
pub fn transportation_fare(mode: TravelMode) -> u64 {
    match mode {
        TravelMode::Bus => BUS_FARE,
        TravelMode::Flight => FLIGHT_FARE,
        TravelMode::Train | TravelMode::Car | TravelMode::Mixed => OTHER_FARE,
    }
}

impl CostBreakdown {
    /// Flat estimate for a request. Only the transport fare depends on the
    /// request; trip length and party size do not change the figures.
    pub fn for_request(request: &TripRequest) -> Self {
        Self {
            transportation: transportation_fare(request.travel_mode),
            accommodation: ACCOMMODATION,
            food: FOOD,
            activities: ACTIVITIES,
            miscellaneous: MISCELLANEOUS,
        }
    }
}
