use super::{
    itinerary::{CostBreakdown, DayPlan},
    place::{Coordinates, WeatherSnapshot},
    route::RouteSummary,
    trip::TripRequest,
};
use serde::{Deserialize, Serialize};

/// Where the place and weather data for a plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Everything came from the mapping service
    Live,
    /// Some sources were replaced by mock data
    Partial,
    /// The whole dataset is mock data
    Mock,
}

/// Result of a planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlan {
    pub request: TripRequest,
    pub days: Vec<DayPlan>,
    pub costs: CostBreakdown,
    pub grand_total: u64,
    /// Budget minus grand total; negative when over budget
    pub budget_remaining: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Directions from the starting point, when the route lookup succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,
    pub source: DataSource,
}

impl TravelPlan {
    pub fn new(
        request: TripRequest,
        days: Vec<DayPlan>,
        costs: CostBreakdown,
        weather: Option<WeatherSnapshot>,
        coordinates: Option<Coordinates>,
        source: DataSource,
    ) -> Self {
        let grand_total = costs.total();
        let budget_remaining = costs.budget_remaining(request.budget);
        Self {
            request,
            days,
            costs,
            grand_total,
            budget_remaining,
            weather,
            coordinates,
            route: None,
            source,
        }
    }

    pub fn with_route(mut self, route: Option<RouteSummary>) -> Self {
        self.route = route;
        self
    }

    /// Generate a human-readable report of the plan
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        let request = &self.request;

        lines.push(format!("=== {} Travel Plan ===", request.destination));
        lines.push(format!(
            "From {} • {} days • {} traveler(s) • {} trip",
            request.starting_point, request.days, request.travelers, request.trip_type
        ));
        lines.push(format!(
            "Budget: ₹{} • Travel: {} • Stay: {}",
            request.budget, request.travel_mode, request.accommodation
        ));

        if let Some(weather) = &self.weather {
            lines.push(String::new());
            lines.push("--- Weather ---".to_string());
            lines.push(format!(
                "{}°C - {} (humidity {}%, wind {} km/h)",
                weather.temperature, weather.description, weather.humidity, weather.wind_speed
            ));
        }

        if let Some(route) = &self.route {
            lines.push(String::new());
            lines.push("--- Getting There ---".to_string());
            lines.push(format!(
                "{} → {}: {}, {}",
                request.starting_point, request.destination, route.distance, route.duration
            ));
            for (idx, step) in route.steps.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} ({}, {})",
                    idx + 1,
                    step.instruction,
                    step.distance,
                    step.duration
                ));
            }
        }

        lines.push(String::new());
        lines.push("--- Daily Itinerary ---".to_string());

        for day in &self.days {
            lines.push(format!("\nDay {}: {}", day.day, day.theme));
            for activity in &day.activities {
                let cost = activity
                    .cost
                    .filter(|cost| *cost > 0)
                    .map(|cost| format!(" [₹{}]", cost))
                    .unwrap_or_default();
                lines.push(format!(
                    "  {} {} @ {} ({}){}",
                    activity.time, activity.title, activity.location, activity.duration, cost
                ));
                lines.push(format!("      {}", activity.description));
            }
            if let Some(breakfast) = &day.meals.breakfast {
                lines.push(format!("  Breakfast: {}", breakfast));
            }
            if let Some(lunch) = &day.meals.lunch {
                lines.push(format!("  Lunch: {}", lunch));
            }
            if let Some(dinner) = &day.meals.dinner {
                lines.push(format!("  Dinner: {}", dinner));
            }
            lines.push(format!("  Stay: {}", day.accommodation));
        }

        lines.push(String::new());
        lines.push("--- Cost Breakdown ---".to_string());
        for (category, amount) in self.costs.entries() {
            lines.push(format!("  {:<15} ₹{}", category, amount));
        }
        lines.push(format!("  {:<15} ₹{}", "Total Cost", self.grand_total));
        lines.push(format!("Budget remaining: ₹{}", self.budget_remaining));

        if self.source != DataSource::Live {
            lines.push(String::new());
            lines.push("(Some place data is illustrative; live lookup was unavailable.)".to_string());
        }

        lines.join("\n")
    }
}
