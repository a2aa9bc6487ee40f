//! Prompt extractor: free text to a fully populated [`TripRequest`].
//!
//! Each field is filled by its own ordered rule table (see [`rules`]). The
//! first matching rule wins; a field with no match keeps its default, so
//! [`extract`] never fails and never leaves a field empty.

pub mod normalize;
pub mod rules;

use crate::types::{
    Accommodation, DayBucket, TravelMode, TravelerBucket, TripRequest, TripType,
};
use rules::{BudgetRule, DaysRule, KeywordTag, TravelersRule};
use tracing::debug;

/// Values used when the prompt says nothing about a field.
pub mod defaults {
    use crate::types::{Accommodation, DayBucket, TravelMode, TravelerBucket, TripType};

    pub const STARTING_POINT: &str = "Delhi";
    pub const DESTINATION: &str = "Goa";
    pub const DAYS: DayBucket = DayBucket::FiveToSeven;
    pub const BUDGET: u64 = 50_000;
    pub const TRAVELERS: TravelerBucket = TravelerBucket::Couple;
    pub const TRAVEL_MODE: TravelMode = TravelMode::Flight;
    pub const ACCOMMODATION: Accommodation = Accommodation::Hotel;
    pub const TRIP_TYPE: TripType = TripType::Sightseeing;
}

/// Extract a trip request from a free-text prompt.
pub fn extract(prompt: &str) -> TripRequest {
    let request = TripRequest {
        starting_point: extract_starting_point(prompt)
            .unwrap_or_else(|| defaults::STARTING_POINT.to_string()),
        destination: extract_destination(prompt)
            .unwrap_or_else(|| defaults::DESTINATION.to_string()),
        days: extract_days(prompt).unwrap_or(defaults::DAYS),
        budget: extract_budget(prompt).unwrap_or(defaults::BUDGET),
        travelers: extract_travelers(prompt).unwrap_or(defaults::TRAVELERS),
        travel_mode: extract_travel_mode(prompt).unwrap_or(defaults::TRAVEL_MODE),
        accommodation: extract_accommodation(prompt).unwrap_or(defaults::ACCOMMODATION),
        trip_type: extract_trip_type(prompt).unwrap_or(defaults::TRIP_TYPE),
        preferences: prompt.to_string(),
    };
    debug!(
        target: "trip_guru::extract",
        destination = %request.destination,
        starting_point = %request.starting_point,
        days = %request.days,
        budget = request.budget,
        "extracted trip request"
    );
    request
}

pub fn extract_destination(prompt: &str) -> Option<String> {
    let (rule, caps) = rules::destination_rules().first_match(prompt)?;
    let name = normalize::title_case(caps.get(1)?.as_str());
    debug!(target: "trip_guru::extract", ?rule, %name, "destination rule matched");
    (!name.is_empty()).then_some(name)
}

pub fn extract_starting_point(prompt: &str) -> Option<String> {
    let (rule, caps) = rules::origin_rules().first_match(prompt)?;
    let name = normalize::title_case(caps.get(1)?.as_str());
    debug!(target: "trip_guru::extract", ?rule, %name, "starting point rule matched");
    (!name.is_empty()).then_some(name)
}

pub fn extract_days(prompt: &str) -> Option<DayBucket> {
    let (rule, caps) = rules::days_rules().first_match(prompt)?;
    let count = |caps: &regex::Captures<'_>| caps.get(1).and_then(|m| normalize::parse_count(m.as_str()));
    match rule {
        DaysRule::Days => count(&caps).map(DayBucket::from_day_count),
        DaysRule::Weeks => count(&caps).map(|weeks| DayBucket::from_day_count(weeks.saturating_mul(7))),
        DaysRule::Weekend => Some(DayBucket::OneToTwo),
        DaysRule::Fortnight => Some(DayBucket::EightToFourteen),
        DaysRule::BareWeek => Some(DayBucket::FiveToSeven),
    }
}

pub fn extract_budget(prompt: &str) -> Option<u64> {
    let (rule, caps) = rules::budget_rules().first_match(prompt)?;
    let amount = caps.get(1)?.as_str();
    let marker = match rule {
        BudgetRule::CurrencyWord => None,
        BudgetRule::CurrencyPrefixed | BudgetRule::Suffixed | BudgetRule::Labelled => {
            caps.get(2).map(|m| m.as_str())
        }
    };
    normalize::parse_amount(amount, marker)
}

pub fn extract_travelers(prompt: &str) -> Option<TravelerBucket> {
    let (rule, caps) = rules::travelers_rules().first_match(prompt)?;
    match rule {
        TravelersRule::Couple => Some(TravelerBucket::Couple),
        TravelersRule::Solo => Some(TravelerBucket::Solo),
        TravelersRule::Family => Some(TravelerBucket::SmallGroup),
        TravelersRule::Group => Some(TravelerBucket::LargeGroup),
        TravelersRule::Count => caps
            .get(1)
            .and_then(|m| normalize::parse_count(m.as_str()))
            .map(TravelerBucket::from_count),
    }
}

pub fn extract_travel_mode(prompt: &str) -> Option<TravelMode> {
    match rules::travel_mode_rules().first_match(prompt)?.0 {
        KeywordTag::Mode(mode) => Some(mode),
        _ => None,
    }
}

pub fn extract_accommodation(prompt: &str) -> Option<Accommodation> {
    match rules::accommodation_rules().first_match(prompt)?.0 {
        KeywordTag::Stay(stay) => Some(stay),
        _ => None,
    }
}

pub fn extract_trip_type(prompt: &str) -> Option<TripType> {
    match rules::trip_type_rules().first_match(prompt)?.0 {
        KeywordTag::Theme(theme) => Some(theme),
        _ => None,
    }
}
