use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest budget accepted, so the remaining budget always fits an `i64`.
pub const MAX_BUDGET: u64 = i64::MAX as u64;

/// Structured trip request, either filled in directly or extracted from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// City or town the trip starts from (e.g., "Delhi")
    #[schemars(length(min = 1))]
    pub starting_point: String,
    /// City or town being visited (e.g., "Manali")
    #[schemars(length(min = 1))]
    pub destination: String,
    /// Trip length bucket
    pub days: DayBucket,
    /// Total budget in local currency units
    #[schemars(range(min = 1))]
    pub budget: u64,
    /// Party size bucket
    pub travelers: TravelerBucket,
    /// Preferred way of getting there
    pub travel_mode: TravelMode,
    /// Preferred kind of stay
    pub accommodation: Accommodation,
    /// Activity theme of the trip
    pub trip_type: TripType,
    /// Free-text preferences, carried through unmodified
    #[serde(default)]
    pub preferences: String,
}

impl TripRequest {
    /// Check the invariants serde cannot express: non-empty places and a
    /// budget in `1..=MAX_BUDGET`.
    pub fn validate(&self) -> crate::Result<()> {
        if self.starting_point.trim().is_empty() {
            return Err(crate::PlannerError::Validation(
                "startingPoint must not be empty".to_string(),
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(crate::PlannerError::Validation(
                "destination must not be empty".to_string(),
            ));
        }
        if self.budget == 0 {
            return Err(crate::PlannerError::Validation(
                "budget must be positive".to_string(),
            ));
        }
        if self.budget > MAX_BUDGET {
            return Err(crate::PlannerError::Validation(format!(
                "budget must not exceed {}",
                MAX_BUDGET
            )));
        }
        Ok(())
    }
}

/// Trip length bucket as offered by the planning form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DayBucket {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "8-14")]
    EightToFourteen,
    #[serde(rename = "15+")]
    FifteenPlus,
}

impl DayBucket {
    /// Bucket a raw day count: ≤2, ≤4, ≤7, ≤14, then everything above.
    pub fn from_day_count(days: u64) -> Self {
        match days {
            0..=2 => DayBucket::OneToTwo,
            3..=4 => DayBucket::ThreeToFour,
            5..=7 => DayBucket::FiveToSeven,
            8..=14 => DayBucket::EightToFourteen,
            _ => DayBucket::FifteenPlus,
        }
    }

    /// The leading number of the bucket label ("5-7" → 5).
    pub fn leading_days(self) -> u32 {
        match self {
            DayBucket::OneToTwo => 1,
            DayBucket::ThreeToFour => 3,
            DayBucket::FiveToSeven => 5,
            DayBucket::EightToFourteen => 8,
            DayBucket::FifteenPlus => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayBucket::OneToTwo => "1-2",
            DayBucket::ThreeToFour => "3-4",
            DayBucket::FiveToSeven => "5-7",
            DayBucket::EightToFourteen => "8-14",
            DayBucket::FifteenPlus => "15+",
        }
    }
}

/// Party size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TravelerBucket {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Couple,
    #[serde(rename = "3-4")]
    SmallGroup,
    #[serde(rename = "5+")]
    LargeGroup,
}

impl TravelerBucket {
    /// Bucket a head count. Zero is treated as a solo traveler.
    pub fn from_count(count: u64) -> Self {
        match count {
            0 | 1 => TravelerBucket::Solo,
            2 => TravelerBucket::Couple,
            3 | 4 => TravelerBucket::SmallGroup,
            _ => TravelerBucket::LargeGroup,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelerBucket::Solo => "1",
            TravelerBucket::Couple => "2",
            TravelerBucket::SmallGroup => "3-4",
            TravelerBucket::LargeGroup => "5+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Flight,
    Train,
    Bus,
    Car,
    Mixed,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Flight => "flight",
            TravelMode::Train => "train",
            TravelMode::Bus => "bus",
            TravelMode::Car => "car",
            TravelMode::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    Hotel,
    Airbnb,
    Hostel,
    Resort,
    Guesthouse,
}

impl Accommodation {
    pub fn as_str(self) -> &'static str {
        match self {
            Accommodation::Hotel => "hotel",
            Accommodation::Airbnb => "airbnb",
            Accommodation::Hostel => "hostel",
            Accommodation::Resort => "resort",
            Accommodation::Guesthouse => "guesthouse",
        }
    }

    /// Label shown for the nightly stay. Hostels and guesthouses share the generic label.
    pub fn display_label(self) -> &'static str {
        match self {
            Accommodation::Hotel => "Hotel",
            Accommodation::Airbnb => "Airbnb",
            Accommodation::Resort => "Resort",
            Accommodation::Hostel | Accommodation::Guesthouse => "Accommodation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Adventure,
    Relaxation,
    Food,
    Sightseeing,
    Nature,
    Nightlife,
    Family,
    Business,
}

impl TripType {
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::Adventure => "adventure",
            TripType::Relaxation => "relaxation",
            TripType::Food => "food",
            TripType::Sightseeing => "sightseeing",
            TripType::Nature => "nature",
            TripType::Nightlife => "nightlife",
            TripType::Family => "family",
            TripType::Business => "business",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(DayBucket, TravelerBucket, TravelMode, Accommodation, TripType);
