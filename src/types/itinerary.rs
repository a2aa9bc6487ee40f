use serde::{Deserialize, Serialize};

/// Per-day itinerary with timed activities, meals and the night's stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Short theme for the day
    pub theme: String,
    /// Activities in chronological order, never empty
    pub activities: Vec<Activity>,
    pub meals: Meals,
    /// Where the night is spent (e.g., "Hotel in Manali")
    pub accommodation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Start time label such as "10:00 AM"
    pub time: String,
    pub title: String,
    pub location: String,
    /// Duration label such as "3-4 hours"
    pub duration: String,
    /// Estimated cost in local currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
}

/// Trip cost estimate over a fixed set of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub transportation: u64,
    pub accommodation: u64,
    pub food: u64,
    pub activities: u64,
    pub miscellaneous: u64,
}

impl CostBreakdown {
    /// Sum of all five categories
    pub fn total(&self) -> u64 {
        self.transportation + self.accommodation + self.food + self.activities + self.miscellaneous
    }

    /// Budget left after the total; negative when the plan overshoots.
    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn budget_remaining(&self, budget: u64) -> i64 {
        let budget = i64::try_from(budget).unwrap_or(i64::MAX);
        let total = i64::try_from(self.total()).unwrap_or(i64::MAX);
        budget.saturating_sub(total)
    }

    /// Category name / amount pairs in display order
    pub fn entries(&self) -> [(&'static str, u64); 5] {
        [
            ("transportation", self.transportation),
            ("accommodation", self.accommodation),
            ("food", self.food),
            ("activities", self.activities),
            ("miscellaneous", self.miscellaneous),
        ]
    }
}
