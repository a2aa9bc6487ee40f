use serde::{Deserialize, Serialize};

/// One turn-by-turn instruction, with Google's display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Plain-text instruction (markup removed)
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

/// Overview of getting from the starting point to the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// e.g. "539 km"
    pub distance: String,
    /// e.g. "12 hours 5 mins"
    pub duration: String,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}
