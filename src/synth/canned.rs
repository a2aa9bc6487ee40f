//! Fixed two-day itinerary shown when no place data exists at all.

use crate::types::{Activity, DayPlan, Meals};

fn activity(
    time: &str,
    title: &str,
    location: &str,
    duration: &str,
    cost: u64,
    description: &str,
) -> Activity {
    Activity {
        time: time.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        cost: Some(cost),
        description: description.to_string(),
    }
}

pub fn canned_itinerary() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day: 1,
            theme: "Arrival & Local Exploration".to_string(),
            activities: vec![
                activity(
                    "10:00 AM",
                    "Arrival at Manali",
                    "Manali Bus Stand",
                    "1 hour",
                    0,
                    "Check-in to accommodation and freshen up",
                ),
                activity(
                    "12:00 PM",
                    "Mall Road Shopping",
                    "Mall Road, Manali",
                    "2 hours",
                    500,
                    "Explore local markets, buy souvenirs and warm clothes",
                ),
                activity(
                    "3:00 PM",
                    "Hadimba Temple Visit",
                    "Hadimba Temple",
                    "1.5 hours",
                    0,
                    "Ancient cave temple surrounded by cedar forests",
                ),
                activity(
                    "6:00 PM",
                    "Sunset at Van Vihar",
                    "Van Vihar National Park",
                    "1 hour",
                    50,
                    "Beautiful sunset views and nature walk",
                ),
            ],
            meals: Meals {
                breakfast: None,
                lunch: Some("Johnson's Cafe (₹800 for 2)".to_string()),
                dinner: Some("Casa Bella Vista (₹1200 for 2)".to_string()),
            },
            accommodation: "Hotel Snow Valley (₹3500/night)".to_string(),
        },
        DayPlan {
            day: 2,
            theme: "Adventure & Scenic Beauty".to_string(),
            activities: vec![
                activity(
                    "8:00 AM",
                    "Solang Valley Adventure",
                    "Solang Valley",
                    "6 hours",
                    2500,
                    "Paragliding, zorbing, and ropeway activities",
                ),
                activity(
                    "3:00 PM",
                    "Atal Tunnel Visit",
                    "Atal Tunnel",
                    "2 hours",
                    200,
                    "World's longest highway tunnel above 10,000 feet",
                ),
                activity(
                    "6:00 PM",
                    "Local Market Exploration",
                    "Old Manali Market",
                    "2 hours",
                    300,
                    "Tibetan cafes and local handicraft shopping",
                ),
            ],
            meals: Meals {
                breakfast: Some("Hotel breakfast (included)".to_string()),
                lunch: Some("Solang Valley Food Court (₹600 for 2)".to_string()),
                dinner: Some("Il Forno (₹1000 for 2)".to_string()),
            },
            accommodation: "Hotel Snow Valley (₹3500/night)".to_string(),
        },
    ]
}
