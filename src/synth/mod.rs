//! Itinerary synthesizer: a trip request plus place candidates to a day-by-day plan.
//!
//! Candidate order is randomized through the caller's [`Rng`], so a seeded
//! generator reproduces a plan exactly.

pub mod canned;
pub mod costs;

use crate::types::{Activity, DayPlan, Meals, PlaceCandidate, TripRequest};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

pub use canned::canned_itinerary;

/// Plans never run longer than a week.
pub const MAX_DAYS: u32 = 7;

const ATTRACTIONS_PER_DAY: usize = 2;

const DAY_THEMES: [&str; 7] = [
    "Arrival & Local Exploration",
    "Major Attractions & Landmarks",
    "Cultural Experience & Heritage",
    "Adventure & Nature Activities",
    "Shopping & Local Markets",
    "Relaxation & Scenic Views",
    "Final Exploration & Departure",
];

const FALLBACK_THEME: &str = "Exploration Day";

/// Theme for a 1-based day number.
pub fn day_theme(day: u32) -> &'static str {
    (day as usize)
        .checked_sub(1)
        .and_then(|idx| DAY_THEMES.get(idx))
        .copied()
        .unwrap_or(FALLBACK_THEME)
}

/// Number of day plans generated for a request.
pub fn planned_days(request: &TripRequest) -> u32 {
    request.days.leading_days().min(MAX_DAYS)
}

/// Build the day plans for a request.
///
/// With no attractions the fixed two-day plan is returned instead, whatever
/// the restaurant count, so the result is never empty. Once attractions run
/// out, later days get a generic sightseeing activity.
pub fn synthesize<R: Rng + ?Sized>(
    request: &TripRequest,
    attractions: &[PlaceCandidate],
    restaurants: &[PlaceCandidate],
    rng: &mut R,
) -> Vec<DayPlan> {
    if attractions.is_empty() {
        debug!(
            target: "trip_guru::synth",
            restaurants = restaurants.len(),
            "no attractions, using canned itinerary"
        );
        return canned_itinerary();
    }

    let mut attractions = attractions.to_vec();
    let mut restaurants = restaurants.to_vec();
    attractions.shuffle(rng);
    restaurants.shuffle(rng);

    let destination = request.destination.as_str();
    let accommodation = format!(
        "{} in {}",
        request.accommodation.display_label(),
        destination
    );

    let num_days = planned_days(request);
    debug!(
        target: "trip_guru::synth",
        num_days,
        attractions = attractions.len(),
        restaurants = restaurants.len(),
        "synthesizing itinerary"
    );

    (1..=num_days)
        .map(|day| {
            let idx = (day - 1) as usize;
            let start = (idx * ATTRACTIONS_PER_DAY).min(attractions.len());
            let end = (start + ATTRACTIONS_PER_DAY).min(attractions.len());
            let day_attractions = &attractions[start..end];

            let activities = if day_attractions.is_empty() {
                vec![local_sightseeing(destination, rng)]
            } else {
                day_attractions
                    .iter()
                    .enumerate()
                    .map(|(slot, place)| attraction_activity(slot, place, rng))
                    .collect()
            };

            DayPlan {
                day,
                theme: day_theme(day).to_string(),
                activities,
                meals: meals_for_day(day, restaurants.get(idx), &restaurants, destination),
                accommodation: accommodation.clone(),
            }
        })
        .collect()
}

fn attraction_activity<R: Rng + ?Sized>(slot: usize, place: &PlaceCandidate, rng: &mut R) -> Activity {
    let (time, duration) = if slot == 0 {
        ("10:00 AM", "3-4 hours")
    } else {
        ("2:30 PM", "2-3 hours")
    };

    let kind = if place.has_tag("tourist_attraction") {
        "Famous tourist destination"
    } else {
        "Popular local spot"
    };
    let praise = match place.rating {
        Some(rating) => format!("rated {}/5", format_rating(rating)),
        None => "highly recommended by locals".to_string(),
    };

    Activity {
        time: time.to_string(),
        title: format!("Explore {}", place.name),
        location: place.address.clone(),
        duration: duration.to_string(),
        cost: Some(activity_cost(place.price_tier, rng)),
        description: format!("{} {}", kind, praise),
    }
}

/// Tier × 250 plus up to 199 of jitter; untiered places cost 100 to 599.
pub fn activity_cost<R: Rng + ?Sized>(price_tier: Option<u8>, rng: &mut R) -> u64 {
    match price_tier {
        Some(tier) if tier > 0 => u64::from(tier) * 250 + rng.gen_range(0..200),
        _ => rng.gen_range(100..600),
    }
}

fn local_sightseeing<R: Rng + ?Sized>(destination: &str, rng: &mut R) -> Activity {
    Activity {
        time: "10:00 AM".to_string(),
        title: format!("Local sightseeing in {}", destination),
        location: format!("Central {}", destination),
        duration: "3-4 hours".to_string(),
        cost: Some(rng.gen_range(200..700)),
        description: "Explore the local culture and attractions".to_string(),
    }
}

fn meals_for_day(
    day: u32,
    lunch_spot: Option<&PlaceCandidate>,
    restaurants: &[PlaceCandidate],
    destination: &str,
) -> Meals {
    let breakfast = (day > 1).then(|| "Hotel breakfast (included)".to_string());

    let lunch = match lunch_spot {
        Some(place) => match place.rating {
            Some(rating) => format!("{} ({}⭐)", place.name, format_rating(rating)),
            None => format!("{} (Local favorite)", place.name),
        },
        None => format!("Local restaurant in {}", destination),
    };

    let dinner = if restaurants.is_empty() {
        "Traditional local cuisine".to_string()
    } else {
        restaurants[day as usize % restaurants.len()].name.clone()
    };

    Meals {
        breakfast,
        lunch: Some(lunch),
        dinner: Some(dinner),
    }
}

/// One decimal place, dropping a trailing ".0" ("4.3", "4").
fn format_rating(rating: f64) -> String {
    let rounded = (rating * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;
    use rand::{rngs::StdRng, SeedableRng};

    fn place(id: &str, tier: Option<u8>, rating: Option<f64>) -> PlaceCandidate {
        PlaceCandidate {
            id: id.to_string(),
            name: format!("Place {}", id),
            address: format!("{} Road", id),
            rating,
            price_tier: tier,
            tags: vec!["tourist_attraction".to_string()],
            location: Coordinates::new(32.2, 77.1),
            photo_refs: Vec::new(),
        }
    }

    #[test]
    fn themes_fall_back_past_the_list() {
        assert_eq!(day_theme(1), "Arrival & Local Exploration");
        assert_eq!(day_theme(7), "Final Exploration & Departure");
        assert_eq!(day_theme(8), FALLBACK_THEME);
        assert_eq!(day_theme(0), FALLBACK_THEME);
    }

    #[test]
    fn costs_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let tiered = activity_cost(Some(2), &mut rng);
            assert!((500..700).contains(&tiered));
            let untiered = activity_cost(None, &mut rng);
            assert!((100..600).contains(&untiered));
        }
    }

    #[test]
    fn rating_formatting() {
        assert_eq!(format_rating(4.3), "4.3");
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.26), "4.3");
    }

    #[test]
    fn dinner_wraps_around_restaurant_list() {
        let restaurants = vec![place("a", None, None), place("b", None, None)];
        let meals = meals_for_day(3, None, &restaurants, "Goa");
        assert_eq!(meals.dinner.as_deref(), Some("Place b"));
        assert_eq!(meals.lunch.as_deref(), Some("Local restaurant in Goa"));
        assert!(meals.breakfast.is_some());
    }

    #[test]
    fn lunch_annotation_uses_rating() {
        let rated = place("r", None, Some(4.4));
        let meals = meals_for_day(1, Some(&rated), std::slice::from_ref(&rated), "Goa");
        assert_eq!(meals.lunch.as_deref(), Some("Place r (4.4⭐)"));
        assert_eq!(meals.breakfast, None);

        let unrated = place("u", None, None);
        let meals = meals_for_day(2, Some(&unrated), std::slice::from_ref(&unrated), "Goa");
        assert_eq!(meals.lunch.as_deref(), Some("Place u (Local favorite)"));
    }
}
