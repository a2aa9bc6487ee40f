//! Offline dataset used whenever the mapping service cannot be used.
//!
//! Curated entries are keyed by the lowercase destination name and must match
//! exactly. Anything else gets generic placeholders with randomized ratings and
//! coordinates.

use crate::types::{Coordinates, PlaceCandidate, WeatherSnapshot};
use rand::Rng;

struct MockPlace {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    rating: f64,
    price_tier: u8,
    tags: &'static [&'static str],
    lat: f64,
    lng: f64,
}

impl MockPlace {
    fn to_candidate(&self) -> PlaceCandidate {
        PlaceCandidate {
            id: self.id.to_string(),
            name: self.name.to_string(),
            address: self.address.to_string(),
            rating: Some(self.rating),
            price_tier: Some(self.price_tier),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            location: Coordinates::new(self.lat, self.lng),
            photo_refs: Vec::new(),
        }
    }
}

const WORSHIP: &[&str] = &["tourist_attraction", "place_of_worship"];
const NATURAL: &[&str] = &["tourist_attraction", "natural_feature"];
const LANDMARK: &[&str] = &["tourist_attraction", "establishment"];
const FOOD: &[&str] = &["restaurant", "food"];

const MANALI_ATTRACTIONS: &[MockPlace] = &[
    MockPlace {
        id: "mock_1_manali",
        name: "Hadimba Temple",
        address: "Hadimba Temple Rd, Manali, Himachal Pradesh",
        rating: 4.3,
        price_tier: 1,
        tags: WORSHIP,
        lat: 32.2396,
        lng: 77.1887,
    },
    MockPlace {
        id: "mock_2_manali",
        name: "Solang Valley",
        address: "Solang Valley, Manali, Himachal Pradesh",
        rating: 4.5,
        price_tier: 2,
        tags: NATURAL,
        lat: 32.3080,
        lng: 77.1641,
    },
    MockPlace {
        id: "mock_3_manali",
        name: "Mall Road",
        address: "Mall Rd, Manali, Himachal Pradesh",
        rating: 4.2,
        price_tier: 2,
        tags: LANDMARK,
        lat: 32.2432,
        lng: 77.1892,
    },
];

const GOA_ATTRACTIONS: &[MockPlace] = &[
    MockPlace {
        id: "mock_1_goa",
        name: "Baga Beach",
        address: "Baga, Goa",
        rating: 4.1,
        price_tier: 2,
        tags: NATURAL,
        lat: 15.5557,
        lng: 73.7519,
    },
    MockPlace {
        id: "mock_2_goa",
        name: "Basilica of Bom Jesus",
        address: "Old Goa, Goa",
        rating: 4.4,
        price_tier: 1,
        tags: WORSHIP,
        lat: 15.5008,
        lng: 73.9114,
    },
];

const VIJAYAWADA_ATTRACTIONS: &[MockPlace] = &[
    MockPlace {
        id: "mock_1_vijayawada",
        name: "Kanaka Durga Temple",
        address: "Indrakeeladri, Vijayawada, Andhra Pradesh",
        rating: 4.5,
        price_tier: 1,
        tags: WORSHIP,
        lat: 16.5062,
        lng: 80.6480,
    },
    MockPlace {
        id: "mock_2_vijayawada",
        name: "Prakasam Barrage",
        address: "Prakasam Barrage, Vijayawada, Andhra Pradesh",
        rating: 4.2,
        price_tier: 1,
        tags: LANDMARK,
        lat: 16.5167,
        lng: 80.6167,
    },
];

const MANALI_RESTAURANTS: &[MockPlace] = &[
    MockPlace {
        id: "rest_1_manali",
        name: "Johnson's Cafe",
        address: "Mall Rd, Manali, Himachal Pradesh",
        rating: 4.4,
        price_tier: 2,
        tags: FOOD,
        lat: 32.2432,
        lng: 77.1892,
    },
    MockPlace {
        id: "rest_2_manali",
        name: "Casa Bella Vista",
        address: "Log Huts Area, Manali, Himachal Pradesh",
        rating: 4.3,
        price_tier: 3,
        tags: FOOD,
        lat: 32.2396,
        lng: 77.1887,
    },
];

const GOA_RESTAURANTS: &[MockPlace] = &[MockPlace {
    id: "rest_1_goa",
    name: "Britto's",
    address: "Baga Beach, Goa",
    rating: 4.2,
    price_tier: 2,
    tags: FOOD,
    lat: 15.5557,
    lng: 73.7519,
}];

const VIJAYAWADA_RESTAURANTS: &[MockPlace] = &[MockPlace {
    id: "rest_1_vijayawada",
    name: "Minerva Coffee Shop",
    address: "MG Road, Vijayawada, Andhra Pradesh",
    rating: 4.1,
    price_tier: 2,
    tags: FOOD,
    lat: 16.5062,
    lng: 80.6480,
}];

const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("manali", 32.2396, 77.1887),
    ("goa", 15.2993, 74.1240),
    ("vijayawada", 16.5062, 80.6480),
    ("delhi", 28.7041, 77.1025),
    ("mumbai", 19.0760, 72.8777),
    ("bangalore", 12.9716, 77.5946),
];

/// Used when a destination is not in the coordinate table
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 20.0,
    lng: 77.0,
};

fn curated_attractions(key: &str) -> Option<&'static [MockPlace]> {
    match key {
        "manali" => Some(MANALI_ATTRACTIONS),
        "goa" => Some(GOA_ATTRACTIONS),
        "vijayawada" => Some(VIJAYAWADA_ATTRACTIONS),
        _ => None,
    }
}

fn curated_restaurants(key: &str) -> Option<&'static [MockPlace]> {
    match key {
        "manali" => Some(MANALI_RESTAURANTS),
        "goa" => Some(GOA_RESTAURANTS),
        "vijayawada" => Some(VIJAYAWADA_RESTAURANTS),
        _ => None,
    }
}

/// Whether a destination has hand-written mock entries
pub fn is_curated(destination: &str) -> bool {
    curated_attractions(&destination.to_lowercase()).is_some()
}

fn placeholder<R: Rng + ?Sized>(
    id: String,
    name: String,
    address: String,
    min_rating: f64,
    rating_spread: f64,
    tags: &[&str],
    rng: &mut R,
) -> PlaceCandidate {
    PlaceCandidate {
        id,
        name,
        address,
        rating: Some(min_rating + rng.gen::<f64>() * rating_spread),
        price_tier: Some(rng.gen_range(1..=3)),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        location: random_coordinates(rng),
        photo_refs: Vec::new(),
    }
}

fn random_coordinates<R: Rng + ?Sized>(rng: &mut R) -> Coordinates {
    Coordinates::new(
        20.0 + rng.gen::<f64>() * 20.0,
        70.0 + rng.gen::<f64>() * 20.0,
    )
}

pub fn mock_attractions<R: Rng + ?Sized>(destination: &str, rng: &mut R) -> Vec<PlaceCandidate> {
    let key = destination.to_lowercase();
    if let Some(places) = curated_attractions(&key) {
        return places.iter().map(MockPlace::to_candidate).collect();
    }

    vec![
        placeholder(
            format!("mock_1_{}", key),
            format!("{} City Center", destination),
            format!("Central {}", destination),
            4.0,
            0.8,
            LANDMARK,
            rng,
        ),
        placeholder(
            format!("mock_2_{}", key),
            format!("{} Heritage Site", destination),
            format!("Historic {}", destination),
            4.2,
            0.6,
            LANDMARK,
            rng,
        ),
    ]
}

pub fn mock_restaurants<R: Rng + ?Sized>(destination: &str, rng: &mut R) -> Vec<PlaceCandidate> {
    let key = destination.to_lowercase();
    if let Some(places) = curated_restaurants(&key) {
        return places.iter().map(MockPlace::to_candidate).collect();
    }

    vec![placeholder(
        format!("rest_1_{}", key),
        format!("{} Local Restaurant", destination),
        format!("Main Street, {}", destination),
        4.0,
        0.8,
        FOOD,
        rng,
    )]
}

pub fn mock_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: f64::from(rng.gen_range(15..35u8)),
        description: "Partly cloudy".to_string(),
        humidity: f64::from(rng.gen_range(40..80u8)),
        wind_speed: f64::from(rng.gen_range(5..15u8)),
        icon: "02d".to_string(),
    }
}

/// Approximate coordinates for well-known cities, else a fixed point in central India.
pub fn mock_coordinates(destination: &str) -> Coordinates {
    let key = destination.to_lowercase();
    CITY_COORDINATES
        .iter()
        .find(|(city, _, _)| *city == key)
        .map(|(_, lat, lng)| Coordinates::new(*lat, *lng))
        .unwrap_or(DEFAULT_COORDINATES)
}
