use mockito::{Matcher, Server, ServerGuard};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use std::time::Duration;
use trip_guru_rs::{
    Accommodation, Coordinates, DataSource, DayBucket, FallbackPolicy, GatewayConfig,
    GoogleMapsGateway, PlacesGateway, PlannerError, TravelMode, TravelerBucket, TripPlanner,
    TripRequest, TripType,
};

const GEOCODE: &str = "/maps/api/geocode/json";
const NEARBY: &str = "/maps/api/place/nearbysearch/json";
const FORECAST: &str = "/v1/forecast";

fn gateway_for(server: &ServerGuard) -> GoogleMapsGateway {
    let config = GatewayConfig::new("test-key")
        .with_places_base_url(server.url())
        .with_weather_base_url(server.url())
        .with_timeout(Duration::from_secs(5));
    GoogleMapsGateway::new(config).unwrap()
}

fn goa_request() -> TripRequest {
    TripRequest {
        starting_point: "Mumbai".to_string(),
        destination: "Goa".to_string(),
        days: DayBucket::ThreeToFour,
        budget: 40_000,
        travelers: TravelerBucket::Couple,
        travel_mode: TravelMode::Train,
        accommodation: Accommodation::Resort,
        trip_type: TripType::Relaxation,
        preferences: String::new(),
    }
}

fn place_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "place_id": id,
        "name": name,
        "vicinity": format!("{name} Road, Goa"),
        "rating": 4.5,
        "price_level": 2,
        "types": ["tourist_attraction", "point_of_interest"],
        "geometry": { "location": { "lat": 15.55, "lng": 73.75 } }
    })
}

async fn mock_geocode(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", GEOCODE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("address".into(), "Goa".into()),
            Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "OK",
                "results": [{ "geometry": { "location": { "lat": 15.2993, "lng": 74.124 } } }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_nearby(
    server: &mut ServerGuard,
    place_type: &str,
    body: serde_json::Value,
) -> mockito::Mock {
    server
        .mock("GET", NEARBY)
        .match_query(Matcher::UrlEncoded("type".into(), place_type.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

async fn mock_forecast(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", FORECAST)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "latitude": 15.3,
                "longitude": 74.12,
                "current": {
                    "temperature_2m": 29.5,
                    "relative_humidity_2m": 78,
                    "wind_speed_10m": 12.4,
                    "weather_code": 61
                }
            })
            .to_string(),
        )
        .create_async()
        .await
}

#[tokio::test]
async fn test_geocode_returns_first_result() {
    let mut server = Server::new_async().await;
    let mock = mock_geocode(&mut server).await;

    let gateway = gateway_for(&server);
    let location = gateway.geocode("Goa").await.unwrap();

    assert_eq!(location, Some(Coordinates::new(15.2993, 74.124)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_zero_results_is_not_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", GEOCODE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "status": "ZERO_RESULTS", "results": [] }).to_string())
        .create_async()
        .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "ZERO_RESULTS", "results": [] }),
    )
    .await;

    let gateway = gateway_for(&server);
    assert_eq!(gateway.geocode("Nowhere").await.unwrap(), None);
    let restaurants = gateway
        .nearby_restaurants(Coordinates::new(0.0, 0.0))
        .await
        .unwrap();
    assert!(restaurants.is_empty());
}

#[tokio::test]
async fn test_quota_status_maps_to_quota_error() {
    let mut server = Server::new_async().await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({
            "status": "OVER_QUERY_LIMIT",
            "error_message": "You have exceeded your daily request quota",
            "results": []
        }),
    )
    .await;

    let gateway = gateway_for(&server);
    let err = gateway
        .nearby_attractions(Coordinates::new(15.3, 74.1))
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::Quota(_)));
    assert!(err.is_retryable());
    assert_eq!(err.error_code(), "QUOTA_EXCEEDED");
}

#[tokio::test]
async fn test_http_failure_is_a_gateway_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", GEOCODE)
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.geocode("Goa").await.unwrap_err();
    assert!(matches!(err, PlannerError::Gateway(_)));
}

#[tokio::test]
async fn test_malformed_body_reports_path() {
    let mut server = Server::new_async().await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({
            "status": "OK",
            "results": [{ "place_id": "x", "name": "Fort", "geometry": { "location": { "lat": "north", "lng": 73.0 } } }]
        }),
    )
    .await;

    let gateway = gateway_for(&server);
    let err = gateway
        .nearby_attractions(Coordinates::new(15.3, 74.1))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("results[0].geometry.location.lat"), "{message}");
}

#[tokio::test]
async fn test_current_weather_from_forecast() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    let forecast = mock_forecast(&mut server).await;

    let gateway = gateway_for(&server);
    let weather = gateway.current_weather("Goa").await.unwrap().unwrap();

    assert_eq!(weather.temperature, 29.5);
    assert_eq!(weather.description, "Rain");
    assert_eq!(weather.icon, "10d");
    forecast.assert_async().await;
}

#[tokio::test]
async fn test_planner_uses_live_data_when_every_lookup_succeeds() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    let attractions: Vec<_> = (0..8)
        .map(|i| place_json(&format!("a{i}"), &format!("Beach {i}")))
        .collect();
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({ "status": "OK", "results": attractions }),
    )
    .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "OK", "results": [place_json("r1", "Fisherman's Wharf")] }),
    )
    .await;
    mock_forecast(&mut server).await;

    let planner = TripPlanner::new(gateway_for(&server));
    let data = planner
        .gather("Goa", &mut StdRng::seed_from_u64(1))
        .await;
    assert_eq!(data.source, DataSource::Live);
    assert_eq!(data.attractions.len(), 6);
    assert_eq!(data.restaurants[0].name, "Fisherman's Wharf");

    let plan = planner
        .plan(&goa_request(), &mut StdRng::seed_from_u64(1))
        .await;
    assert_eq!(plan.source, DataSource::Live);
    assert_eq!(plan.days.len(), 3);
    assert_eq!(plan.days[0].accommodation, "Resort in Goa");
    assert_eq!(plan.weather.unwrap().description, "Rain");
    assert!(plan.days[0].activities[0].title.starts_with("Explore Beach "));
}

#[tokio::test]
async fn test_one_failed_lookup_discards_all_live_data() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({ "status": "OK", "results": [place_json("a1", "Fort Aguada")] }),
    )
    .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "OVER_QUERY_LIMIT", "results": [] }),
    )
    .await;
    mock_forecast(&mut server).await;

    let planner = TripPlanner::new(gateway_for(&server));
    let plan = planner
        .plan(&goa_request(), &mut StdRng::seed_from_u64(2))
        .await;

    assert_eq!(plan.source, DataSource::Mock);
    let titles: Vec<&str> = plan
        .days
        .iter()
        .flat_map(|d| d.activities.iter())
        .map(|a| a.title.as_str())
        .collect();
    assert!(!titles.contains(&"Explore Fort Aguada"));
    assert!(titles.contains(&"Explore Baga Beach"));
}

#[tokio::test]
async fn test_per_source_fallback_keeps_live_sources() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({ "status": "OK", "results": [place_json("a1", "Fort Aguada")] }),
    )
    .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "REQUEST_DENIED", "results": [] }),
    )
    .await;
    mock_forecast(&mut server).await;

    let planner =
        TripPlanner::new(gateway_for(&server)).with_fallback(FallbackPolicy::PerSource);
    let data = planner
        .gather("Goa", &mut StdRng::seed_from_u64(3))
        .await;

    assert_eq!(data.source, DataSource::Partial);
    assert_eq!(data.attractions.len(), 1);
    assert_eq!(data.attractions[0].name, "Fort Aguada");
    assert_eq!(data.restaurants[0].name, "Britto's");
    assert_eq!(data.weather.unwrap().description, "Rain");
}

#[tokio::test]
async fn test_geocode_failure_falls_back_to_mock() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", GEOCODE)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "status": "REQUEST_DENIED", "error_message": "bad key" }).to_string())
        .create_async()
        .await;

    let planner = TripPlanner::new(gateway_for(&server));
    let plan = planner
        .plan(&goa_request(), &mut StdRng::seed_from_u64(4))
        .await;

    assert_eq!(plan.source, DataSource::Mock);
    assert_eq!(plan.coordinates, Some(Coordinates::new(15.2993, 74.124)));
    assert!(!plan.days.is_empty());
}

const DIRECTIONS: &str = "/maps/api/directions/json";
const DETAILS: &str = "/maps/api/place/details/json";

async fn mock_directions(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", DIRECTIONS)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("origin".into(), "Mumbai".into()),
            Matcher::UrlEncoded("destination".into(), "Goa".into()),
            Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "OK",
                "routes": [{
                    "summary": "NH66",
                    "legs": [{
                        "distance": { "text": "586 km", "value": 586000 },
                        "duration": { "text": "11 hours 2 mins", "value": 39720 },
                        "steps": [
                            {
                                "html_instructions": "Head <b>south</b> on <b>Marine Dr</b>",
                                "distance": { "text": "1.2 km", "value": 1200 },
                                "duration": { "text": "4 mins", "value": 240 }
                            },
                            {
                                "html_instructions": "Turn <b>left</b><div style=\"font-size:0.9em\">Destination will be on the right</div>",
                                "distance": { "text": "300 m", "value": 300 },
                                "duration": { "text": "1 min", "value": 60 }
                            }
                        ]
                    }]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

#[tokio::test]
async fn test_route_strips_markup_from_steps() {
    let mut server = Server::new_async().await;
    let mock = mock_directions(&mut server).await;

    let gateway = gateway_for(&server);
    let route = gateway.route("Mumbai", "Goa").await.unwrap().unwrap();

    assert_eq!(route.distance, "586 km");
    assert_eq!(route.duration, "11 hours 2 mins");
    assert_eq!(route.steps.len(), 2);
    assert_eq!(route.steps[0].instruction, "Head south on Marine Dr");
    assert_eq!(
        route.steps[1].instruction,
        "Turn left Destination will be on the right"
    );
    assert_eq!(route.steps[1].distance, "300 m");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_route_zero_results_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", DIRECTIONS)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "status": "ZERO_RESULTS", "routes": [] }).to_string())
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    assert_eq!(gateway.route("Mumbai", "Honolulu").await.unwrap(), None);
}

#[tokio::test]
async fn test_not_found_status_is_a_gateway_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", DIRECTIONS)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "status": "NOT_FOUND", "routes": [] }).to_string())
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.route("Atlantis", "Goa").await.unwrap_err();
    assert!(matches!(err, PlannerError::Gateway(_)));
    assert_eq!(err.error_code(), "GATEWAY_ERROR");
}

#[tokio::test]
async fn test_place_details_by_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", DETAILS)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("place_id".into(), "a1".into()),
            Matcher::Regex("fields=".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "status": "OK",
                "result": {
                    "place_id": "a1",
                    "name": "Fort Aguada",
                    "formatted_address": "Candolim, Goa 403515",
                    "rating": 4.4,
                    "types": ["tourist_attraction"],
                    "geometry": { "location": { "lat": 15.49, "lng": 73.77 } },
                    "photos": [{ "photo_reference": "p-1" }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", DETAILS)
        .match_query(Matcher::UrlEncoded("place_id".into(), "missing".into()))
        .with_status(200)
        .with_body(json!({ "status": "OK" }).to_string())
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let place = gateway.place_details("a1").await.unwrap();
    assert_eq!(place.name, "Fort Aguada");
    assert_eq!(place.address, "Candolim, Goa 403515");
    assert_eq!(place.photo_refs, vec!["p-1".to_string()]);

    let err = gateway.place_details("missing").await.unwrap_err();
    assert!(matches!(err, PlannerError::NotFound(_)));
}

#[tokio::test]
async fn test_plan_carries_route_without_affecting_source() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({ "status": "OK", "results": [place_json("a1", "Fort Aguada")] }),
    )
    .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "OK", "results": [place_json("r1", "Britto's")] }),
    )
    .await;
    mock_forecast(&mut server).await;
    mock_directions(&mut server).await;

    let planner = TripPlanner::new(gateway_for(&server));
    let plan = planner
        .plan(&goa_request(), &mut StdRng::seed_from_u64(6))
        .await;

    assert_eq!(plan.source, DataSource::Live);
    let route = plan.route.as_ref().unwrap();
    assert_eq!(route.distance, "586 km");
    assert!(plan
        .summary()
        .contains("Mumbai → Goa: 586 km, 11 hours 2 mins"));
}

#[tokio::test]
async fn test_failed_route_leaves_live_plan_intact() {
    let mut server = Server::new_async().await;
    mock_geocode(&mut server).await;
    mock_nearby(
        &mut server,
        "tourist_attraction",
        json!({ "status": "OK", "results": [place_json("a1", "Fort Aguada")] }),
    )
    .await;
    mock_nearby(
        &mut server,
        "restaurant",
        json!({ "status": "OK", "results": [] }),
    )
    .await;
    mock_forecast(&mut server).await;
    server
        .mock("GET", DIRECTIONS)
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let planner = TripPlanner::new(gateway_for(&server));
    let plan = planner
        .plan(&goa_request(), &mut StdRng::seed_from_u64(7))
        .await;

    assert_eq!(plan.source, DataSource::Live);
    assert!(plan.route.is_none());
    assert_eq!(plan.days[0].activities[0].title, "Explore Fort Aguada");
}
