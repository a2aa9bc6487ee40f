use crate::{
    config::{FallbackPolicy, GatewayConfig, DEFAULT_PLACES_BASE_URL, DEFAULT_WEATHER_BASE_URL},
    extract::extract,
    gateway::{GoogleMapsGateway, OfflineGateway, PlacesGateway},
    schemas::{parse_trip_request_str, trip_request_schema},
    TripPlanner, TripRequest,
};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::{rngs::StdRng, SeedableRng};
use std::{env, time::Duration};
use tracing::{info, warn};

fn command() -> Command {
    Command::new("trip-guru")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a one-line trip description into a day-by-day travel plan")
        .arg(
            Arg::new("prompt")
                .help("Free-text trip description, e.g. \"5 days in Manali from Delhi by bus\"")
                .index(1)
                .required_unless_present_any(["request", "schema"])
                .conflicts_with("request"),
        )
        .arg(
            Arg::new("request")
                .short('r')
                .long("request")
                .value_name("FILE")
                .help("Read a structured TripRequest from a JSON file instead of a prompt"),
        )
        .arg(
            Arg::new("extract-only")
                .long("extract-only")
                .action(ArgAction::SetTrue)
                .help("Print the extracted request as JSON and exit"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .action(ArgAction::SetTrue)
                .help("Print the TripRequest JSON schema and exit"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the plan as JSON instead of a text report"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Seed for itinerary shuffling, for repeatable output"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .action(ArgAction::SetTrue)
                .help("Skip the mapping service and plan from mock data"),
        )
        .arg(
            Arg::new("per-source-fallback")
                .long("per-source-fallback")
                .action(ArgAction::SetTrue)
                .help("Replace only the lookups that failed instead of all of them"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Google Maps API key (or set GOOGLE_MAPS_API_KEY env var)"),
        )
        .arg(
            Arg::new("places-url")
                .long("places-url")
                .value_name("URL")
                .help("Google Maps base URL (or set PLACES_BASE_URL env var)"),
        )
        .arg(
            Arg::new("weather-url")
                .long("weather-url")
                .value_name("URL")
                .help("Open-Meteo base URL (or set WEATHER_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .default_value("30")
                .help("Per-request timeout in seconds"),
        )
}

/// Gateway settings from flags, then environment. `None` when no key is available.
fn gateway_config(matches: &ArgMatches) -> Option<GatewayConfig> {
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GOOGLE_MAPS_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())?;

    let places_url = matches
        .get_one::<String>("places-url")
        .cloned()
        .or_else(|| env::var("PLACES_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string());
    let weather_url = matches
        .get_one::<String>("weather-url")
        .cloned()
        .or_else(|| env::var("WEATHER_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(30);

    Some(
        GatewayConfig::new(api_key)
            .with_places_base_url(places_url)
            .with_weather_base_url(weather_url)
            .with_timeout(Duration::from_secs(timeout)),
    )
}

fn load_request(matches: &ArgMatches) -> anyhow::Result<TripRequest> {
    if let Some(path) = matches.get_one::<String>("request") {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {path}"))?;
        let request = parse_trip_request_str(&text)
            .with_context(|| format!("invalid trip request in {path}"))?;
        return Ok(request);
    }

    let prompt = matches
        .get_one::<String>("prompt")
        .context("a trip description or --request FILE is required")?;
    info!("Extracting trip details from prompt: {}", prompt);
    Ok(extract(prompt))
}

fn select_gateway(matches: &ArgMatches) -> anyhow::Result<Box<dyn PlacesGateway>> {
    if matches.get_flag("offline") {
        info!("Offline mode, planning from mock data");
        return Ok(Box::new(OfflineGateway));
    }

    match gateway_config(matches) {
        Some(config) => {
            info!("Places base URL: {}", config.places_base_url);
            Ok(Box::new(GoogleMapsGateway::new(config)?))
        }
        None => {
            warn!("No Google Maps API key configured, planning from mock data");
            Ok(Box::new(OfflineGateway))
        }
    }
}

/// CLI entry point for the trip-guru tool
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();

    if matches.get_flag("schema") {
        println!(
            "{}",
            serde_json::to_string_pretty(trip_request_schema().schema_json())?
        );
        return Ok(());
    }

    let request = load_request(&matches)?;

    if matches.get_flag("extract-only") {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let fallback = if matches.get_flag("per-source-fallback") {
        FallbackPolicy::PerSource
    } else {
        FallbackPolicy::AllOrNothing
    };

    let planner = TripPlanner::new(select_gateway(&matches)?).with_fallback(fallback);
    let plan = planner.plan(&request, &mut rng).await;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("\n{}", plan.summary());
    }

    Ok(())
}
