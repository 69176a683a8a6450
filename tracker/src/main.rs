//! Command line flight lookup

use anyhow::{anyhow, Context};
use clap::Parser;
use flight_tracker::flights::{validate_flight_code, ScheduleFormatter};
use flight_tracker::position::parse_timestamp;
use flight_tracker::report::render_flight;
use flight_tracker::resolver::GeminiClient;
use flight_tracker::*;
use futures::future::join_all;
use log::info;

/// Look up a flight and estimate where it is now.
#[derive(Debug, Parser)]
#[command(name = "flight-tracker", version, about)]
struct Cli {
    /// Flight code, e.g. TK900, UAE95, VOE2HV
    flight_code: String,

    /// Estimate positions at this RFC 3339 instant instead of now
    #[arg(long)]
    now: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| anyhow!("Failed to load configuration from environment: {}", e))?;

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()).await {
        log::error!("(main) {}", e);
    }

    info!("(main) Loaded config.");

    let code = validate_flight_code(&cli.flight_code)?;
    let now = match cli.now.as_deref() {
        Some(value) => parse_timestamp(value)
            .ok_or_else(|| anyhow!("Invalid --now timestamp: {}", value))?,
        None => chrono::Utc::now(),
    };
    let formatter = ScheduleFormatter::from_config(&config).map_err(|e| anyhow!(e))?;

    let flights = FlightDataClient::from_config(&config)
        .flights_by_iata(&code)
        .await
        .with_context(|| format!("Could not retrieve flight {}", code))?;

    if flights.is_empty() {
        println!("No flights found with code {}.", code);
        log::logger().flush();
        return Ok(());
    }

    info!("(main) {} flight(s) found for {}.", flights.len(), code);

    // every flight gets its own tracker, like independent rows of a view
    let resolver = CoordinateResolver::with_static_table(GeminiClient::from_config(&config));
    let lookups = flights.iter().map(|flight| {
        let tracker = FlightTracker::new(resolver.clone());
        async move {
            let request = tracker.begin();
            tracker.track_at(request, flight, now).await
        }
    });
    let outcomes = join_all(lookups).await;

    for (flight, outcome) in flights.iter().zip(outcomes.iter()) {
        println!("{}", render_flight(flight, outcome, &formatter));
    }

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
