//! Optiroute - compare a delivery route against a Google-optimized one
//!
//! Reads an address list, asks the Google Maps Directions API for the
//! route in input order and with waypoint optimization, and prints a
//! comparison report with estimated fuel savings.

use clap::Parser;

use optiroute::cache::CacheManager;
use optiroute::cli::{Cli, RunConfig};
use optiroute::input;
use optiroute::report;
use optiroute::route::{self, metrics, DirectionsClient};

/// Environment variable holding the Directions API key
const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

#[tokio::main]
async fn main() {
    // Pick up GOOGLE_MAPS_API_KEY from a .env file if one is present
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(cli)?;

    let addresses = input::load_addresses(&config.addresses, &config.input)?;

    println!("Route Optimizer");
    println!();
    println!("Input addresses:");
    for (i, address) in addresses.iter().enumerate() {
        println!("  {}. {}", i + 1, address);
    }
    println!();

    let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
        format!("{API_KEY_VAR} is not set. Export it or add it to a .env file")
    })?;

    let cache = if config.use_cache {
        CacheManager::new()
    } else {
        None
    };

    let client = DirectionsClient::new(api_key, cache, config.cache_ttl_days);
    let (original, optimized) = route::compare_routes(&client, &addresses).await?;

    let original_metrics = metrics::compute(
        &original,
        config.fuel_rate_l_per_100km,
        config.fuel_price_per_l,
    )?;
    let optimized_metrics = metrics::compute(
        &optimized,
        config.fuel_rate_l_per_100km,
        config.fuel_price_per_l,
    )?;

    println!();
    print!(
        "{}",
        report::render(&original, &original_metrics, &optimized, &optimized_metrics)
    );

    Ok(())
}
