//! Command-line interface parsing for the route comparison tool
//!
//! This module handles parsing of CLI arguments using clap and validates
//! the numeric configuration (fuel rate, fuel price, cache TTL) before a
//! run starts.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Default fuel consumption for a small urban delivery truck, L/100km
pub const DEFAULT_FUEL_RATE_L_PER_100KM: f64 = 8.5;

/// Default diesel price per liter
pub const DEFAULT_FUEL_PRICE_PER_L: f64 = 1.50;

/// Default cache entry lifetime in days
pub const DEFAULT_CACHE_TTL_DAYS: i64 = 30;

/// Error types for configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Fuel consumption rate is negative or not a number
    #[error("--fuel-rate must be a non-negative number (got {0})")]
    InvalidFuelRate(f64),

    /// Fuel price is negative or not a number
    #[error("--fuel-price must be a non-negative number (got {0})")]
    InvalidFuelPrice(f64),

    /// Cache TTL is zero or negative
    #[error("--cache-ttl-days must be at least 1 (got {0}); use --no-cache to skip caching")]
    InvalidCacheTtl(i64),
}

/// Compare a delivery route as entered against a Google-optimized ordering
#[derive(Parser, Debug)]
#[command(name = "optiroute")]
#[command(about = "Route comparison with fuel cost estimation")]
#[command(version)]
pub struct Cli {
    /// Addresses to route, first one is the origin
    ///
    /// With no addresses given, the input file is read instead, one
    /// address per line.
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Input file read when no addresses are given on the command line
    #[arg(long, value_name = "FILE", default_value = "input.txt")]
    pub input: PathBuf,

    /// Fuel consumption in liters per 100 km
    #[arg(long, value_name = "L_PER_100KM", default_value_t = DEFAULT_FUEL_RATE_L_PER_100KM)]
    pub fuel_rate: f64,

    /// Fuel price per liter
    #[arg(long, value_name = "PRICE", default_value_t = DEFAULT_FUEL_PRICE_PER_L)]
    pub fuel_price: f64,

    /// How long cached API responses stay valid, in days
    #[arg(long, value_name = "DAYS", default_value_t = DEFAULT_CACHE_TTL_DAYS)]
    pub cache_ttl_days: i64,

    /// Skip the on-disk response cache entirely
    #[arg(long)]
    pub no_cache: bool,
}

/// Validated configuration for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Positional addresses (may be empty, meaning read the input file)
    pub addresses: Vec<String>,
    /// Input file used when no positional addresses were given
    pub input: PathBuf,
    /// Fuel consumption in liters per 100 km
    pub fuel_rate_l_per_100km: f64,
    /// Fuel price per liter
    pub fuel_price_per_l: f64,
    /// Cache entry lifetime in days
    pub cache_ttl_days: i64,
    /// Whether the disk cache is used at all
    pub use_cache: bool,
}

impl RunConfig {
    /// Validates parsed CLI arguments into a run configuration.
    ///
    /// Rates and prices must be finite and non-negative; the cache TTL
    /// must be positive.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if !cli.fuel_rate.is_finite() || cli.fuel_rate < 0.0 {
            return Err(ConfigError::InvalidFuelRate(cli.fuel_rate));
        }
        if !cli.fuel_price.is_finite() || cli.fuel_price < 0.0 {
            return Err(ConfigError::InvalidFuelPrice(cli.fuel_price));
        }
        if cli.cache_ttl_days < 1 {
            return Err(ConfigError::InvalidCacheTtl(cli.cache_ttl_days));
        }

        Ok(RunConfig {
            addresses: cli.addresses,
            input: cli.input,
            fuel_rate_l_per_100km: cli.fuel_rate,
            fuel_price_per_l: cli.fuel_price,
            cache_ttl_days: cli.cache_ttl_days,
            use_cache: !cli.no_cache,
        })
    }
}
