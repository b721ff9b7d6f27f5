//! Fuel and time metrics derived from a routed journey
//!
//! Pure arithmetic over a `RouteResult` and two configuration constants:
//! `fuel_liters = km * rate / 100` and `fuel_cost = liters * price`.

use thiserror::Error;

use super::RouteResult;

/// Errors for invalid metric inputs
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Fuel consumption rate is negative or not a number
    #[error("Fuel consumption rate must be a non-negative number (got {0})")]
    InvalidFuelRate(f64),

    /// Fuel price is negative or not a number
    #[error("Fuel price must be a non-negative number (got {0})")]
    InvalidFuelPrice(f64),
}

/// Derived metrics for a single route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    /// Total distance in kilometers
    pub distance_km: f64,
    /// Total duration in seconds
    pub duration_s: u64,
    /// Fuel volume consumed over the route, in liters
    pub fuel_liters: f64,
    /// Cost of that fuel, in the configured currency
    pub fuel_cost: f64,
}

/// Computes fuel metrics for a route.
///
/// `fuel_rate_l_per_100km` is consumption in liters per 100 km;
/// `fuel_price_per_l` is the price of one liter. Both must be finite and
/// non-negative.
pub fn compute(
    result: &RouteResult,
    fuel_rate_l_per_100km: f64,
    fuel_price_per_l: f64,
) -> Result<RouteMetrics, MetricsError> {
    if !fuel_rate_l_per_100km.is_finite() || fuel_rate_l_per_100km < 0.0 {
        return Err(MetricsError::InvalidFuelRate(fuel_rate_l_per_100km));
    }
    if !fuel_price_per_l.is_finite() || fuel_price_per_l < 0.0 {
        return Err(MetricsError::InvalidFuelPrice(fuel_price_per_l));
    }

    let distance_km = result.distance_km();
    let fuel_liters = distance_km * fuel_rate_l_per_100km / 100.0;
    let fuel_cost = fuel_liters * fuel_price_per_l;

    Ok(RouteMetrics {
        distance_km,
        duration_s: result.duration_s,
        fuel_liters,
        fuel_cost,
    })
}
