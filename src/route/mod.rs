//! Route domain types for the route comparison tool
//!
//! This module contains the request/result types shared by the Directions
//! client, the metrics calculator, and the report renderer, plus the
//! `RouteProvider` seam that lets tests substitute canned routes for the
//! real API.

pub mod directions;
pub mod metrics;

pub use directions::{DirectionsClient, ServiceError};
pub use metrics::{MetricsError, RouteMetrics};

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::cache::cache_key;

/// A routing request: an ordered address list plus the optimize flag
///
/// The first address is the origin; the remaining addresses are waypoints
/// the external service may reorder when `optimize` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Addresses in the order the user supplied them
    pub addresses: Vec<String>,
    /// Whether the service should reorder waypoints for minimum travel
    pub optimize: bool,
}

impl RouteRequest {
    pub fn new(addresses: Vec<String>, optimize: bool) -> Self {
        Self { addresses, optimize }
    }

    /// Deterministic cache key for this request
    pub fn cache_key(&self) -> String {
        cache_key(&self.addresses, self.optimize)
    }
}

/// A routed journey as reported by the external service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Addresses in the order actually traveled
    pub addresses: Vec<String>,
    /// Total driving distance in meters
    pub distance_m: u64,
    /// Total driving time in seconds
    pub duration_s: u64,
    /// Waypoint permutation applied by the optimizer, if one was requested
    pub waypoint_order: Option<Vec<usize>>,
}

impl RouteResult {
    /// Total distance in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance_m as f64 / 1000.0
    }
}

/// Capability of turning a `RouteRequest` into a `RouteResult`.
///
/// `DirectionsClient` is the production implementation; tests supply stubs
/// with canned results so no network access is needed.
pub trait RouteProvider {
    fn fetch(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, ServiceError>>;
}

/// Fetches the same address list twice: once in input order, once optimized.
///
/// The two calls are sequential; the second is not issued if the first
/// fails. Returns `(original, optimized)`.
pub async fn compare_routes<P: RouteProvider>(
    provider: &P,
    addresses: &[String],
) -> Result<(RouteResult, RouteResult), ServiceError> {
    println!("Calculating original route (input order)...");
    let original = provider
        .fetch(&RouteRequest::new(addresses.to_vec(), false))
        .await?;

    println!("Calculating optimized route...");
    let optimized = provider
        .fetch(&RouteRequest::new(addresses.to_vec(), true))
        .await?;

    Ok((original, optimized))
}
