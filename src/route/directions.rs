//! Google Maps Directions API client
//!
//! Fetches driving routes over an ordered address list, with the first
//! address as origin and every other address sent as a waypoint (the last
//! one doubles as the destination, so the optimizer is free to reorder it
//! too). Raw response bodies are cached on disk and replayed on later runs
//! with the same request.

use std::fmt::Write as _;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{RouteProvider, RouteRequest, RouteResult};
use crate::cache::CacheManager;

/// Base URL for the Directions API
const DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Errors that can occur when fetching a route
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse the response body
    #[error("Failed to parse Directions response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The API reported a routing failure (bad address, quota, etc.)
    #[error("Directions API error: {0}")]
    ApiError(String),

    /// The API reported success but returned no routes
    #[error("Directions response contained no routes")]
    NoRoutes,

    /// The request carried no addresses at all
    #[error("Route request contains no addresses")]
    EmptyRequest,
}

/// Response envelope from the Directions API
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<ApiRoute>,
    #[serde(default)]
    geocoded_waypoints: Vec<GeocodedWaypoint>,
    error_message: Option<String>,
}

/// A single route alternative
#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
    waypoint_order: Option<Vec<usize>>,
}

/// One leg of a route, between two consecutive stops
#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiValue,
    duration: ApiValue,
}

/// Directions API value objects carry a display text and a numeric value;
/// only the numeric value (meters or seconds) is used here
#[derive(Debug, Deserialize)]
struct ApiValue {
    value: u64,
}

/// Geocoding outcome for one input address
#[derive(Debug, Deserialize)]
struct GeocodedWaypoint {
    geocoder_status: Option<String>,
}

/// Client for fetching routes from the Directions API
///
/// The API key is supplied at construction; the client never reads the
/// environment itself. When a cache manager is present, responses are
/// served from disk while fresh and stored after each successful call.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    client: Client,
    api_key: String,
    cache: Option<CacheManager>,
    cache_ttl_days: i64,
}

impl DirectionsClient {
    /// Creates a new client with the given API key and optional cache
    pub fn new(api_key: impl Into<String>, cache: Option<CacheManager>, cache_ttl_days: i64) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            cache,
            cache_ttl_days,
        }
    }

    /// Builds the query string parameters for a request.
    ///
    /// Every non-origin address goes into `waypoints`, `|`-separated and
    /// prefixed with `optimize:true` when optimization is requested, with
    /// the last address repeated as the destination.
    fn query_params(&self, request: &RouteRequest) -> Vec<(&'static str, String)> {
        let origin = request.addresses.first().cloned().unwrap_or_default();
        let destination = request
            .addresses
            .last()
            .cloned()
            .unwrap_or_default();

        let mut waypoints = request.addresses.get(1..).unwrap_or_default().join("|");
        if request.optimize {
            waypoints = format!("optimize:true|{waypoints}");
        }

        vec![
            ("origin", origin),
            ("destination", destination),
            ("waypoints", waypoints),
            ("mode", "driving".to_string()),
            ("key", self.api_key.clone()),
        ]
    }
}

impl RouteProvider for DirectionsClient {
    /// Fetches a route, consulting the cache before going to the network.
    ///
    /// Cache read and write failures are silently treated as a miss and a
    /// no-op respectively, so a broken cache degrades to always-fetch.
    async fn fetch(&self, request: &RouteRequest) -> Result<RouteResult, ServiceError> {
        if request.addresses.is_empty() {
            return Err(ServiceError::EmptyRequest);
        }

        let key = request.cache_key();

        if let Some(ref cache) = self.cache {
            if let Some(body) = cache.get(&key) {
                println!("  Using cached response");
                return parse_body(&body, request);
            }
        }

        println!("  Calling the Directions API...");
        let response = self
            .client
            .get(DIRECTIONS_BASE_URL)
            .query(&self.query_params(request))
            .send()
            .await?;
        let body = response.text().await?;

        let result = parse_body(&body, request)?;

        // Only successfully parsed responses are worth replaying later
        if let Some(ref cache) = self.cache {
            let _ = cache.put(&key, &body, self.cache_ttl_days);
        }

        Ok(result)
    }
}

/// Parses a raw Directions response body into a `RouteResult`.
///
/// Distance and duration are summed across legs; when the request asked for
/// optimization, the reported `waypoint_order` is applied to reconstruct the
/// traveled address sequence.
fn parse_body(body: &str, request: &RouteRequest) -> Result<RouteResult, ServiceError> {
    let data: DirectionsResponse = serde_json::from_str(body)?;

    if data.status != "OK" {
        return Err(ServiceError::ApiError(describe_failure(&data, &request.addresses)));
    }

    let route = data.routes.first().ok_or(ServiceError::NoRoutes)?;

    let distance_m = route.legs.iter().map(|leg| leg.distance.value).sum();
    let duration_s = route.legs.iter().map(|leg| leg.duration.value).sum();

    let waypoint_order = if request.optimize {
        route.waypoint_order.clone()
    } else {
        None
    };

    let origin = request
        .addresses
        .first()
        .cloned()
        .ok_or(ServiceError::EmptyRequest)?;
    let waypoints = request.addresses.get(1..).unwrap_or_default();

    let mut addresses = Vec::with_capacity(request.addresses.len());
    addresses.push(origin);
    match &waypoint_order {
        Some(order) => {
            for &idx in order {
                if let Some(addr) = waypoints.get(idx) {
                    addresses.push(addr.clone());
                }
            }
        }
        None => addresses.extend(waypoints.iter().cloned()),
    }

    Ok(RouteResult {
        addresses,
        distance_m,
        duration_s,
        waypoint_order,
    })
}

/// Builds a diagnostic message for a non-OK API status, naming any input
/// address the geocoder could not resolve
fn describe_failure(data: &DirectionsResponse, addresses: &[String]) -> String {
    let mut message = data.status.clone();

    let failed: Vec<String> = data
        .geocoded_waypoints
        .iter()
        .enumerate()
        .filter(|(_, wp)| wp.geocoder_status.as_deref() != Some("OK"))
        .filter_map(|(i, wp)| {
            addresses.get(i).map(|addr| {
                format!(
                    "  - Address {}: {} (geocoder status: {})",
                    i + 1,
                    addr,
                    wp.geocoder_status.as_deref().unwrap_or("UNKNOWN")
                )
            })
        })
        .collect();

    if !failed.is_empty() {
        let _ = write!(message, "\nUnresolved addresses:\n{}", failed.join("\n"));
    }

    if let Some(ref api_message) = data.error_message {
        let _ = write!(message, "\nAPI message: {api_message}");
    }

    message
}
