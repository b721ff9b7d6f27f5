//! Report rendering for the route comparison
//!
//! Pure formatting: given the original-order and optimized routes with
//! their metrics, produce the full text report with a savings section and
//! a shareable Google Maps link for the optimized route.
//!
//! Displayed figures use `{:.2}` (distances, liters, costs) and `{:.1}`
//! (percentages); durations are rendered as `HH:MM`.

use std::fmt::Write as _;

use crate::route::{RouteMetrics, RouteResult};

/// Width of the section separator lines
const RULE_WIDTH: usize = 60;

/// Renders the full comparison report as a single string
pub fn render(
    original: &RouteResult,
    original_metrics: &RouteMetrics,
    optimized: &RouteResult,
    optimized_metrics: &RouteMetrics,
) -> String {
    let mut out = String::new();

    render_route_section(&mut out, "ORIGINAL ROUTE (Input Order)", original, original_metrics);
    render_route_section(&mut out, "OPTIMIZED ROUTE (Google Maps Optimized)", optimized, optimized_metrics);
    render_savings_section(&mut out, original_metrics, optimized_metrics);

    if let Some(url) = maps_url(&optimized.addresses) {
        rule(&mut out);
        let _ = writeln!(out, "GOOGLE MAPS LINK (Optimized Route)");
        rule(&mut out);
        let _ = writeln!(out, "{url}");
        rule(&mut out);
    }

    out
}

/// Writes one route block: heading, numbered stops, and metrics
fn render_route_section(out: &mut String, heading: &str, route: &RouteResult, metrics: &RouteMetrics) {
    rule(out);
    let _ = writeln!(out, "{heading}");
    rule(out);

    for (i, address) in route.addresses.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, address);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total Distance:      {:.2} km", metrics.distance_km);
    let _ = writeln!(out, "Total Time:          {}", format_duration(metrics.duration_s));
    let _ = writeln!(out, "Fuel Consumption:    {:.2} L", metrics.fuel_liters);
    let _ = writeln!(out, "Estimated Fuel Cost: €{:.2}", metrics.fuel_cost);
    let _ = writeln!(out);
}

/// Writes the savings block comparing original against optimized
fn render_savings_section(out: &mut String, original: &RouteMetrics, optimized: &RouteMetrics) {
    rule(out);
    let _ = writeln!(out, "SAVINGS");
    rule(out);

    let distance_saved = original.distance_km - optimized.distance_km;
    let time_saved = original.duration_s as i64 - optimized.duration_s as i64;
    let cost_saved = original.fuel_cost - optimized.fuel_cost;

    let _ = writeln!(
        out,
        "Distance Saved:      {:.2} km ({:.1}%)",
        distance_saved,
        percent_saved(original.distance_km, distance_saved)
    );
    let _ = writeln!(
        out,
        "Time Saved:          {} ({})",
        format_duration(time_saved.unsigned_abs()),
        if time_saved > 0 { "saved" } else { "added" }
    );
    let _ = writeln!(
        out,
        "Fuel Cost Saved:     €{:.2} ({:.1}%)",
        cost_saved,
        percent_saved(original.fuel_cost, cost_saved)
    );
    let _ = writeln!(out);
}

/// Writes a separator line
fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

/// Formats a duration in seconds as `HH:MM`
fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Percentage of `original` represented by `saved`; 0 when `original` is 0
fn percent_saved(original: f64, saved: f64) -> f64 {
    if original == 0.0 {
        0.0
    } else {
        saved / original * 100.0
    }
}

/// Builds a shareable Google Maps directions URL for a traveled route.
///
/// Returns `None` for fewer than two addresses. Addresses are
/// percent-encoded; intermediate stops go into the `waypoints` parameter.
pub fn maps_url(addresses: &[String]) -> Option<String> {
    if addresses.len() < 2 {
        return None;
    }

    let origin = urlencoding::encode(&addresses[0]);
    let destination = urlencoding::encode(addresses.last()?);

    let mut url = format!(
        "https://www.google.com/maps/dir/?api=1&origin={origin}&destination={destination}&travelmode=driving"
    );

    if addresses.len() > 2 {
        let waypoints: Vec<String> = addresses[1..addresses.len() - 1]
            .iter()
            .map(|addr| urlencoding::encode(addr).into_owned())
            .collect();
        let _ = write!(url, "&waypoints={}", waypoints.join("%7C"));
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::metrics;

    fn addrs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn summary(addresses: &[&str], distance_m: u64, duration_s: u64) -> (RouteResult, RouteMetrics) {
        let result = RouteResult {
            addresses: addrs(addresses),
            distance_m,
            duration_s,
            waypoint_order: None,
        };
        let m = metrics::compute(&result, 8.5, 1.50).unwrap();
        (result, m)
    }

    #[test]
    fn test_format_duration_pads_hours_and_minutes() {
        assert_eq!(format_duration(4_500), "01:15");
        assert_eq!(format_duration(3_120), "00:52");
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(36_600), "10:10");
    }

    #[test]
    fn test_percent_saved_reference_figures() {
        // 25.40 -> 18.60 km saves 6.80 km, 26.8%
        let value = percent_saved(25.40, 25.40 - 18.60);
        assert_eq!(format!("{value:.1}"), "26.8");
    }

    #[test]
    fn test_percent_saved_guards_zero_original() {
        assert_eq!(percent_saved(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_report_lists_both_routes_in_order() {
        let (orig, orig_m) = summary(&["First St", "Second St", "Third St"], 25_400, 4_500);
        let (opt, opt_m) = summary(&["First St", "Third St", "Second St"], 18_600, 3_120);

        let report = render(&orig, &orig_m, &opt, &opt_m);

        assert!(report.contains("ORIGINAL ROUTE (Input Order)"));
        assert!(report.contains("OPTIMIZED ROUTE (Google Maps Optimized)"));
        assert!(report.contains("  1. First St"));
        assert!(report.contains("  2. Second St"));
        assert!(report.contains("  2. Third St"));
    }

    #[test]
    fn test_report_shows_reference_metrics_and_savings() {
        let (orig, orig_m) = summary(&["A", "B"], 25_400, 4_500);
        let (opt, opt_m) = summary(&["A", "B"], 18_600, 3_120);

        let report = render(&orig, &orig_m, &opt, &opt_m);

        assert!(report.contains("Total Distance:      25.40 km"));
        assert!(report.contains("Total Time:          01:15"));
        assert!(report.contains("Fuel Consumption:    2.16 L"));
        assert!(report.contains("Estimated Fuel Cost: €3.24"));

        assert!(report.contains("Total Distance:      18.60 km"));
        assert!(report.contains("Total Time:          00:52"));
        assert!(report.contains("Fuel Consumption:    1.58 L"));
        assert!(report.contains("Estimated Fuel Cost: €2.37"));

        assert!(report.contains("Distance Saved:      6.80 km (26.8%)"));
        assert!(report.contains("Time Saved:          00:23 (saved)"));
        assert!(report.contains("Fuel Cost Saved:     €0.87 (26.8%)"));
    }

    #[test]
    fn test_report_marks_added_time_when_optimized_is_slower() {
        let (orig, orig_m) = summary(&["A", "B"], 10_000, 1_200);
        let (opt, opt_m) = summary(&["A", "B"], 9_000, 1_500);

        let report = render(&orig, &orig_m, &opt, &opt_m);

        assert!(report.contains("Time Saved:          00:05 (added)"));
    }

    #[test]
    fn test_report_labels_zero_time_delta_as_added() {
        let (orig, orig_m) = summary(&["A", "B"], 10_000, 1_200);
        let (opt, opt_m) = summary(&["A", "B"], 9_000, 1_200);

        let report = render(&orig, &orig_m, &opt, &opt_m);

        assert!(report.contains("Time Saved:          00:00 (added)"));
    }

    #[test]
    fn test_report_handles_zero_distance_routes() {
        let (orig, orig_m) = summary(&["A", "B"], 0, 0);
        let (opt, opt_m) = summary(&["A", "B"], 0, 0);

        let report = render(&orig, &orig_m, &opt, &opt_m);

        assert!(report.contains("Distance Saved:      0.00 km (0.0%)"));
        assert!(report.contains("Fuel Cost Saved:     €0.00 (0.0%)"));
    }

    #[test]
    fn test_maps_url_encodes_addresses() {
        let url = maps_url(&addrs(&[
            "Calle de Hortaleza 63, 28004 Madrid",
            "Calle del Barquillo 15, 28004 Madrid",
            "Calle de Goya 25, 28001 Madrid",
        ]))
        .expect("Three addresses should produce a link");

        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&origin="));
        assert!(url.contains("Calle%20de%20Hortaleza%2063%2C%2028004%20Madrid"));
        assert!(url.contains("&destination=Calle%20de%20Goya%2025%2C%2028001%20Madrid"));
        assert!(url.contains("&waypoints=Calle%20del%20Barquillo%2015%2C%2028004%20Madrid"));
        assert!(url.contains("travelmode=driving"));
    }

    #[test]
    fn test_maps_url_omits_waypoints_for_two_addresses() {
        let url = maps_url(&addrs(&["A", "B"])).unwrap();
        assert!(!url.contains("waypoints"));
    }

    #[test]
    fn test_maps_url_requires_two_addresses() {
        assert!(maps_url(&addrs(&["only one"])).is_none());
        assert!(maps_url(&[]).is_none());
    }
}
