//! Human-readable route printing.  All rounding happens here.

use std::fmt::Write as _;

use rail_core::WeightKey;
use rail_network::Route;

pub fn km(meters: f64) -> String {
    format!("{:.2} km", meters / 1_000.0)
}

pub fn minutes(seconds: f64) -> String {
    format!("{:.1} min", seconds / 60.0)
}

/// `"5 h 37 min"` style duration, rounded to the nearest minute.
pub fn hours_minutes(seconds: f64) -> String {
    let total = (seconds / 60.0).round() as u64;
    match (total / 60, total % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

fn optimised_for(weight: WeightKey) -> &'static str {
    match weight {
        WeightKey::Length     => "shortest distance",
        WeightKey::TravelTime => "shortest travel time",
    }
}

/// Summary block plus numbered turn-by-turn directions.
pub fn render_route(route: &Route, from: &str, to: &str, weight: WeightKey) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== ROUTE SUMMARY =====");
    let _ = writeln!(out, "From: {from}");
    let _ = writeln!(out, "To:   {to}");
    let _ = writeln!(out, "Optimised for: {}", optimised_for(weight));
    let _ = writeln!(out, "Total distance: {}", km(route.total_distance_m));
    let _ = writeln!(
        out,
        "Estimated time: {} ({})",
        minutes(route.total_time_s),
        hours_minutes(route.total_time_s)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "===== DIRECTIONS =====");
    if route.is_trivial() {
        let _ = writeln!(out, "You are already at {to}.");
    }
    for (i, seg) in route.segments.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. Continue on {} for {} ({})",
            i + 1,
            seg.name,
            km(seg.length_m),
            minutes(seg.travel_time_s)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use rail_core::{NodeId, WeightKey};
    use rail_network::{assemble_route, build_network, Topology};

    use super::*;

    #[test]
    fn unit_formatting() {
        assert_eq!(km(360_000.0), "360.00 km");
        assert_eq!(minutes(16_200.0), "270.0 min");
        assert_eq!(hours_minutes(16_200.0), "4 h 30 min");
        assert_eq!(hours_minutes(3_600.0), "1 h");
        assert_eq!(hours_minutes(59.0), "1 min");
    }

    #[test]
    fn renders_directions() {
        let topo = Topology::from_tables(
            &[("São Paulo", -23.5505, -46.6333), ("Rio de Janeiro", -22.9068, -43.1729)],
            &[("São Paulo", "Rio de Janeiro", 360.0)],
        );
        let net = build_network(&topo).unwrap();
        let route = assemble_route(&net, &[NodeId(0), NodeId(1)]).unwrap();
        let text = render_route(&route, "São Paulo", "Rio de Janeiro", WeightKey::Length);
        assert!(text.contains("Total distance: 360.00 km"));
        assert!(text.contains("1. Continue on Railroad São Paulo-Rio de Janeiro for 360.00 km (270.0 min)"));
    }
}
