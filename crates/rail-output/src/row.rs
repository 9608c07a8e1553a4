//! Flat row types written by the CSV backend.

use serde::Serialize;

use rail_core::WeightKey;
use rail_network::{Route, Segment};

/// One segment of one exported route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    /// Index of the route within the output file, from 0.
    pub route:         u32,
    /// Position of the segment within its route, from 1.
    pub step:          u32,
    pub from_id:       u32,
    pub to_id:         u32,
    pub from_name:     String,
    pub to_name:       String,
    pub from_lat:      f64,
    pub from_lon:      f64,
    pub to_lat:        f64,
    pub to_lon:        f64,
    pub name:          String,
    pub length_m:      f64,
    pub travel_time_s: f64,
}

impl SegmentRow {
    pub fn new(route: u32, step: u32, seg: &Segment) -> Self {
        Self {
            route,
            step,
            from_id:       seg.from.0,
            to_id:         seg.to.0,
            from_name:     seg.from_name.clone(),
            to_name:       seg.to_name.clone(),
            from_lat:      seg.from_pos.lat,
            from_lon:      seg.from_pos.lon,
            to_lat:        seg.to_pos.lat,
            to_lon:        seg.to_pos.lon,
            name:          seg.name.clone(),
            length_m:      seg.length_m,
            travel_time_s: seg.travel_time_s,
        }
    }
}

/// Totals for one exported route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummaryRow {
    pub route:            u32,
    pub source_id:        u32,
    pub target_id:        u32,
    pub weight:           WeightKey,
    pub hops:             u32,
    pub total_distance_m: f64,
    pub total_time_s:     f64,
}

impl RouteSummaryRow {
    pub fn new(route: u32, r: &Route, weight: WeightKey) -> Self {
        Self {
            route,
            source_id:        r.source().0,
            target_id:        r.target().0,
            weight,
            hops:             r.segments.len() as u32,
            total_distance_m: r.total_distance_m,
            total_time_s:     r.total_time_s,
        }
    }
}
