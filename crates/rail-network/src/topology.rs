//! Named-city topology and the deterministic network builder.
//!
//! A [`Topology`] is the only configuration surface of the network: a list of
//! cities with coordinates and a list of city-pair connections with their
//! track length in kilometres.  [`build_network`] turns it into a
//! [`RailNetwork`], assigning `NodeId`s in city order and `EdgeId`s in
//! connection order.
//!
//! # CSV format
//!
//! Topologies can also be read from two CSV files:
//!
//! ```csv
//! name,lat,lon
//! São Paulo,-23.5505,-46.6333
//! Rio de Janeiro,-22.9068,-43.1729
//! ```
//!
//! ```csv
//! from,to,distance_km
//! São Paulo,Rio de Janeiro,360
//! ```

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use rail_core::{GeoPoint, NodeId};

use crate::network::{RailNetwork, RailNetworkBuilder};
use crate::{NetworkError, NetworkResult};

/// Reference train speed used to derive edge travel times.
pub const REFERENCE_SPEED_KMH: f64 = 80.0;

// ── Input records ─────────────────────────────────────────────────────────────

/// A named city and its position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub lat:  f64,
    pub lon:  f64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), lat, lon }
    }
}

/// A rail connection between two cities, referenced by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connection {
    pub from:        String,
    pub to:          String,
    pub distance_km: f64,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Self {
        Self { from: from.into(), to: to.into(), distance_km }
    }
}

/// Cities plus connections: everything needed to build a network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    pub cities:      Vec<CityRecord>,
    pub connections: Vec<Connection>,
}

impl Topology {
    /// Build a topology from `(name, lat, lon)` and `(from, to, km)` tables.
    pub fn from_tables(cities: &[(&str, f64, f64)], connections: &[(&str, &str, f64)]) -> Self {
        Self {
            cities: cities
                .iter()
                .map(|&(name, lat, lon)| CityRecord::new(name, lat, lon))
                .collect(),
            connections: connections
                .iter()
                .map(|&(from, to, km)| Connection::new(from, to, km))
                .collect(),
        }
    }
}

/// Travel time in seconds for `distance_km` at `speed_kmh`.
#[inline]
pub fn travel_time_s(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh * 3_600.0
}

// ── Build ─────────────────────────────────────────────────────────────────────

/// Build a [`RailNetwork`] from `topology`.
///
/// Each connection becomes one undirected edge named
/// `"Railroad {from}-{to}"` with `length_m = distance_km * 1000` and a travel
/// time at [`REFERENCE_SPEED_KMH`].
///
/// Fails with [`NetworkError::InvalidTopology`] when a connection names an
/// unknown city, joins a city to itself, or has a non-positive distance, and
/// when a city has an out-of-range coordinate.
///
/// Duplicate city names are accepted; connections resolve to the first city
/// with that name.
pub fn build_network(topology: &Topology) -> NetworkResult<RailNetwork> {
    let mut b = RailNetworkBuilder::with_capacity(topology.cities.len(), topology.connections.len());
    let mut by_name: FxHashMap<&str, NodeId> = FxHashMap::default();

    for city in &topology.cities {
        let pos = GeoPoint::new(city.lat, city.lon);
        if !pos.is_valid() {
            return Err(NetworkError::InvalidTopology(format!(
                "city {:?} has invalid coordinate ({}, {})",
                city.name, city.lat, city.lon
            )));
        }
        let id = b.add_node(pos, city.name.as_str());
        if by_name.contains_key(city.name.as_str()) {
            log::warn!("duplicate city name {:?}; connections use the first one", city.name);
        } else {
            by_name.insert(city.name.as_str(), id);
        }
    }

    let lookup = |name: &str| {
        by_name.get(name).copied().ok_or_else(|| {
            NetworkError::InvalidTopology(format!("connection references unknown city {name:?}"))
        })
    };

    let mut seen_pairs: FxHashMap<(NodeId, NodeId), usize> = FxHashMap::default();
    for (i, conn) in topology.connections.iter().enumerate() {
        let a = lookup(&conn.from)?;
        let c = lookup(&conn.to)?;
        if a == c {
            return Err(NetworkError::InvalidTopology(format!(
                "connection {i} joins {:?} to itself",
                conn.from
            )));
        }
        if !conn.distance_km.is_finite() || conn.distance_km <= 0.0 {
            return Err(NetworkError::InvalidTopology(format!(
                "connection {:?}-{:?} has non-positive distance {}",
                conn.from, conn.to, conn.distance_km
            )));
        }

        let key = (a.min(c), a.max(c));
        if let Some(first) = seen_pairs.insert(key, i) {
            log::warn!(
                "connection {i} ({:?}-{:?}) duplicates connection {first}; keeping both",
                conn.from,
                conn.to
            );
        }

        b.add_edge(
            a,
            c,
            conn.distance_km * 1_000.0,
            travel_time_s(conn.distance_km, REFERENCE_SPEED_KMH),
            format!("Railroad {}-{}", conn.from, conn.to),
        )?;
    }

    Ok(b.build())
}

// ── CSV loading ───────────────────────────────────────────────────────────────

/// Load a topology from a city CSV and a connection CSV on disk.
pub fn load_topology_csv(cities: &Path, connections: &Path) -> NetworkResult<Topology> {
    let cities = std::fs::File::open(cities)?;
    let connections = std::fs::File::open(connections)?;
    load_topology_reader(cities, connections)
}

/// Like [`load_topology_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded tables.
pub fn load_topology_reader<C: Read, K: Read>(cities: C, connections: K) -> NetworkResult<Topology> {
    let cities = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(cities)
        .deserialize::<CityRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    let connections = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(connections)
        .deserialize::<Connection>()
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("loaded topology: {} cities, {} connections", cities.len(), connections.len());
    Ok(Topology { cities, connections })
}
