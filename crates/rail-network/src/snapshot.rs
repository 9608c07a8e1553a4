//! Versioned on-disk snapshots of a built [`RailNetwork`].
//!
//! # Format
//!
//! A single JSON document:
//!
//! ```json
//! {
//!   "format": "rail-network-snapshot",
//!   "version": 1,
//!   "nodes": [ { "id": 0, "lat": -23.5505, "lon": -46.6333, "name": "São Paulo" } ],
//!   "edges": [ { "u": 0, "v": 1, "length_m": 360000.0, "travel_time_s": 16200.0,
//!                "name": "Railroad São Paulo-Rio de Janeiro", "kind": "railway" } ]
//! }
//! ```
//!
//! Edge attributes are stored, not recomputed, and floats are written with
//! shortest round-trip formatting, so `load(save(g)) == g` exactly.
//!
//! On load every structural invariant is re-checked (dense unique node ids,
//! existing endpoints, no self-loops, positive finite weights); any failure
//! is reported as [`NetworkError::SnapshotCorrupt`].
//!
//! Files are written to `{path}.tmp` and renamed into place, so an
//! interrupted save leaves the previous snapshot intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rail_core::{GeoPoint, NodeId};

use crate::network::{RailNetwork, RailNetworkBuilder};
use crate::topology::{build_network, Topology};
use crate::{NetworkError, NetworkResult};

/// Value of the `format` field.
pub const SNAPSHOT_FORMAT: &str = "rail-network-snapshot";

/// Current schema version.  Loading a different version is a corrupt snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

// ── Schema ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDoc {
    format:  String,
    version: u32,
    nodes:   Vec<NodeRecord>,
    edges:   Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id:   u32,
    lat:  f64,
    lon:  f64,
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    u:             u32,
    v:             u32,
    length_m:      f64,
    travel_time_s: f64,
    name:          String,
    kind:          String,
}

impl SnapshotDoc {
    fn from_network(network: &RailNetwork) -> Self {
        let nodes = network
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, n)| NodeRecord {
                id:   i as u32,
                lat:  n.pos.lat,
                lon:  n.pos.lon,
                name: n.name.clone(),
            })
            .collect();

        let edges = network
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                u:             e.a.0,
                v:             e.b.0,
                length_m:      e.length_m,
                travel_time_s: e.travel_time_s,
                name:          e.name.clone(),
                kind:          e.kind.clone(),
            })
            .collect();

        Self {
            format: SNAPSHOT_FORMAT.to_owned(),
            version: SNAPSHOT_VERSION,
            nodes,
            edges,
        }
    }

    /// Validate and convert into a network.
    fn into_network(mut self) -> NetworkResult<RailNetwork> {
        if self.format != SNAPSHOT_FORMAT {
            return Err(corrupt(format!("unexpected format tag {:?}", self.format)));
        }
        if self.version != SNAPSHOT_VERSION {
            return Err(corrupt(format!(
                "unsupported version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }

        // Ids must be exactly 0..n with no duplicates.  Records may be stored
        // in any order; sort first so duplicates sit next to each other.
        self.nodes.sort_by_key(|n| n.id);
        for (expected, node) in self.nodes.iter().enumerate() {
            if node.id as usize != expected {
                return Err(if expected > 0 && node.id == self.nodes[expected - 1].id {
                    corrupt(format!("duplicate node id {}", node.id))
                } else {
                    corrupt(format!("node ids are not dense: expected {expected}, found {}", node.id))
                });
            }
        }

        let mut b = RailNetworkBuilder::with_capacity(self.nodes.len(), self.edges.len());
        for n in self.nodes {
            b.add_node(GeoPoint::new(n.lat, n.lon), n.name);
        }

        for (i, e) in self.edges.into_iter().enumerate() {
            for (label, w) in [("length_m", e.length_m), ("travel_time_s", e.travel_time_s)] {
                if !w.is_finite() || w <= 0.0 {
                    return Err(corrupt(format!("edge {i} has non-positive {label} {w}")));
                }
            }
            b.add_edge_with_kind(NodeId(e.u), NodeId(e.v), e.length_m, e.travel_time_s, e.name, e.kind)
                .map_err(|err| corrupt(format!("edge {i}: {err}")))?;
        }

        Ok(b.build())
    }
}

fn corrupt(msg: String) -> NetworkError {
    NetworkError::SnapshotCorrupt(msg)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Serialize `network` as a snapshot document into `writer`.
pub fn write_snapshot<W: Write>(network: &RailNetwork, writer: W) -> NetworkResult<()> {
    let doc = SnapshotDoc::from_network(network);
    serde_json::to_writer_pretty(writer, &doc)
        .map_err(|e| NetworkError::Io(e.into()))
}

/// Read and validate a snapshot document from `reader`.
pub fn read_snapshot<R: Read>(reader: R) -> NetworkResult<RailNetwork> {
    let doc: SnapshotDoc = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            NetworkError::Io(e.into())
        } else {
            corrupt(e.to_string())
        }
    })?;
    doc.into_network()
}

/// Persist `network` to `path`, creating parent directories as needed.
pub fn save_snapshot(network: &RailNetwork, path: &Path) -> NetworkResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    {
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        write_snapshot(network, &mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    log::debug!(
        "saved snapshot to {} ({} nodes, {} edges)",
        path.display(),
        network.node_count(),
        network.edge_count()
    );
    Ok(())
}

/// Restore a network previously written by [`save_snapshot`].
///
/// Fails with [`NetworkError::SnapshotNotFound`] if `path` does not exist and
/// [`NetworkError::SnapshotCorrupt`] if it cannot be parsed or fails
/// validation.
pub fn load_snapshot(path: &Path) -> NetworkResult<RailNetwork> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(NetworkError::SnapshotNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let network = read_snapshot(BufReader::new(file))?;
    log::debug!(
        "loaded snapshot from {} ({} nodes, {} edges)",
        path.display(),
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

/// Load the snapshot at `path`, or build from `topology` and save it.
///
/// A missing or corrupt snapshot triggers a rebuild; `force_rebuild` skips
/// the load attempt entirely.  A failure to write the fresh snapshot is
/// logged but not returned, since the built network is still usable.
pub fn load_or_build(path: &Path, topology: &Topology, force_rebuild: bool) -> NetworkResult<RailNetwork> {
    if !force_rebuild {
        match load_snapshot(path) {
            Ok(network) => return Ok(network),
            Err(e) if e.is_snapshot_miss() => {
                log::warn!("{e}; rebuilding from topology");
            }
            Err(e) => return Err(e),
        }
    }

    let network = build_network(topology)?;
    if let Err(e) = save_snapshot(&network, path) {
        log::warn!("could not write snapshot to {}: {e}", path.display());
    }
    Ok(network)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}
