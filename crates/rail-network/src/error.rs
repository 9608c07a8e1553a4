//! Network-subsystem error type.

use std::path::PathBuf;

use thiserror::Error;

use rail_core::{EdgeId, GeoPoint, NodeId};

/// Errors produced by `rail-network`.
///
/// Grouped by who is at fault:
///
/// | Kind                       | Variants                                   |
/// |----------------------------|--------------------------------------------|
/// | bad build input            | `InvalidTopology`                          |
/// | recoverable cache misses   | `SnapshotNotFound`, `SnapshotCorrupt`      |
/// | bad caller input           | `EmptyGraph`, `UnknownNode`, `EmptyPath`,  |
/// |                            | `InvalidPoint`                             |
/// | expected outcome           | `NoPath`, `Cancelled`                      |
/// | internal invariant broken  | `NegativeWeight`, `MissingEdge`,           |
/// |                            | `PathEdgeMismatch`                         |
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("snapshot not found at {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("snapshot is corrupt: {0}")]
    SnapshotCorrupt(String),

    #[error("network has no nodes")]
    EmptyGraph,

    #[error("query point {0} is not a valid coordinate")]
    InvalidPoint(GeoPoint),

    #[error("node {0} not found in network")]
    UnknownNode(NodeId),

    #[error("no route from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("path steps from {from} to {to} but no edge connects them")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("path of {nodes} nodes paired with {edges} edges")]
    PathEdgeMismatch { nodes: usize, edges: usize },

    #[error("path is empty")]
    EmptyPath,

    #[error("route query cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NetworkError {
    /// `true` for snapshot failures that the caller should answer by
    /// rebuilding from topology rather than aborting.
    pub fn is_snapshot_miss(&self) -> bool {
        matches!(self, NetworkError::SnapshotNotFound(_) | NetworkError::SnapshotCorrupt(_))
    }

    /// `true` for violations of the network's own invariants.  These mean a
    /// construction bug, never bad user input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            NetworkError::NegativeWeight { .. }
                | NetworkError::MissingEdge { .. }
                | NetworkError::PathEdgeMismatch { .. }
        )
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
