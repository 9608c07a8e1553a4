//! Nearest-node lookup from arbitrary coordinates.
//!
//! [`Locator`] is the seam: the default [`LinearScanLocator`] computes the
//! haversine distance to every node, which is plenty for a network of tens
//! of cities.  [`RTreeLocator`] answers the same queries from an `rstar`
//! index for larger networks.  Both return identical results, including the
//! tie-break (lowest `NodeId` among exactly equidistant nodes).

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rail_core::{GeoPoint, NodeId};

use crate::network::RailNetwork;
use crate::{NetworkError, NetworkResult};

/// Result of a nearest-node query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNode {
    pub id:         NodeId,
    /// Great-circle distance from the query point, in metres.
    pub distance_m: f64,
}

/// Pluggable nearest-node strategy.
pub trait Locator: Send + Sync {
    /// The node closest to `point`.
    ///
    /// Fails with [`NetworkError::InvalidPoint`] for a non-finite or
    /// out-of-range coordinate, and [`NetworkError::EmptyGraph`] if the
    /// network has no nodes.
    fn nearest(&self, network: &RailNetwork, point: GeoPoint) -> NetworkResult<NearestNode>;
}

// ── LinearScanLocator ─────────────────────────────────────────────────────────

/// Exhaustive haversine scan over all nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanLocator;

impl Locator for LinearScanLocator {
    fn nearest(&self, network: &RailNetwork, point: GeoPoint) -> NetworkResult<NearestNode> {
        check_point(point)?;
        let mut best: Option<NearestNode> = None;
        for id in network.node_ids() {
            let d = network.nodes()[id.index()].pos.distance_m(point);
            // Strict `<` keeps the earlier (lower) id on an exact tie.
            if best.is_none_or(|b| d < b.distance_m) {
                best = Some(NearestNode { id, distance_m: d });
            }
        }
        best.ok_or(NetworkError::EmptyGraph)
    }
}

fn check_point(point: GeoPoint) -> NetworkResult<()> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(NetworkError::InvalidPoint(point))
    }
}

/// Nearest node to `point` by linear scan.
pub fn find_nearest(network: &RailNetwork, point: GeoPoint) -> NetworkResult<NearestNode> {
    LinearScanLocator.nearest(network, point)
}

// ── RTreeLocator ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a node's position on the unit sphere.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 3],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared chord length.  Monotonic in great-circle distance, so the
    /// R-tree's ordering matches haversine ordering.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// R-tree backed locator, built once per network.
///
/// Must be queried with the same network it was built from.
pub struct RTreeLocator {
    index:      RTree<NodeEntry>,
    node_count: usize,
}

impl RTreeLocator {
    /// Bulk-load an index over every node of `network`.  O(N log N).
    pub fn new(network: &RailNetwork) -> Self {
        let entries: Vec<NodeEntry> = network
            .node_ids()
            .map(|id| NodeEntry {
                point: network.nodes()[id.index()].pos.to_unit_vector(),
                id,
            })
            .collect();
        Self {
            index:      RTree::bulk_load(entries),
            node_count: network.node_count(),
        }
    }
}

impl Locator for RTreeLocator {
    fn nearest(&self, network: &RailNetwork, point: GeoPoint) -> NetworkResult<NearestNode> {
        debug_assert_eq!(self.node_count, network.node_count(), "locator built for another network");
        check_point(point)?;

        let query = point.to_unit_vector();
        let mut iter = self.index.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best_d2) = iter.next().ok_or(NetworkError::EmptyGraph)?;

        // Equidistant entries come out of the iterator back to back; keep
        // the lowest id among them.
        let id = iter
            .take_while(|&(_, d2)| d2 == best_d2)
            .map(|(e, _)| e.id)
            .fold(first.id, NodeId::min);

        let pos = network.try_node(id)?.pos;
        Ok(NearestNode { id, distance_m: pos.distance_m(point) })
    }
}
