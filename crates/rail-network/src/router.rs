//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers go through the [`Router`] trait, so an A* or contraction
//! hierarchy implementation can replace [`DijkstraRouter`] without touching
//! route assembly or the CLI.
//!
//! # Determinism
//!
//! The frontier is a binary min-heap keyed on `(cost, NodeId)`.  Among equal
//! tentative costs the lower `NodeId` is extracted first, and a neighbour's
//! predecessor is only replaced on a strictly cheaper relaxation, so for a
//! fixed network and weight key every query has exactly one answer.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use rail_core::{EdgeId, NodeId, WeightKey};

use crate::network::RailNetwork;
use crate::{NetworkError, NetworkResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// Raw result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from source to target inclusive.  `nodes[0]` is the source.
    pub nodes: Vec<NodeId>,
    /// Edge taken between `nodes[i]` and `nodes[i + 1]`.
    pub edges: Vec<EdgeId>,
    /// Sum of the selected weight over `edges`.
    pub cost:  f64,
}

impl ShortestPath {
    /// `true` if source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync`: one router and one network may be
/// shared by any number of concurrent queries.
pub trait Router: Send + Sync {
    /// Minimum-weight path from `from` to `to`, minimising `weight`.
    ///
    /// - [`NetworkError::UnknownNode`] if either id is outside the network.
    /// - [`NetworkError::NoPath`] if the two nodes are disconnected.
    /// - [`NetworkError::NegativeWeight`] if a negative edge is reached.
    fn shortest_path(
        &self,
        network: &RailNetwork,
        from: NodeId,
        to: NodeId,
        weight: WeightKey,
    ) -> NetworkResult<ShortestPath>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra over the CSR adjacency.
///
/// An optional cancellation flag is polled once per extraction; when it is
/// set the query stops with [`NetworkError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct DijkstraRouter {
    cancel: Option<Arc<AtomicBool>>,
}

impl DijkstraRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A router that aborts in-flight queries once `flag` becomes `true`.
    pub fn with_cancel_flag(flag: Arc<AtomicBool>) -> Self {
        Self { cancel: Some(flag) }
    }

    #[inline]
    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|f| f.load(AtomicOrdering::Relaxed))
    }
}

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &RailNetwork,
        from: NodeId,
        to: NodeId,
        weight: WeightKey,
    ) -> NetworkResult<ShortestPath> {
        dijkstra(self, network, from, to, weight)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key: accumulated cost, totally ordered.
///
/// Costs are finite and non-negative by the time they reach the heap, so
/// `total_cmp` agrees with numeric order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(
    router: &DijkstraRouter,
    network: &RailNetwork,
    from: NodeId,
    to: NodeId,
    weight: WeightKey,
) -> NetworkResult<ShortestPath> {
    for end in [from, to] {
        if !network.contains(end) {
            return Err(NetworkError::UnknownNode(end));
        }
    }

    if from == to {
        return Ok(ShortestPath { nodes: vec![from], edges: vec![], cost: 0.0 });
    }

    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = (predecessor, edge) that reached v.
    let mut prev: Vec<(NodeId, EdgeId)> = vec![(NodeId::INVALID, EdgeId::INVALID); n];
    let mut settled = vec![false; n];

    dist[from.index()] = 0.0;

    // Min-heap via Reverse.  Secondary key NodeId makes ties deterministic.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if router.cancelled() {
            return Err(NetworkError::Cancelled);
        }

        // Skip stale heap entries.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if node == to {
            return Ok(reconstruct(&prev, from, to, cost));
        }

        for (neighbor, edge) in network.neighbors(node) {
            if settled[neighbor.index()] {
                continue;
            }
            let w = network.edges()[edge.index()].weight(weight);
            if w.is_nan() || w < 0.0 {
                return Err(NetworkError::NegativeWeight { edge, weight: w });
            }

            let new_cost = cost + w;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = (node, edge);
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Err(NetworkError::NoPath { from, to })
}

fn reconstruct(prev: &[(NodeId, EdgeId)], from: NodeId, to: NodeId, cost: f64) -> ShortestPath {
    let mut nodes = vec![to];
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let (p, e) = prev[cur.index()];
        debug_assert!(p.is_valid(), "settled node {cur} has no predecessor");
        edges.push(e);
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();
    edges.reverse();
    ShortestPath { nodes, edges, cost }
}

// ── Batch queries ─────────────────────────────────────────────────────────────

/// Answer every `(from, to)` pair against one shared network.
///
/// Results are returned in input order.  With the `parallel` feature the
/// queries run on the Rayon pool; the network is only ever read.
pub fn shortest_paths<R: Router>(
    router: &R,
    network: &RailNetwork,
    pairs: &[(NodeId, NodeId)],
    weight: WeightKey,
) -> Vec<NetworkResult<ShortestPath>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|&(from, to)| router.shortest_path(network, from, to, weight))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .iter()
            .map(|&(from, to)| router.shortest_path(network, from, to, weight))
            .collect()
    }
}
