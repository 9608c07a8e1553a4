//! Route assembly: from a node path to annotated segments with totals.
//!
//! A [`Route`] copies the display fields it needs out of the network and
//! holds no reference back into it.  Totals are exact sums; rounding and
//! unit conversion belong to whoever prints the route.

use serde::Serialize;

use rail_core::{EdgeId, GeoPoint, NodeId, WeightKey};

use crate::network::RailNetwork;
use crate::router::{Router, ShortestPath};
use crate::{NetworkError, NetworkResult};

/// One hop of a route, between two consecutive path nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from:          NodeId,
    pub to:            NodeId,
    pub from_name:     String,
    pub to_name:       String,
    pub from_pos:      GeoPoint,
    pub to_pos:        GeoPoint,
    pub length_m:      f64,
    pub travel_time_s: f64,
    pub name:          String,
}

/// A planned route, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Node ids from source to target inclusive.
    pub nodes:            Vec<NodeId>,
    /// `nodes.len() - 1` segments, in travel order.
    pub segments:         Vec<Segment>,
    pub total_distance_m: f64,
    pub total_time_s:     f64,
}

impl Route {
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// `true` if source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total of `key` over all segments.
    pub fn total(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::Length     => self.total_distance_m,
            WeightKey::TravelTime => self.total_time_s,
        }
    }
}

/// Build a [`Route`] for a bare node path.
///
/// Each consecutive pair resolves to the first-inserted edge joining them.
/// When the edges are known (as in a [`ShortestPath`]) use
/// [`assemble_route_with_edges`], which keeps the exact edges chosen.
///
/// - [`NetworkError::EmptyPath`] if `path` is empty.
/// - [`NetworkError::UnknownNode`] if a path node is outside the network.
/// - [`NetworkError::MissingEdge`] if two consecutive nodes are not
///   adjacent.  A path produced by a [`Router`] never triggers this; if it
///   happens the network or the router is broken.
pub fn assemble_route(network: &RailNetwork, path: &[NodeId]) -> NetworkResult<Route> {
    assemble(network, path, |_, u, v| {
        network
            .edge_between(u, v)
            .ok_or(NetworkError::MissingEdge { from: u, to: v })
    })
}

/// Build a [`Route`] from a node path and the edge taken at each step.
///
/// `edges[i]` must join `path[i]` and `path[i + 1]`, in either direction.
///
/// - [`NetworkError::PathEdgeMismatch`] if `edges.len() != path.len() - 1`.
/// - [`NetworkError::MissingEdge`] if an edge does not join its step.
/// - Otherwise the same errors as [`assemble_route`].
pub fn assemble_route_with_edges(
    network: &RailNetwork,
    path: &[NodeId],
    edges: &[EdgeId],
) -> NetworkResult<Route> {
    if path.len().saturating_sub(1) != edges.len() {
        return Err(NetworkError::PathEdgeMismatch { nodes: path.len(), edges: edges.len() });
    }
    assemble(network, path, |step, u, v| {
        let id = edges[step];
        match network.edges().get(id.index()) {
            Some(e) if (e.a, e.b) == (u, v) || (e.a, e.b) == (v, u) => Ok(id),
            _ => Err(NetworkError::MissingEdge { from: u, to: v }),
        }
    })
}

fn assemble<F>(network: &RailNetwork, path: &[NodeId], mut edge_for: F) -> NetworkResult<Route>
where
    F: FnMut(usize, NodeId, NodeId) -> NetworkResult<EdgeId>,
{
    let Some(&first) = path.first() else {
        return Err(NetworkError::EmptyPath);
    };
    network.try_node(first)?;

    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));
    let mut total_distance_m = 0.0;
    let mut total_time_s = 0.0;

    for (step, pair) in path.windows(2).enumerate() {
        let (u, v) = (pair[0], pair[1]);
        let from = network.try_node(u)?;
        let to = network.try_node(v)?;
        let edge = &network.edges()[edge_for(step, u, v)?.index()];

        total_distance_m += edge.length_m;
        total_time_s += edge.travel_time_s;

        segments.push(Segment {
            from:          u,
            to:            v,
            from_name:     from.name.clone(),
            to_name:       to.name.clone(),
            from_pos:      from.pos,
            to_pos:        to.pos,
            length_m:      edge.length_m,
            travel_time_s: edge.travel_time_s,
            name:          edge.name.clone(),
        });
    }

    Ok(Route {
        nodes: path.to_vec(),
        segments,
        total_distance_m,
        total_time_s,
    })
}

/// Route the query with `router` and assemble the result.
pub fn plan_route<R: Router + ?Sized>(
    router: &R,
    network: &RailNetwork,
    from: NodeId,
    to: NodeId,
    weight: WeightKey,
) -> NetworkResult<Route> {
    let ShortestPath { nodes, edges, cost } = router.shortest_path(network, from, to, weight)?;
    let route = assemble_route_with_edges(network, &nodes, &edges)?;
    log::debug!(
        "route {from} -> {to} by {weight}: {} hops, cost {cost}",
        route.segments.len()
    );
    Ok(route)
}
