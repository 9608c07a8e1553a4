//! Rail network representation and builder.
//!
//! # Data layout
//!
//! Nodes and undirected edges live in two `Vec`s indexed by `NodeId` and
//! `EdgeId`.  Adjacency uses **Compressed Sparse Row (CSR)** format over
//! half-edges: every undirected edge contributes one entry at each endpoint.
//! Given a `NodeId n`, its incident half-edges occupy the slice:
//!
//! ```text
//! adj_to[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! with `adj_edge` parallel to `adj_to`.  Within a node's slice, entries keep
//! edge insertion order, so building twice from the same input yields the
//! same adjacency order (and therefore the same Dijkstra tie-breaks).
//!
//! The network has no mutating methods once built and is `Send + Sync`;
//! any number of queries may share it by reference.

use rail_core::{EdgeId, GeoPoint, NodeId, WeightKey};

use crate::{NetworkError, NetworkResult};

/// Category tag carried by every edge built from a rail topology.
pub const RAILWAY_KIND: &str = "railway";

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// A city on the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos:  GeoPoint,
    pub name: String,
}

/// An undirected track segment between two nodes.
///
/// `a` and `b` are stored in the order the edge was added; traversal is
/// symmetric, so the order carries no meaning beyond determinism.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a:             NodeId,
    pub b:             NodeId,
    pub length_m:      f64,
    pub travel_time_s: f64,
    pub name:          String,
    pub kind:          String,
}

impl Edge {
    /// Edge cost under `key`.
    #[inline]
    pub fn weight(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::Length     => self.length_m,
            WeightKey::TravelTime => self.travel_time_s,
        }
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// Undirected rail graph in CSR format.
///
/// Do not construct directly; use [`RailNetworkBuilder`], the topology
/// builder, or a snapshot load.
#[derive(Debug, Clone, PartialEq)]
pub struct RailNetwork {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// CSR row pointer.  Length = `node_count + 1`.
    node_adj_start: Vec<u32>,
    /// Neighbour reached by each half-edge.
    adj_to: Vec<NodeId>,
    /// Undirected edge behind each half-edge.
    adj_edge: Vec<EdgeId>,
}

impl RailNetwork {
    /// Construct a network with no nodes or edges.
    pub fn empty() -> Self {
        RailNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Element access ────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Like [`node`](Self::node) but reports a missing id as an error.
    pub fn try_node(&self, id: NodeId) -> NetworkResult<&Node> {
        self.node(id).ok_or(NetworkError::UnknownNode(id))
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// First node (lowest id) whose display name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(|i| NodeId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(neighbour, edge)` pairs for every edge incident to `node`, in edge
    /// insertion order.  Empty for an id outside the network.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        let range = self.adj_range(node);
        self.adj_to[range.clone()]
            .iter()
            .copied()
            .zip(self.adj_edge[range].iter().copied())
    }

    /// Number of edges incident to `node`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adj_range(node).len()
    }

    /// The first-inserted edge joining `a` and `b`, if any.
    ///
    /// Parallel edges are permitted; only the first one is reported here.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.neighbors(a)
            .find(|&(to, _)| to == b)
            .map(|(_, edge)| edge)
    }

    fn adj_range(&self, node: NodeId) -> std::ops::Range<usize> {
        if !self.contains(node) {
            return 0..0;
        }
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        start..end
    }
}

// ── RailNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RailNetwork`] incrementally, then call [`build`](Self::build).
///
/// Endpoints are checked as edges are added, so a built network always
/// satisfies "every endpoint exists, no self-loops".  Weights are taken as
/// given; the topology builder and snapshot loader validate them, and the
/// router refuses negative ones at query time.
///
/// # Example
///
/// ```
/// use rail_core::GeoPoint;
/// use rail_network::RailNetworkBuilder;
///
/// let mut b = RailNetworkBuilder::new();
/// let sp = b.add_node(GeoPoint::new(-23.5505, -46.6333), "São Paulo");
/// let rj = b.add_node(GeoPoint::new(-22.9068, -43.1729), "Rio de Janeiro");
/// b.add_edge(sp, rj, 360_000.0, 16_200.0, "Railroad São Paulo-Rio de Janeiro").unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 1);
/// assert_eq!(net.degree(sp), 1);
/// ```
#[derive(Debug, Default)]
pub struct RailNetworkBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl RailNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { pos, name: name.into() });
        id
    }

    /// Add an undirected `"railway"` edge between `a` and `b`.
    pub fn add_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        length_m: f64,
        travel_time_s: f64,
        name: impl Into<String>,
    ) -> NetworkResult<EdgeId> {
        self.add_edge_with_kind(a, b, length_m, travel_time_s, name, RAILWAY_KIND)
    }

    /// Add an undirected edge with an explicit category tag.
    ///
    /// Fails with [`NetworkError::InvalidTopology`] if either endpoint has
    /// not been added or if `a == b`.
    pub fn add_edge_with_kind(
        &mut self,
        a: NodeId,
        b: NodeId,
        length_m: f64,
        travel_time_s: f64,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> NetworkResult<EdgeId> {
        for end in [a, b] {
            if end.index() >= self.nodes.len() {
                return Err(NetworkError::InvalidTopology(format!(
                    "edge endpoint {end} does not exist ({} nodes)",
                    self.nodes.len()
                )));
            }
        }
        if a == b {
            return Err(NetworkError::InvalidTopology(format!("self-loop at {a}")));
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            a,
            b,
            length_m,
            travel_time_s,
            name: name.into(),
            kind: kind.into(),
        });
        Ok(id)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`RailNetwork`].
    ///
    /// O(N + E): one counting pass for degrees, one placement pass.
    pub fn build(self) -> RailNetwork {
        let node_count = self.nodes.len();
        let half_edges = self.edges.len() * 2;

        // Degree count, then prefix sum into the CSR row pointer.
        let mut node_adj_start = vec![0u32; node_count + 1];
        for e in &self.edges {
            node_adj_start[e.a.index() + 1] += 1;
            node_adj_start[e.b.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, half_edges);

        // Place half-edges in insertion order.
        let mut cursor: Vec<u32> = node_adj_start[..node_count].to_vec();
        let mut adj_to   = vec![NodeId::INVALID; half_edges];
        let mut adj_edge = vec![EdgeId::INVALID; half_edges];
        for (i, e) in self.edges.iter().enumerate() {
            let id = EdgeId(i as u32);
            for (from, to) in [(e.a, e.b), (e.b, e.a)] {
                let slot = cursor[from.index()] as usize;
                adj_to[slot] = to;
                adj_edge[slot] = id;
                cursor[from.index()] += 1;
            }
        }

        log::debug!("built rail network: {} nodes, {} edges", node_count, self.edges.len());

        RailNetwork {
            nodes: self.nodes,
            edges: self.edges,
            node_adj_start,
            adj_to,
            adj_edge,
        }
    }
}
