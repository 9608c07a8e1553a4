//! `rail-network` — rail graph, snapshots, nearest-node lookup, and routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RailNetwork` (CSR adjacency), `RailNetworkBuilder`        |
//! | [`topology`] | `Topology`, `build_network`, CSV topology loading          |
//! | [`snapshot`] | `save_snapshot`, `load_snapshot`, `load_or_build`          |
//! | [`locator`]  | `Locator` trait, `LinearScanLocator`, `RTreeLocator`       |
//! | [`router`]   | `Router` trait, `ShortestPath`, `DijkstraRouter`           |
//! | [`route`]    | `Route`, `Segment`, route assembly, `plan_route`           |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `router::shortest_paths` answers batches on Rayon.       |

pub mod error;
pub mod locator;
pub mod network;
pub mod route;
pub mod router;
pub mod snapshot;
pub mod topology;


pub use error::{NetworkError, NetworkResult};
pub use locator::{find_nearest, LinearScanLocator, Locator, NearestNode, RTreeLocator};
pub use network::{Edge, Node, RailNetwork, RailNetworkBuilder, RAILWAY_KIND};
pub use route::{assemble_route, assemble_route_with_edges, plan_route, Route, Segment};
pub use router::{shortest_paths, DijkstraRouter, Router, ShortestPath};
pub use snapshot::{load_or_build, load_snapshot, save_snapshot};
pub use topology::{build_network, CityRecord, Connection, Topology, REFERENCE_SPEED_KMH};
