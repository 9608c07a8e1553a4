//! `rail-core` — foundational types for the `trilhos` rail routing crates.
//!
//! This crate is a dependency of every other `rail-*` crate.  It has no
//! `rail-*` dependencies; externally it needs only `thiserror` (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                         |
//! | [`geo`]    | `GeoPoint`, haversine distance             |
//! | [`weight`] | `WeightKey` (which edge attribute to minimise) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `rail-network` snapshots.                      |

pub mod geo;
pub mod ids;
pub mod weight;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use weight::{ParseWeightKeyError, WeightKey};
