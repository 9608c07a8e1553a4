//! The `RouteWriter` trait implemented by all backend writers.

use rail_core::WeightKey;
use rail_network::Route;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait RouteWriter {
    /// Append one route, planned under `weight`.
    fn write_route(&mut self, route: &Route, weight: WeightKey) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
