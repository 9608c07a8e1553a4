//! `rail-output` — route export for map renderers and other consumers.
//!
//! Two backends are provided:
//!
//! | Backend | Files created                   |
//! |---------|---------------------------------|
//! | CSV     | `segments.csv`, `routes.csv`    |
//! | JSON    | `routes.json`                   |
//!
//! Both implement [`RouteWriter`].  Values are written unrounded; display
//! formatting is the consumer's job.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rail_output::{CsvWriter, RouteWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_route(&route, WeightKey::Length)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::{RouteSummaryRow, SegmentRow};
pub use writer::RouteWriter;
