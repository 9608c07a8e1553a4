//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `segments.csv` — one row per segment, with endpoint coordinates
//! - `routes.csv`   — one row per route with its totals

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rail_core::WeightKey;
use rail_network::Route;

use crate::row::{RouteSummaryRow, SegmentRow};
use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult};

pub const SEGMENTS_FILE: &str = "segments.csv";
pub const ROUTES_FILE: &str = "routes.csv";

/// Writes routes to two CSV files.
pub struct CsvWriter {
    segments: Writer<File>,
    routes:   Writer<File>,
    next:     u32,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir`.
    ///
    /// Headers come from the row types and are written with the first row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            segments: Writer::from_path(dir.join(SEGMENTS_FILE))?,
            routes:   Writer::from_path(dir.join(ROUTES_FILE))?,
            next:     0,
            finished: false,
        })
    }
}

impl RouteWriter for CsvWriter {
    fn write_route(&mut self, route: &Route, weight: WeightKey) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let id = self.next;
        for (i, seg) in route.segments.iter().enumerate() {
            self.segments.serialize(SegmentRow::new(id, i as u32 + 1, seg))?;
        }
        self.routes.serialize(RouteSummaryRow::new(id, route, weight))?;
        self.next += 1;
        log::debug!("csv: wrote route {id} ({} segments)", route.segments.len());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.segments.flush()?;
        self.routes.flush()?;
        Ok(())
    }
}
