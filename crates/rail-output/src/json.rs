//! JSON output backend.
//!
//! Buffers routes in memory and writes a single `routes.json` on
//! [`finish`](RouteWriter::finish):
//!
//! ```json
//! { "routes": [ { "weight": "length", "route": { "nodes": [0, 1], ... } } ] }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use rail_core::WeightKey;
use rail_network::Route;

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult};

pub const JSON_FILE: &str = "routes.json";

#[derive(Serialize)]
struct Entry {
    weight: WeightKey,
    route:  Route,
}

#[derive(Serialize)]
struct Document<'a> {
    routes: &'a [Entry],
}

/// Writes all routes to one JSON document.
pub struct JsonWriter {
    path:     PathBuf,
    entries:  Vec<Entry>,
    finished: bool,
}

impl JsonWriter {
    /// Prepare to write `routes.json` in `dir`.  Nothing touches the disk
    /// until `finish`, but `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )));
        }
        Ok(Self {
            path:     dir.join(JSON_FILE),
            entries:  Vec::new(),
            finished: false,
        })
    }
}

impl RouteWriter for JsonWriter {
    fn write_route(&mut self, route: &Route, weight: WeightKey) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.entries.push(Entry { weight, route: route.clone() });
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &Document { routes: &self.entries })?;
        out.flush()?;
        log::debug!("json: wrote {} routes to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}
