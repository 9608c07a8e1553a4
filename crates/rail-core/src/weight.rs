//! Edge-weight selector shared by the router and the CLI.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which edge attribute a shortest-path query minimises.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightKey {
    /// Track length in metres.
    #[default]
    Length,
    /// Travel time in seconds at the reference speed.
    TravelTime,
}

impl WeightKey {
    pub const ALL: [WeightKey; 2] = [WeightKey::Length, WeightKey::TravelTime];

    /// Label used on the command line and in exported files.
    pub fn as_str(self) -> &'static str {
        match self {
            WeightKey::Length     => "length",
            WeightKey::TravelTime => "travel_time",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `WeightKey::from_str` for an unrecognised label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weight key {0:?}: expected \"length\" or \"travel_time\"")]
pub struct ParseWeightKeyError(pub String);

impl FromStr for WeightKey {
    type Err = ParseWeightKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "length" | "distance"     => Ok(WeightKey::Length),
            "travel_time" | "time"    => Ok(WeightKey::TravelTime),
            other => Err(ParseWeightKeyError(other.to_owned())),
        }
    }
}
