//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the chart layer
//! and the JSON API unchanged.

use serde::Serialize;

/// Arrivals for one airport within a state, summed over all of its raw rows.
///
/// Rows are grouped by (state, airport, city, latitude, longitude), so an
/// airport listed with two different coordinates yields two totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirportTotal {
    pub state: String,
    pub airport: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Summed arrival count
    pub count: u64,
}

/// Outcome of loading a traffic CSV into the database.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows inserted
    pub loaded: usize,
    /// Rows skipped because a required field was missing
    pub dropped: usize,
}
