//! The process-wide, read-only traffic dataset.
//!
//! `TrafficDataset` is built once at startup and handed to the view builders
//! and HTTP handlers as a parameter. It owns the loaded database together with
//! the values derived from it exactly once: the dropdown options and the
//! state centroid map.

use crate::models::AirportTotal;
use crate::Database;
use anyhow::Context;
use atd_core::centroid::{Coordinate, StateCentroids};
use std::path::Path;

pub struct TrafficDataset {
    db: Database,
    states: Vec<String>,
    centroids: StateCentroids,
    record_count: usize,
}

impl TrafficDataset {
    /// Read and load the traffic CSV at `path`.
    ///
    /// Any failure (missing file, malformed CSV, missing column, no complete
    /// rows) is returned as an error; callers treat it as fatal.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let csv_data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read traffic data from {}", path.display()))?;
        Self::from_csv(&csv_data)
            .with_context(|| format!("failed to load traffic data from {}", path.display()))
    }

    /// Build a dataset from CSV text.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::new()?;
        let summary = db.load_traffic(csv_data)?;
        if summary.loaded == 0 {
            anyhow::bail!(
                "traffic data has no complete rows ({} dropped)",
                summary.dropped
            );
        }

        let states = db.query_states()?;
        let centroids = db.query_state_centroids()?;
        log::info!(
            "[ATD Debug] dataset: {} records across {} states",
            summary.loaded,
            states.len()
        );

        Ok(Self {
            db,
            states,
            centroids,
            record_count: summary.loaded,
        })
    }

    /// Per-airport totals for `state`, recomputed on every call.
    pub fn airport_totals(&self, state: &str) -> anyhow::Result<Vec<AirportTotal>> {
        self.db.query_airport_totals(state)
    }

    /// Dropdown options: distinct states in order of first appearance.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.centroids.contains(state)
    }

    /// Representative coordinate for map centering, `None` for unknown states.
    pub fn centroid(&self, state: &str) -> Option<Coordinate> {
        self.centroids.get(state)
    }

    pub fn centroids(&self) -> &StateCentroids {
        &self.centroids
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
