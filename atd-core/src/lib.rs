//! Core types for airport traffic data.
//!
//! - `record`: the raw [`record::TrafficRecord`] row and its CSV parser
//! - `centroid`: [`centroid::Coordinate`] and the per-state [`centroid::StateCentroids`] lookup

pub mod centroid;
pub mod record;
