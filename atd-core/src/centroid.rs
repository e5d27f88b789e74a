use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A point in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Geographic center of the contiguous United States.
    pub const CONTINENTAL_US: Coordinate = Coordinate {
        latitude: 39.8283,
        longitude: -98.5795,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Representative coordinate per state code, used only to center the map view.
///
/// Built once from the loaded dataset. Lookups return `None` for unknown states
/// instead of assuming presence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateCentroids {
    centroids: BTreeMap<String, Coordinate>,
}

impl StateCentroids {
    pub fn get(&self, state: &str) -> Option<Coordinate> {
        self.centroids.get(state).copied()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.centroids.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// State codes in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.centroids.keys().map(String::as_str)
    }
}

/// Later entries for the same state replace earlier ones.
impl FromIterator<(String, Coordinate)> for StateCentroids {
    fn from_iter<I: IntoIterator<Item = (String, Coordinate)>>(iter: I) -> Self {
        Self {
            centroids: iter.into_iter().collect(),
        }
    }
}
