//! In-memory SQLite database layer for airport traffic data.
//!
//! Loads the traffic CSV into an in-memory SQLite database and exposes typed
//! query methods whose results feed the map and bar chart builders.
//!
//! # Architecture
//!
//! - `Arc<Mutex<Connection>>` wrapper so the database can be shared by HTTP
//!   handlers; nothing writes to it after the initial load
//! - CSV rows parsed by [`atd_core::record::TrafficRecord::parse_traffic_csv`],
//!   which drops incomplete rows
//! - Aggregation via SQL `GROUP BY` + `SUM(count)`, recomputed per request
//! - [`TrafficDataset`] bundles the database with the derived state list and
//!   centroid map, built once at startup
//!
//! # Usage
//!
//! ```rust
//! use atd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_traffic("state,airport,city,lat,long,cnt\nFL,MIA,Miami,25.79,-80.29,1000\n").unwrap();
//!
//! let totals = db.query_airport_totals("FL").unwrap();
//! assert_eq!(totals.len(), 1);
//! ```

pub mod dataset;
mod loader;
pub mod models;
mod queries;
pub mod schema;

pub use dataset::TrafficDataset;

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory SQLite database holding the raw traffic records.
///
/// Cheaply cloneable (via `Arc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_traffic`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("database connection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_traffic("state,airport,city,lat,long,cnt\nFL,MIA,Miami,25.79,-80.29,1000\n")
            .unwrap();
        let states = db2.query_states().unwrap();
        assert_eq!(states, vec!["FL"], "Clone should see same data via shared Arc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_record_count().unwrap(), 0);
        assert!(db.query_states().unwrap().is_empty());
    }

    #[test]
    fn database_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }
}
