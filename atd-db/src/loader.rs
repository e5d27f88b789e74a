//! CSV loading into the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Header row required, naming at least `state,airport,city,lat,long,cnt`.
//! Rows with a missing field are dropped; any other malformed content fails
//! the whole load.

use crate::models::LoadSummary;
use crate::Database;
use atd_core::record::TrafficRecord;
use rusqlite::params;

impl Database {
    /// Load airport traffic records from a CSV string.
    ///
    /// All rows are inserted in one transaction, so a failure leaves the
    /// table as it was before the call.
    ///
    /// # Example CSV
    /// ```text
    /// state,airport,city,lat,long,cnt
    /// FL,MIA,Miami,25.79,-80.29,1000
    /// ```
    pub fn load_traffic(&self, csv_data: &str) -> anyhow::Result<LoadSummary> {
        let parsed = TrafficRecord::parse_traffic_csv(csv_data)?;

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO traffic (state, airport, city, latitude, longitude, count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in &parsed.records {
                stmt.execute(params![
                    r.state,
                    r.airport,
                    r.city,
                    r.latitude,
                    r.longitude,
                    i64::try_from(r.count)?,
                ])?;
            }
        }
        tx.commit()?;

        let summary = LoadSummary {
            loaded: parsed.records.len(),
            dropped: parsed.dropped,
        };
        log::info!(
            "[ATD Debug] loader: Loaded {} traffic records, dropped {} incomplete",
            summary.loaded,
            summary.dropped
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_traffic_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
state,airport,city,lat,long,cnt
FL,MIA,Miami,25.79,-80.29,1000
FL,TPA,Tampa,27.98,-82.53,500
GA,ATL,Atlanta,33.64,-84.43,2500
";
        let summary = db.load_traffic(csv).unwrap();
        assert_eq!(summary.loaded, 3);
        assert_eq!(summary.dropped, 0);

        let conn = db.conn().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM traffic", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let city: String = conn
            .query_row(
                "SELECT city FROM traffic WHERE airport = 'TPA'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(city, "Tampa");
    }

    #[test]
    fn load_traffic_skips_incomplete_rows() {
        let db = Database::new().unwrap();
        let csv = "\
state,airport,city,lat,long,cnt
FL,MIA,Miami,25.79,-80.29,1000
FL,TPA,,27.98,-82.53,500
,JAX,Jacksonville,30.49,-81.69,300
FL,PNS,Pensacola,30.47,-87.19,
";
        let summary = db.load_traffic(csv).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.dropped, 3);
        assert_eq!(db.query_record_count().unwrap(), 1);
    }

    #[test]
    fn load_traffic_malformed_inserts_nothing() {
        let db = Database::new().unwrap();
        let csv = "\
state,airport,city,lat,long,cnt
FL,MIA,Miami,25.79,-80.29,1000
FL,TPA,Tampa,27.98,-82.53,lots
";
        assert!(db.load_traffic(csv).is_err());
        assert_eq!(db.query_record_count().unwrap(), 0);
    }

    #[test]
    fn load_traffic_missing_column_fails() {
        let db = Database::new().unwrap();
        let csv = "state,airport,lat,long,cnt\nFL,MIA,25.79,-80.29,1000\n";
        assert!(db.load_traffic(csv).is_err());
    }
}
