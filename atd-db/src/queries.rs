//! Typed query methods for retrieving traffic data from the database.
//!
//! All queries run against the raw `traffic` table; nothing is cached
//! between calls.

use crate::models::AirportTotal;
use crate::Database;
use atd_core::centroid::{Coordinate, StateCentroids};
use rusqlite::params;

impl Database {
    /// Get per-airport arrival totals for one state.
    ///
    /// Groups rows by (state, airport, city, latitude, longitude) and sums
    /// `count`. Ordered by airport, city, latitude, longitude. An unknown
    /// state returns an empty vector.
    pub fn query_airport_totals(&self, state: &str) -> anyhow::Result<Vec<AirportTotal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT state, airport, city, latitude, longitude, SUM(count) AS total
             FROM traffic
             WHERE state = ?1
             GROUP BY state, airport, city, latitude, longitude
             ORDER BY airport, city, latitude, longitude",
        )?;
        let rows = stmt
            .query_map(params![state], |row| {
                Ok(AirportTotal {
                    state: row.get(0)?,
                    airport: row.get(1)?,
                    city: row.get(2)?,
                    latitude: row.get(3)?,
                    longitude: row.get(4)?,
                    count: row.get::<_, i64>(5)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[ATD Debug] query: query_airport_totals({}) returned {} records",
            state,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the distinct state codes in order of first appearance in the file.
    pub fn query_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT state FROM traffic
             GROUP BY state
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[ATD Debug] query: query_states returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get one representative coordinate per state.
    ///
    /// The last row of each state (in file order) supplies the coordinate.
    pub fn query_state_centroids(&self) -> anyhow::Result<StateCentroids> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT t.state, t.latitude, t.longitude
             FROM traffic t
             WHERE t.id = (SELECT MAX(id) FROM traffic WHERE state = t.state)",
        )?;
        let centroids = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    Coordinate::new(row.get(1)?, row.get(2)?),
                ))
            })?
            .collect::<Result<StateCentroids, _>>()?;
        log::info!(
            "[ATD Debug] query: query_state_centroids returned {} records",
            centroids.len()
        );
        Ok(centroids)
    }

    /// Number of raw rows loaded.
    pub fn query_record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM traffic", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use atd_core::centroid::Coordinate;

    /// Helper to create a database with sample traffic data.
    ///
    /// MIA appears twice so its total is summed; DL has a single airport.
    fn sample_traffic_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
state,airport,city,lat,long,cnt
GA,ATL,Atlanta,33.64,-84.43,2500
FL,TPA,Tampa,27.98,-82.53,500
FL,MIA,Miami,25.79,-80.29,600
GA,SAV,Savannah,32.13,-81.20,150
FL,MIA,Miami,25.79,-80.29,400
DE,ILG,Wilmington,39.68,-75.61,42
";
        db.load_traffic(csv).unwrap();
        db
    }

    #[test]
    fn query_airport_totals_sums_groups() {
        let db = sample_traffic_db();
        let totals = db.query_airport_totals("FL").unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].airport, "MIA");
        assert_eq!(totals[0].count, 1000);
        assert_eq!(totals[1].airport, "TPA");
        assert_eq!(totals[1].count, 500);
        assert!(totals.iter().all(|t| t.state == "FL"));
    }

    #[test]
    fn query_airport_totals_ordered_by_airport() {
        let db = sample_traffic_db();
        let totals = db.query_airport_totals("GA").unwrap();
        let airports: Vec<_> = totals.iter().map(|t| t.airport.as_str()).collect();
        assert_eq!(airports, vec!["ATL", "SAV"]);
    }

    #[test]
    fn query_airport_totals_distinct_coordinates_stay_separate() {
        let db = Database::new().unwrap();
        let csv = "\
state,airport,city,lat,long,cnt
FL,MIA,Miami,25.79,-80.29,600
FL,MIA,Miami,25.80,-80.29,400
";
        db.load_traffic(csv).unwrap();
        let totals = db.query_airport_totals("FL").unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.iter().map(|t| t.count).sum::<u64>(), 1000);
    }

    #[test]
    fn query_airport_totals_sum_matches_raw_rows() {
        let db = sample_traffic_db();
        for (state, expected) in [("FL", 1500u64), ("GA", 2650), ("DE", 42)] {
            let total: u64 = db
                .query_airport_totals(state)
                .unwrap()
                .iter()
                .map(|t| t.count)
                .sum();
            assert_eq!(total, expected, "total for {}", state);
        }
    }

    #[test]
    fn query_airport_totals_unknown_state_is_empty() {
        let db = sample_traffic_db();
        assert!(db.query_airport_totals("TX").unwrap().is_empty());
        assert!(db.query_airport_totals("").unwrap().is_empty());
    }

    #[test]
    fn query_airport_totals_single_airport_state() {
        let db = sample_traffic_db();
        let totals = db.query_airport_totals("DE").unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].count, 42);
    }

    #[test]
    fn query_states_in_first_appearance_order() {
        let db = sample_traffic_db();
        assert_eq!(db.query_states().unwrap(), vec!["GA", "FL", "DE"]);
    }

    #[test]
    fn query_state_centroids_uses_last_row_per_state() {
        let db = sample_traffic_db();
        let centroids = db.query_state_centroids().unwrap();
        assert_eq!(centroids.len(), 3);
        assert_eq!(centroids.get("FL"), Some(Coordinate::new(25.79, -80.29)));
        assert_eq!(centroids.get("GA"), Some(Coordinate::new(32.13, -81.20)));
        assert_eq!(centroids.get("TX"), None);
    }

    #[test]
    fn every_state_has_a_centroid() {
        let db = sample_traffic_db();
        let centroids = db.query_state_centroids().unwrap();
        for state in db.query_states().unwrap() {
            assert!(centroids.contains(&state), "missing centroid for {}", state);
        }
    }

    #[test]
    fn query_record_count() {
        let db = sample_traffic_db();
        assert_eq!(db.query_record_count().unwrap(), 6);
    }
}
