//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// `traffic` holds one row per raw CSV record. The integer primary key keeps
/// file order, which decides dropdown order and the representative coordinate
/// of each state.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS traffic (
        id INTEGER PRIMARY KEY,
        state TEXT NOT NULL,
        airport TEXT NOT NULL,
        city TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        count INTEGER NOT NULL CHECK (count >= 0)
    );
    CREATE INDEX IF NOT EXISTS idx_traffic_state ON traffic(state);
    "#
}
