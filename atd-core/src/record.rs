use anyhow::Context;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Columns every traffic CSV must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = ["state", "airport", "city", "lat", "long", "cnt"];

/// Field values treated as "missing" in addition to the empty string.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One row of raw airport traffic data.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrafficRecord {
    /// Two-letter state code (e.g. "FL")
    pub state: String,
    /// Airport identifier or name
    pub airport: String,
    pub city: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Arrival count
    pub count: u64,
}

/// Result of parsing a traffic CSV: the complete rows plus how many were dropped.
#[derive(Debug, Clone, Default)]
pub struct ParsedTraffic {
    pub records: Vec<TrafficRecord>,
    /// Rows skipped because at least one required field was missing
    pub dropped: usize,
}

/// Header positions of the required columns.
struct ColumnIndex {
    state: usize,
    airport: usize,
    city: usize,
    lat: usize,
    long: usize,
    cnt: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| -> anyhow::Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .with_context(|| {
                    format!(
                        "missing required column '{}' (found: {})",
                        name,
                        headers.iter().collect::<Vec<_>>().join(", ")
                    )
                })
        };
        Ok(Self {
            state: find("state")?,
            airport: find("airport")?,
            city: find("city")?,
            lat: find("lat")?,
            long: find("long")?,
            cnt: find("cnt")?,
        })
    }
}

/// True if a field should be treated as absent. Only an exact NA token or an
/// empty field counts; whitespace is a value.
pub fn is_missing(field: &str) -> bool {
    field.is_empty() || NA_TOKENS.contains(&field)
}

/// True if the row is short or any of its fields, required or not, is missing.
fn has_missing(record: &StringRecord, width: usize) -> bool {
    record.len() < width || record.iter().any(is_missing)
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Counts are non-negative integers; an integral float such as `1000.0` is accepted.
fn parse_count(raw: &str) -> Option<u64> {
    if let Ok(v) = raw.parse::<u64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64).then_some(v as u64)
}

impl TrafficRecord {
    /// Parse a CSV string of airport traffic data.
    ///
    /// The header row must name the columns `state, airport, city, lat, long, cnt`
    /// (any order, extra columns allowed). Rows with a missing value in any column,
    /// extra columns included, are dropped and counted. A row with more fields than
    /// the header is a format error, as is a present field that does not parse: the
    /// whole load fails rather than producing a partial dataset.
    pub fn parse_traffic_csv(csv_object: &str) -> anyhow::Result<ParsedTraffic> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        let columns = ColumnIndex::locate(&headers)?;
        let mut parsed = ParsedTraffic::default();

        for row in rdr.records() {
            let record = row?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() > headers.len() {
                anyhow::bail!(
                    "line {}: expected {} fields, saw {}",
                    line,
                    headers.len(),
                    record.len()
                );
            }
            if has_missing(&record, headers.len()) {
                parsed.dropped += 1;
                continue;
            }

            let state = field(&record, columns.state);
            let airport = field(&record, columns.airport);
            let city = field(&record, columns.city);
            let lat = field(&record, columns.lat);
            let long = field(&record, columns.long);
            let cnt = field(&record, columns.cnt);

            let latitude = parse_coordinate(lat)
                .with_context(|| format!("line {}: invalid lat '{}'", line, lat))?;
            let longitude = parse_coordinate(long)
                .with_context(|| format!("line {}: invalid long '{}'", line, long))?;
            let count =
                parse_count(cnt).with_context(|| format!("line {}: invalid cnt '{}'", line, cnt))?;

            parsed.records.push(TrafficRecord {
                state: state.to_string(),
                airport: airport.to_string(),
                city: city.to_string(),
                latitude,
                longitude,
                count,
            });
        }

        if parsed.dropped > 0 {
            log::info!(
                "[ATD Debug] record: dropped {} incomplete rows",
                parsed.dropped
            );
        }
        Ok(parsed)
    }
}
