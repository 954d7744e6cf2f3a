//! CSV decoding into the core table types.
//!
//! Headers are matched case-insensitively after the unifying renames in
//! `dashboard_core::table::normalize_header`. In a time-series table,
//! every header that is not a meta column is a date column, in source
//! order. Missing sub-region values normalize to the empty string, and
//! missing coordinates to `None`.

use std::collections::HashMap;

use csv::ReaderBuilder;
use dashboard_core::table::{normalize_header, META_COLUMNS};
use dashboard_core::{CountrySnapshot, Error, Result, SnapshotTable, TimeSeriesRow, TimeSeriesTable};

/// Decoded header layout of a table.
struct Header {
    /// normalized name -> column index
    columns: HashMap<String, usize>,
    /// (index, label) of every date column, in source order
    date_columns: Vec<(usize, String)>,
}

fn decode_header(raw: &csv::StringRecord) -> Header {
    let mut columns = HashMap::new();
    let mut date_columns = Vec::new();
    for (i, field) in raw.iter().enumerate() {
        let normalized = normalize_header(field);
        if !META_COLUMNS.contains(&normalized.as_str()) {
            // In a time-series table every non-meta column is a date.
            // The snapshot decoder ignores this and looks its named
            // columns up in the map instead.
            date_columns.push((i, normalized.clone()));
        }
        columns.entry(normalized).or_insert(i);
    }
    Header {
        columns,
        date_columns,
    }
}

fn get_str<'a>(record: &'a csv::StringRecord, idx: Option<&usize>) -> &'a str {
    idx.and_then(|&i| record.get(i)).unwrap_or("").trim()
}

fn parse_coord(raw: &str) -> Result<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| Error::decode(format!("invalid coordinate {:?}", raw)))?;
    if value.is_nan() {
        return Ok(None);
    }
    Ok(Some(value))
}

/// Parses a count cell. Empty cells are zero; some sources serialize
/// integer counts as floats ("123.0"), so a float fallback truncates.
fn parse_count(raw: &str) -> Result<u64> {
    if raw.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Ok(f as u64),
        _ => Err(Error::decode(format!("invalid count {:?}", raw))),
    }
}

fn parse_optional_count(raw: &str) -> Result<Option<u64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_count(raw).map(Some)
}

/// Decodes a cumulative time-series CSV (cases, deaths, or recovered).
pub fn decode_time_series(name: &str, bytes: &[u8]) -> Result<TimeSeriesTable> {
    let mut reader = ReaderBuilder::new().from_reader(bytes);
    let header = reader
        .headers()
        .map_err(|e| Error::data_unavailable(format!("{}: unreadable header: {}", name, e)))
        .map(|h| decode_header(h))?;

    if !header.columns.contains_key("country") {
        return Err(Error::schema_mismatch(format!(
            "{}: no country column after normalization",
            name
        )));
    }
    if header.date_columns.is_empty() {
        return Err(Error::schema_mismatch(format!("{}: no date columns", name)));
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| Error::data_unavailable(format!("{}: row {}: {}", name, line, e)))?;

        let mut counts = Vec::with_capacity(header.date_columns.len());
        for (idx, label) in &header.date_columns {
            let raw = record.get(*idx).unwrap_or("").trim();
            counts.push(parse_count(raw).map_err(|e| {
                Error::decode(format!("{}: row {}, column {:?}: {}", name, line, label, e))
            })?);
        }

        rows.push(TimeSeriesRow {
            state: get_str(&record, header.columns.get("state")).to_string(),
            country: get_str(&record, header.columns.get("country")).to_string(),
            lat: parse_coord(get_str(&record, header.columns.get("lat")))?,
            long: parse_coord(get_str(&record, header.columns.get("long")))?,
            counts,
        });
    }

    Ok(TimeSeriesTable {
        dates: header.date_columns.into_iter().map(|(_, d)| d).collect(),
        rows,
    })
}

/// Decodes the per-country snapshot CSV.
pub fn decode_snapshot(bytes: &[u8]) -> Result<SnapshotTable> {
    let mut reader = ReaderBuilder::new().from_reader(bytes);
    let header = reader
        .headers()
        .map_err(|e| Error::data_unavailable(format!("snapshot: unreadable header: {}", e)))
        .map(|h| decode_header(h))?;

    for required in ["country", "confirmed", "deaths"] {
        if !header.columns.contains_key(required) {
            return Err(Error::schema_mismatch(format!(
                "snapshot: missing {:?} column after normalization",
                required
            )));
        }
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| Error::data_unavailable(format!("snapshot: row {}: {}", line, e)))?;

        let at = |column: &str| get_str(&record, header.columns.get(column));
        rows.push(CountrySnapshot {
            country: at("country").to_string(),
            lat: parse_coord(at("lat"))?,
            long: parse_coord(at("long"))?,
            confirmed: parse_count(at("confirmed"))
                .map_err(|e| Error::decode(format!("snapshot: row {}: {}", line, e)))?,
            deaths: parse_count(at("deaths"))
                .map_err(|e| Error::decode(format!("snapshot: row {}: {}", line, e)))?,
            recovered: parse_optional_count(at("recovered"))?,
        });
    }

    Ok(SnapshotTable { rows })
}
