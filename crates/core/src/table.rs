//! Tabular source data: time-series tables and the country snapshot.
//!
//! Column names are matched after lowercasing, with a small set of
//! renames unifying the schemas of the three time-series tables and the
//! snapshot table:
//!
//! - `province/state` -> `state`
//! - `country/region` and `country_region` -> `country`
//! - `long_` -> `long`
//!
//! Everything that is not a known meta column is a date column, in
//! source order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Meta columns of a time-series table after normalization. Any other
/// header is a date label.
pub const META_COLUMNS: [&str; 4] = ["state", "country", "lat", "long"];

/// Normalizes a raw CSV header to the unified schema.
pub fn normalize_header(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    match lower.as_str() {
        "province/state" => "state".to_string(),
        "country/region" | "country_region" => "country".to_string(),
        "long_" => "long".to_string(),
        _ => lower,
    }
}

/// One (country, state) row of a time-series table, with counts aligned
/// to the owning table's date columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    /// Sub-region; empty string when the source has none.
    #[serde(default)]
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub counts: Vec<u64>,
}

/// A cumulative time-series table (cases, deaths, or recovered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesTable {
    /// Ordered date labels, one per count column.
    pub dates: Vec<String>,
    pub rows: Vec<TimeSeriesRow>,
}

impl TimeSeriesTable {
    /// Sums every row per date column.
    pub fn column_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.dates.len()];
        for row in &self.rows {
            for (total, count) in totals.iter_mut().zip(&row.counts) {
                *total += count;
            }
        }
        totals
    }

    /// Sums the given rows per date column. Errors on an empty row set:
    /// summing over nothing would silently plot a flat zero series.
    pub fn sum_rows<'a, I>(&self, rows: I, selection: &str) -> Result<Vec<u64>>
    where
        I: IntoIterator<Item = &'a TimeSeriesRow>,
    {
        let mut totals = vec![0u64; self.dates.len()];
        let mut matched = false;
        for row in rows {
            matched = true;
            for (total, count) in totals.iter_mut().zip(&row.counts) {
                *total += count;
            }
        }
        if !matched {
            return Err(Error::selection_not_found(selection));
        }
        Ok(totals)
    }

    /// Rows matching a country by exact, case-sensitive name. Multiple
    /// rows are expected for countries reported per sub-region.
    pub fn rows_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a TimeSeriesRow> + 'a {
        self.rows.iter().filter(move |r| r.country == country)
    }

    /// The latest count of a row (last date column), zero for a row
    /// shorter than the date axis.
    pub fn latest_count(row: &TimeSeriesRow) -> u64 {
        row.counts.last().copied().unwrap_or(0)
    }
}

/// Verifies that every row carries exactly one count per date column.
pub fn validate_row_widths(name: &str, table: &TimeSeriesTable) -> Result<()> {
    for (i, row) in table.rows.iter().enumerate() {
        if row.counts.len() != table.dates.len() {
            return Err(Error::schema_mismatch(format!(
                "{} row {} ({}) has {} counts for {} date columns",
                name,
                i,
                row.country,
                row.counts.len(),
                table.dates.len()
            )));
        }
    }
    Ok(())
}

/// Verifies the cross-table invariant: all three time-series tables
/// share identical date columns in identical order. Delta and sum
/// computations are meaningless otherwise.
pub fn validate_aligned(
    cases: &TimeSeriesTable,
    deaths: &TimeSeriesTable,
    recovered: &TimeSeriesTable,
) -> Result<()> {
    validate_row_widths("cases", cases)?;
    validate_row_widths("deaths", deaths)?;
    validate_row_widths("recovered", recovered)?;

    for (name, other) in [("deaths", deaths), ("recovered", recovered)] {
        if other.dates != cases.dates {
            return Err(Error::schema_mismatch(format!(
                "{} table has {} date columns, cases table has {} (or ordering differs)",
                name,
                other.dates.len(),
                cases.dates.len()
            )));
        }
    }
    Ok(())
}

/// Current totals for one country at the latest date.
///
/// Independently sourced from the time-series tables; country coverage
/// may differ and `recovered` can be absent entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySnapshot {
    pub country: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub confirmed: u64,
    pub deaths: u64,
    /// `None` when the source reports no recovered figure. Zero for
    /// arithmetic and ranking; tooltips render a distinct label.
    pub recovered: Option<u64>,
}

impl CountrySnapshot {
    pub fn has_recovered(&self) -> bool {
        self.recovered.is_some()
    }

    pub fn recovered_or_zero(&self) -> u64 {
        self.recovered.unwrap_or(0)
    }

    /// Active is derived, never fetched:
    /// `confirmed - deaths - recovered` (missing recovered zeroed).
    pub fn active(&self) -> i64 {
        self.confirmed as i64 - self.deaths as i64 - self.recovered_or_zero() as i64
    }
}

/// The latest-snapshot table, one row per country in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTable {
    pub rows: Vec<CountrySnapshot>,
}

impl SnapshotTable {
    /// Countries sorted by confirmed count, descending. The sort is
    /// stable: ties keep their source order.
    pub fn ranked(&self) -> Vec<CountrySnapshot> {
        let mut ranked = self.rows.clone();
        ranked.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));
        ranked
    }
}
