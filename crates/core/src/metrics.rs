//! Global derived metrics: totals, day-over-day changes, and the two
//! epidemiological ratios.
//!
//! Everything here reads the last two date columns of the aligned
//! time-series tables. Computed once at load; immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::{format_change, group_thousands};
use crate::table::TimeSeriesTable;

/// Total and change for one metric, with display-formatted variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    pub total: i64,
    pub change: i64,
    pub total_display: String,
    pub change_display: String,
}

impl MetricSummary {
    pub fn new(total: i64, change: i64) -> Self {
        Self {
            total,
            change,
            total_display: group_thousands(total),
            change_display: format_change(change),
        }
    }
}

/// Global derived metrics over the three time-series tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub cases: MetricSummary,
    pub deaths: MetricSummary,
    pub recovered: MetricSummary,
    /// Derived as `cases - deaths - recovered`, never fetched.
    pub active: MetricSummary,
    /// Case-fatality ratio in percent, `None` on degenerate input.
    pub fatality_ratio: Option<f64>,
    /// Recovery ratio in percent, `None` on degenerate input.
    pub recovery_ratio: Option<f64>,
}

/// Case-fatality ratio per the WHO estimate: deaths as a percentage of
/// resolved cases (`deaths + recovered`), not of cumulative cases,
/// avoiding bias from unresolved open cases. Rounded to 2 decimals.
pub fn fatality_ratio(deaths: u64, recovered: u64) -> Result<f64> {
    let resolved = deaths + recovered;
    if resolved == 0 {
        return Err(Error::degenerate_ratio(
            "fatality ratio: deaths + recovered is zero",
        ));
    }
    Ok(round2(deaths as f64 * 100.0 / resolved as f64))
}

/// Recovery ratio: recovered as a percentage of total confirmed cases.
/// The denominator deliberately differs from the fatality ratio's.
pub fn recovery_ratio(recovered: u64, cases: u64) -> Result<f64> {
    if cases == 0 {
        return Err(Error::degenerate_ratio("recovery ratio: cases is zero"));
    }
    Ok(round2(recovered as f64 * 100.0 / cases as f64))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Last column total and its change versus the second-to-last column.
fn total_and_change(table: &TimeSeriesTable) -> Result<(u64, i64)> {
    let totals = table.column_totals();
    let n = totals.len();
    if n < 2 {
        return Err(Error::schema_mismatch(format!(
            "need at least two date columns to compute a change, found {}",
            n
        )));
    }
    Ok((totals[n - 1], totals[n - 1] as i64 - totals[n - 2] as i64))
}

impl DerivedMetrics {
    /// Computes the global metrics from the three aligned tables.
    ///
    /// Degenerate ratio denominators (all-zero input) leave the ratio
    /// unset rather than failing the whole load; the ratio functions
    /// themselves report the condition for callers that need it.
    pub fn compute(
        cases: &TimeSeriesTable,
        deaths: &TimeSeriesTable,
        recovered: &TimeSeriesTable,
    ) -> Result<Self> {
        let (total_cases, change_cases) = total_and_change(cases)?;
        let (total_deaths, change_deaths) = total_and_change(deaths)?;
        let (total_recovered, change_recovered) = total_and_change(recovered)?;

        let total_active =
            total_cases as i64 - total_deaths as i64 - total_recovered as i64;
        let change_active = change_cases - change_deaths - change_recovered;

        Ok(Self {
            cases: MetricSummary::new(total_cases as i64, change_cases),
            deaths: MetricSummary::new(total_deaths as i64, change_deaths),
            recovered: MetricSummary::new(total_recovered as i64, change_recovered),
            active: MetricSummary::new(total_active, change_active),
            fatality_ratio: fatality_ratio(total_deaths, total_recovered).ok(),
            recovery_ratio: recovery_ratio(total_recovered, total_cases).ok(),
        })
    }
}
