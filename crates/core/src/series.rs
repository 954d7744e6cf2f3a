//! Per-selection chart series and the global daily-delta series.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::group_thousands;
use crate::table::TimeSeriesTable;

/// User-chosen scope for time-series charting: a country by exact,
/// case-sensitive name, or the global aggregate sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    World,
    Country(String),
}

/// The sentinel value selecting the global aggregate.
pub const WORLD: &str = "World";

impl Selection {
    /// Parses the raw input field value. Anything other than the exact
    /// sentinel is treated as a country name.
    pub fn parse(raw: &str) -> Self {
        if raw == WORLD {
            Self::World
        } else {
            Self::Country(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::World => WORLD,
            Self::Country(name) => name,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cumulative line of a chart: label, color, values aligned to the
/// chart's dates, and the latest-value tooltip text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesLine {
    pub metric: String,
    pub label: String,
    pub color: String,
    pub values: Vec<u64>,
    pub tooltip: String,
}

/// The three aligned cumulative series for one selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub selection: String,
    pub dates: Vec<String>,
    pub lines: Vec<SeriesLine>,
}

const LINE_STYLES: [(&str, &str, &str); 3] = [
    ("cases", "Cases", "orange"),
    ("deaths", "Deaths", "crimson"),
    ("recovered", "Recovered", "forestgreen"),
];

/// Builds the chart series for a selection.
///
/// `World` sums every row per date column; a named country filters to
/// exact matches (possibly several sub-region rows) and sums those. A
/// name matching zero rows in any table is `SelectionNotFound`, never a
/// silently flat zero series.
pub fn chart_series(
    selection: &Selection,
    cases: &TimeSeriesTable,
    deaths: &TimeSeriesTable,
    recovered: &TimeSeriesTable,
) -> Result<ChartSeries> {
    let tables = [cases, deaths, recovered];
    let mut lines = Vec::with_capacity(3);

    for (&(metric, label, color), table) in LINE_STYLES.iter().zip(tables) {
        let values = match selection {
            Selection::World => table.column_totals(),
            Selection::Country(name) => {
                table.sum_rows(table.rows_for_country(name), name)?
            }
        };
        let latest = values.last().copied().unwrap_or(0);
        lines.push(SeriesLine {
            metric: metric.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            tooltip: format!("Total {}: {}", metric, group_thousands(latest as i64)),
            values,
        });
    }

    Ok(ChartSeries {
        selection: selection.as_str().to_string(),
        dates: cases.dates.clone(),
        lines,
    })
}

/// One day-over-day increment of the global cumulative cases series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyDelta {
    pub date: String,
    pub new_cases: i64,
}

/// Successive differences of the global cumulative cases series.
///
/// The first date column has no predecessor and is dropped, so the
/// result has one fewer entry than the date axis. Global totals only;
/// the dashboard never shows a per-country daily series.
pub fn daily_new_cases(cases: &TimeSeriesTable) -> Vec<DailyDelta> {
    let totals = cases.column_totals();
    cases
        .dates
        .iter()
        .zip(&totals)
        .skip(1)
        .zip(&totals)
        .map(|((date, current), previous)| DailyDelta {
            date: date.clone(),
            new_cases: *current as i64 - *previous as i64,
        })
        .collect()
}
