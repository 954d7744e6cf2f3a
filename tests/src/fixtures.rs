//! Fixture CSVs, decoded through the production decoding path.
//!
//! Four dates, three countries (one with two sub-region rows). Global
//! cases column totals: 7, 9, 14, 20.

use dashboard_core::{DataContext, SnapshotTable, TimeSeriesTable};
use dashboard_source::{decode_snapshot, decode_time_series};

pub const CASES_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20,1/25/20
,Lithuania,55.1694,23.8813,1,2,4,8
Victoria,Australia,-37.8136,144.9631,5,6,7,9
Tasmania,Australia,-42.8821,147.3272,1,1,2,2
,Micronesia,6.8874,158.215,0,0,1,1
";

pub const DEATHS_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20,1/25/20
,Lithuania,55.1694,23.8813,0,0,1,1
Victoria,Australia,-37.8136,144.9631,0,1,1,2
Tasmania,Australia,-42.8821,147.3272,0,0,0,0
,Micronesia,6.8874,158.215,0,0,0,0
";

pub const RECOVERED_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20,1/25/20
,Lithuania,55.1694,23.8813,0,1,2,3
Victoria,Australia,-37.8136,144.9631,1,2,3,4
Tasmania,Australia,-42.8821,147.3272,0,1,1,1
,Micronesia,6.8874,158.215,0,0,0,1
";

/// Micronesia has no recovered figure; Narnia has no coordinates.
pub const SNAPSHOT_CSV: &str = "\
Country_Region,Last_Update,Lat,Long_,Confirmed,Deaths,Recovered,Active
Lithuania,2020-07-01,55.1694,23.8813,8,1,3,4
Australia,2020-07-01,-25.2744,133.7751,11,2,5,4
Micronesia,2020-07-01,6.8874,158.215,1,0,,
Narnia,2020-07-01,,,2,0,1,1
";

pub fn cases_table() -> TimeSeriesTable {
    decode_time_series("cases", CASES_CSV.as_bytes()).expect("cases fixture decodes")
}

pub fn deaths_table() -> TimeSeriesTable {
    decode_time_series("deaths", DEATHS_CSV.as_bytes()).expect("deaths fixture decodes")
}

pub fn recovered_table() -> TimeSeriesTable {
    decode_time_series("recovered", RECOVERED_CSV.as_bytes()).expect("recovered fixture decodes")
}

pub fn snapshot_table() -> SnapshotTable {
    decode_snapshot(SNAPSHOT_CSV.as_bytes()).expect("snapshot fixture decodes")
}

/// Builds the full validated context from the fixtures.
pub fn data_context() -> DataContext {
    DataContext::new(
        cases_table(),
        deaths_table(),
        recovered_table(),
        snapshot_table(),
    )
    .expect("fixture context validates")
}
