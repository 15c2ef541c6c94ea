//! Raw per-over match records and delimited-file ingestion.
//!
//! Purpose
//! -------
//! Define the [`MatchRecord`] row type and the loaders that bring the
//! historical innings table into memory. Ingestion is deliberately thin: it
//! deserializes the required columns and nothing else. All cleaning lives in
//! `resource::preprocess`.
//!
//! Conventions
//! -----------
//! - Column headers follow the source dataset's dotted names
//!   (`Total.Overs`, `Wickets.in.Hand`, …), mapped via serde renames.
//! - A missing or malformed required column is **fatal**: the pipeline
//!   cannot proceed without it, so the row error is surfaced immediately
//!   rather than skipped. Unknown extra columns are ignored.
//! - Loaders exist in reader form so tests can parse in-memory bytes
//!   without temp files.
use crate::resource::errors::{DataError, DataResult};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One per-over row of the historical innings table.
///
/// Fields mirror the source columns; no derived quantities are stored here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchRecord {
    /// Innings number (1 or 2); only first-innings rows are modeled.
    #[serde(rename = "Innings")]
    pub innings: u8,
    /// Match identifier grouping rows of the same innings.
    #[serde(rename = "Match")]
    pub match_id: u32,
    /// Over number within the innings (0–50).
    #[serde(rename = "Over")]
    pub over: u32,
    /// Overs allotted to the innings.
    #[serde(rename = "Total.Overs")]
    pub total_overs: u32,
    /// Cumulative runs scored up to this over.
    #[serde(rename = "Total.Runs")]
    pub total_runs: f64,
    /// Final total of the innings.
    #[serde(rename = "Innings.Total.Runs")]
    pub innings_total_runs: f64,
    /// Wickets the batting side can still afford to lose (0–10).
    #[serde(rename = "Wickets.in.Hand")]
    pub wickets_in_hand: u8,
    /// Data-quality flag; rows with 1 are dropped during preprocessing.
    #[serde(rename = "Error.In.Data")]
    pub error_in_data: u8,
}

/// Deserialize match records from any reader.
///
/// `origin` labels the source in errors (a path for files, a short tag for
/// in-memory tables).
///
/// # Errors
/// - [`DataError::CsvRecord`] on the first row that fails to deserialize —
///   including a missing required column, which `csv` reports on every row.
pub fn load_match_records_from_reader<R: Read>(
    rdr: R, origin: &str,
) -> DataResult<Vec<MatchRecord>> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();
    for row in reader.deserialize::<MatchRecord>() {
        let record = row.map_err(|e| DataError::CsvRecord {
            path: origin.to_string(),
            text: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read match records from a delimited file on disk.
///
/// # Errors
/// - [`DataError::CsvOpen`] if the file cannot be opened.
/// - [`DataError::CsvRecord`] for the first malformed row (see
///   [`load_match_records_from_reader`]).
pub fn read_match_records(path: &Path) -> DataResult<Vec<MatchRecord>> {
    let file = File::open(path).map_err(|e| DataError::CsvOpen {
        path: path.display().to_string(),
        text: e.to_string(),
    })?;
    load_match_records_from_reader(file, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Deserialization of the dotted column headers.
    // - Fatal behavior on a missing required column.
    // - Tolerance of extra, unused columns.
    // -------------------------------------------------------------------------

    const HEADER: &str =
        "Match,Innings,Over,Total.Overs,Total.Runs,Innings.Total.Runs,Wickets.in.Hand,Error.In.Data";

    #[test]
    // Purpose
    // -------
    // A well-formed table parses into records with all fields mapped.
    fn loader_parses_dotted_headers() {
        let table = format!("{HEADER}\n1001,1,0,50,0,260,10,0\n1001,1,1,50,7,260,10,0\n");

        let records =
            load_match_records_from_reader(table.as_bytes(), "inline").expect("valid table");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].match_id, 1001);
        assert_eq!(records[0].innings, 1);
        assert_eq!(records[0].total_overs, 50);
        assert_eq!(records[1].total_runs, 7.0);
        assert_eq!(records[1].innings_total_runs, 260.0);
        assert_eq!(records[1].wickets_in_hand, 10);
        assert_eq!(records[1].error_in_data, 0);
    }

    #[test]
    // Purpose
    // -------
    // A missing required column is fatal and reports the origin label.
    //
    // Given
    // -----
    // - A table without the `Wickets.in.Hand` column.
    //
    // Expect
    // ------
    // - `Err(DataError::CsvRecord { path: "inline", .. })`.
    fn loader_fails_fast_on_missing_column() {
        let table = "Match,Innings,Over,Total.Overs,Total.Runs,Innings.Total.Runs,Error.In.Data\n\
                     1001,1,0,50,0,260,0\n";

        let result = load_match_records_from_reader(table.as_bytes(), "inline");

        match result.unwrap_err() {
            DataError::CsvRecord { path, .. } => assert_eq!(path, "inline"),
            other => panic!("expected CsvRecord, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Columns this crate does not model (venue, dates, interruption notes in
    // source exports) are ignored rather than rejected.
    fn loader_ignores_extra_columns() {
        let table = format!("{HEADER},Ground\n1001,1,3,50,21,260,9,0,Eden Gardens\n");

        let records =
            load_match_records_from_reader(table.as_bytes(), "inline").expect("extra column ok");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].over, 3);
    }
}
