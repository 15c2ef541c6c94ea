//! Errors for the resource-model domain layer (ingestion, preprocessing,
//! sample containers, and parameter validation).
//!
//! This module defines a data error type, [`DataError`], covering CSV
//! ingestion and sample-container invariants, and a parameter error type,
//! [`ParamError`], covering the Z/L parameter vector. Both implement
//! `Display`/`Error`.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to positions in the aligned sample
//!   columns, not to rows of the raw CSV.
//! - Overs remaining must be **strictly positive and finite**; wickets in
//!   hand must lie in **1..=10** — both are enforced at container
//!   construction, so downstream code never re-checks them.
//! - CSV backend failures are captured as text: error types here are
//!   `Clone + PartialEq` for use in test assertions, which rules out owning
//!   a `csv::Error`.

/// Result alias for ingestion/preprocessing paths that may produce
/// [`DataError`].
pub type DataResult<T> = Result<T, DataError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for match-data ingestion and sample validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- Ingestion ----
    /// Failed to open or read the delimited input file.
    CsvOpen { path: String, text: String },

    /// A row failed to deserialize (missing or malformed required column).
    CsvRecord { path: String, text: String },

    // ---- Sample container validation ----
    /// Preprocessing produced no usable samples.
    EmptySamples,

    /// The three sample columns must have equal lengths.
    ColumnLengthMismatch { runs: usize, overs: usize, wickets: usize },

    /// A runs-remaining value is NaN/±inf.
    NonFiniteRuns { index: usize, value: f64 },

    /// An overs-remaining value is NaN/±inf.
    NonFiniteOvers { index: usize, value: f64 },

    /// An overs-remaining value is ≤ 0 (filtered upstream; never valid here).
    NonPositiveOvers { index: usize, value: f64 },

    /// A wickets-in-hand value lies outside 1..=10.
    WicketsOutOfDomain { index: usize, wickets: u8 },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::CsvOpen { path, text } => {
                write!(f, "Failed to open match data '{path}': {text}")
            }
            DataError::CsvRecord { path, text } => {
                write!(f, "Failed to parse match data row in '{path}': {text}")
            }
            DataError::EmptySamples => {
                write!(f, "No usable samples after preprocessing")
            }
            DataError::ColumnLengthMismatch { runs, overs, wickets } => {
                write!(
                    f,
                    "Sample columns must align: runs {runs}, overs {overs}, wickets {wickets}"
                )
            }
            DataError::NonFiniteRuns { index, value } => {
                write!(f, "Non-finite runs remaining at index {index}: {value}")
            }
            DataError::NonFiniteOvers { index, value } => {
                write!(f, "Non-finite overs remaining at index {index}: {value}")
            }
            DataError::NonPositiveOvers { index, value } => {
                write!(f, "Overs remaining must be > 0 at index {index}: {value}")
            }
            DataError::WicketsOutOfDomain { index, wickets } => {
                write!(f, "Wickets in hand must be in 1..=10 at index {index}: {wickets}")
            }
        }
    }
}

/// Error type for the Z/L parameter vector.
///
/// Raised when materializing parameters from an optimizer-space θ or when
/// mapping a wickets-in-hand bucket to its Z slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// θ must have exactly `expected` entries (Z₁..Z₁₀ then L).
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// A θ entry is NaN/±inf.
    NonFiniteTheta { index: usize, value: f64 },

    /// A Z parameter is ≤ 0; the decay form divides by Z.
    DegenerateZ { bucket: usize, value: f64 },

    /// Wickets-in-hand bucket outside 1..=10 at parameter lookup.
    WicketsOutOfDomain { wickets: u8 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, actual {actual}")
            }
            ParamError::NonFiniteTheta { index, value } => {
                write!(f, "Non-finite parameter at index {index}: {value}")
            }
            ParamError::DegenerateZ { bucket, value } => {
                write!(f, "Degenerate Z for wickets bucket {bucket}: {value}, must be > 0")
            }
            ParamError::WicketsOutOfDomain { wickets } => {
                write!(f, "Wickets in hand {wickets} outside the parameter domain 1..=10")
            }
        }
    }
}
