//! Validated sample container for first-innings resource modeling.
//!
//! Purpose
//! -------
//! Provide the single container, [`InningsSamples`], holding the three
//! index-aligned columns the loss function consumes: runs remaining, overs
//! remaining, and wickets in hand. Centralizing validation here lets the
//! loss and curve code assume clean columns without re-checking.
//!
//! Key behaviors
//! -------------
//! - Enforces equal column lengths, non-emptiness, finiteness, strictly
//!   positive overs remaining, and wickets in hand within 1..=10 at
//!   construction time.
//! - Permits zero and negative runs remaining: those samples stay in the
//!   columns (they count toward the loss normalization) even though the
//!   loss excludes them from the squared-error sum.
//!
//! Invariants & assumptions
//! ------------------------
//! - `runs_remaining.len() == overs_remaining.len() == wickets_in_hand.len() > 0`.
//! - Every overs-remaining entry is finite and `> 0`.
//! - Every wickets-in-hand entry is in `1..=10`.
//! - Every runs-remaining entry is finite (sign unrestricted).
//!
//! Downstream usage
//! ----------------
//! - Built by `resource::preprocess::preprocess` from cleaned match records;
//!   tests may construct instances directly from synthetic columns.
//! - Consumed read-only by the loss function and the fit driver; nothing
//!   mutates a container after construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejected invariant (length
//!   mismatch, empty columns, non-finite values, zero overs, out-of-domain
//!   wickets).
use crate::resource::errors::{DataError, DataResult};
use ndarray::Array1;

/// Index-aligned first-innings samples: the unit of data the model fits.
///
/// One entry per cleaned match-record row. Column invariants are enforced by
/// [`InningsSamples::new`]; see the module docs for the full list.
#[derive(Debug, Clone, PartialEq)]
pub struct InningsSamples {
    /// Runs still to be scored from this point (finite, may be ≤ 0).
    pub runs_remaining: Array1<f64>,
    /// Overs still available from this point (finite, > 0).
    pub overs_remaining: Array1<f64>,
    /// Wickets the batting side can still afford to lose (1..=10).
    pub wickets_in_hand: Array1<u8>,
}

impl InningsSamples {
    /// Construct a validated [`InningsSamples`] from three aligned columns.
    ///
    /// Validation is a single pass per column, stopping at the first
    /// offending element.
    ///
    /// # Errors
    /// - [`DataError::ColumnLengthMismatch`] if the columns differ in length.
    /// - [`DataError::EmptySamples`] if the columns are empty.
    /// - [`DataError::NonFiniteRuns`] / [`DataError::NonFiniteOvers`] for
    ///   NaN/±∞ entries, with the first offending index and value.
    /// - [`DataError::NonPositiveOvers`] if any overs-remaining entry is ≤ 0.
    /// - [`DataError::WicketsOutOfDomain`] if any wickets entry is 0 or > 10.
    pub fn new(
        runs_remaining: Array1<f64>, overs_remaining: Array1<f64>, wickets_in_hand: Array1<u8>,
    ) -> DataResult<Self> {
        if runs_remaining.len() != overs_remaining.len()
            || overs_remaining.len() != wickets_in_hand.len()
        {
            return Err(DataError::ColumnLengthMismatch {
                runs: runs_remaining.len(),
                overs: overs_remaining.len(),
                wickets: wickets_in_hand.len(),
            });
        }
        if runs_remaining.is_empty() {
            return Err(DataError::EmptySamples);
        }

        for (index, &value) in runs_remaining.iter().enumerate() {
            if !value.is_finite() {
                return Err(DataError::NonFiniteRuns { index, value });
            }
        }
        for (index, &value) in overs_remaining.iter().enumerate() {
            if !value.is_finite() {
                return Err(DataError::NonFiniteOvers { index, value });
            }
            if value <= 0.0 {
                return Err(DataError::NonPositiveOvers { index, value });
            }
        }
        for (index, &wickets) in wickets_in_hand.iter().enumerate() {
            if wickets == 0 || wickets > 10 {
                return Err(DataError::WicketsOutOfDomain { index, wickets });
            }
        }

        Ok(InningsSamples { runs_remaining, overs_remaining, wickets_in_hand })
    }

    /// Number of samples (the loss normalizes by this count, including
    /// samples with non-positive runs remaining).
    pub fn len(&self) -> usize {
        self.runs_remaining.len()
    }

    /// True when the container holds no samples. Construction rejects this
    /// state, so it can only be observed through manual field surgery.
    pub fn is_empty(&self) -> bool {
        self.runs_remaining.is_empty()
    }
}
