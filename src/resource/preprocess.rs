//! Cleaning pipeline from raw match records to aligned innings samples.
//!
//! Purpose
//! -------
//! Turn the raw per-over table into the three aligned columns the loss
//! function consumes. Every step is an unconditional filter or transform:
//! rows outside the modeling domain are dropped silently, never reported.
//!
//! Steps, in order
//! ---------------
//! 1. Keep only first-innings rows (second-innings chases follow target
//!    dynamics this model does not describe).
//! 2. Duplicate every row at over 49 with the over reset to 50 and append
//!    the duplicates. Datasets that number the final over 49 would otherwise
//!    contribute no anchor-adjacent sample near zero overs remaining.
//! 3. Drop rows flagged erroneous (`error_in_data == 1`).
//! 4. Compute `overs_remaining = total_overs − over`; drop rows where it is
//!    exactly 0 (no resource left to model).
//! 5. Drop rows with zero wickets in hand (all-out is terminal).
//! 6. Compute `runs_remaining = innings_total_runs − total_runs`.
//!
//! No interruption-based match filtering is applied.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output columns are index-aligned 1:1 with the surviving rows, in row
//!   order (originals first, over-49 duplicates appended after).
//! - The pipeline is idempotent on already-clean input: rows that would
//!   survive the filters pass through unchanged, and the appended anchor
//!   duplicates only survive when the innings allotment exceeds 50 overs.
use crate::resource::{
    core::samples::InningsSamples,
    errors::DataResult,
    records::MatchRecord,
};
use ndarray::Array1;

/// Over number that triggers the anchor duplication (step 2).
const ANCHOR_SOURCE_OVER: u32 = 49;

/// Over number assigned to the appended anchor duplicates.
const ANCHOR_TARGET_OVER: u32 = 50;

/// Run the cleaning pipeline over raw records.
///
/// # Errors
/// - [`DataError::EmptySamples`](crate::resource::errors::DataError) when no
///   rows survive the filters; column invariants are re-checked by
///   [`InningsSamples::new`] and cannot fail for rows this pipeline emits.
pub fn preprocess(records: &[MatchRecord]) -> DataResult<InningsSamples> {
    // Steps 1 and 2 build the working row set; steps 3–6 run per row below.
    let mut working: Vec<MatchRecord> =
        records.iter().filter(|r| r.innings == 1).cloned().collect();
    let anchors: Vec<MatchRecord> = working
        .iter()
        .filter(|r| r.over == ANCHOR_SOURCE_OVER)
        .map(|r| {
            let mut dup = r.clone();
            dup.over = ANCHOR_TARGET_OVER;
            dup
        })
        .collect();
    working.extend(anchors);

    let mut runs_remaining = Vec::with_capacity(working.len());
    let mut overs_remaining = Vec::with_capacity(working.len());
    let mut wickets_in_hand = Vec::with_capacity(working.len());
    for record in &working {
        if record.error_in_data == 1 {
            continue;
        }
        let overs = f64::from(record.total_overs) - f64::from(record.over);
        if overs == 0.0 {
            continue;
        }
        if record.wickets_in_hand == 0 {
            continue;
        }
        runs_remaining.push(record.innings_total_runs - record.total_runs);
        overs_remaining.push(overs);
        wickets_in_hand.push(record.wickets_in_hand);
    }

    InningsSamples::new(
        Array1::from_vec(runs_remaining),
        Array1::from_vec(overs_remaining),
        Array1::from_vec(wickets_in_hand),
    )
}
