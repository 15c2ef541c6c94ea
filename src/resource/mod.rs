//! resource — the Duckworth–Lewis resource-model domain layer.
//!
//! Purpose
//! -------
//! Everything specific to limited-overs innings data and the resource-decay
//! model lives here: raw record ingestion, the cleaning pipeline, validated
//! sample and parameter containers, the squared-error loss, and the
//! multi-method fit driver.
//!
//! Key behaviors
//! -------------
//! - [`records`] deserializes the historical per-over table (fatal on
//!   missing required columns).
//! - [`preprocess`] applies the fixed filter/transform sequence that yields
//!   three aligned sample columns; malformed rows are dropped silently by
//!   design.
//! - [`core`] holds the validated containers, initial-guess policies, and
//!   the exponential decay family.
//! - [`model`] evaluates the loss and drives the per-method fit loop,
//!   reporting each method's curve artifact as soon as it finishes.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples reaching the loss satisfy the container invariants (overs > 0,
//!   wickets in 1..=10, finite values); the pipeline guarantees them once.
//! - The whole layer is single-threaded batch computation: methods run
//!   sequentially, sharing only read-only sample columns.
//!
//! Downstream usage
//! ----------------
//! - The `dl-fit` binary strings these pieces together:
//!   `records::read_match_records` → `preprocess::preprocess` →
//!   `model::ResourceModel::fit` with a
//!   [`CurvePlotter`](crate::report::CurvePlotter).

pub mod core;
pub mod errors;
pub mod model;
pub mod preprocess;
pub mod records;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{InitialGuess, InningsSamples, ResourceParams};
pub use self::errors::{DataError, DataResult, ParamError, ParamResult};
pub use self::model::{FitConfig, MethodFit, ResourceModel, sse_loss};
pub use self::preprocess::preprocess;
pub use self::records::{MatchRecord, read_match_records};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::core::{
        InitialGuess, InningsSamples, ResourceParams, expected_runs, percentage_curves,
    };
    pub use super::errors::{DataError, DataResult, ParamError, ParamResult};
    pub use super::model::{FitConfig, MethodFit, ResourceModel};
    pub use super::preprocess::preprocess;
    pub use super::records::{MatchRecord, read_match_records};
}
