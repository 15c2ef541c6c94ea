//! duckworth_lewis — resource-model fitting for limited-overs cricket.
//!
//! Purpose
//! -------
//! Fit a Duckworth–Lewis style resource-depletion model to historical
//! first-innings data and report the fitted parameters alongside
//! resource-percentage curve artifacts. The model family is fixed: ten
//! per-wickets-in-hand asymptotes Z₁..Z₁₀ and one shared exponential decay
//! rate L, fitted by minimizing mean squared prediction error over cleaned
//! per-over samples.
//!
//! Key behaviors
//! -------------
//! - Ingest the per-over innings table and clean it into three aligned
//!   sample columns (`resource::records`, `resource::preprocess`).
//! - Evaluate the 11-parameter squared-error loss and drive one or more
//!   optimizer methods — L-BFGS and Nelder–Mead — from a shared fixed
//!   initial guess (`resource::model`, `optimization::least_squares`).
//! - Render one percentage-curve PNG per method, named deterministically
//!   from the method label (`report`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The pipeline is a deterministic-given-input, single-threaded batch:
//!   no retries, no warm starts between methods, no shared mutable state.
//! - Domain invariants (strictly positive overs remaining, wickets in
//!   1..=10, strictly positive Z) are validated once at container
//!   construction and fail fast thereafter.
//! - Non-convergence of a solver is a recorded diagnostic, not an error.
//!
//! Conventions
//! -----------
//! - Numeric vectors are `ndarray` types; the optimizer-space vector is
//!   `θ = [Z₁..Z₁₀ | L]` of length 11.
//! - Each layer owns a typed error enum (`DataError`, `ParamError`,
//!   `FitError`, `ReportError`) with `From` conversions upward; public
//!   fallible APIs return the layer's `Result` alias.
//! - The library performs no logging; the `dl-fit` binary owns progress
//!   reporting and console output.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: `read_match_records` → `preprocess` →
//!   `ResourceModel::fit` with a method list and a `CurvePlotter`.
//! - The `prelude` re-exports that surface in one line:
//!
//!   ```rust,no_run
//!   use duckworth_lewis::prelude::*;
//!   # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let records = read_match_records(std::path::Path::new("innings.csv"))?;
//!   let samples = preprocess(&records)?;
//!   let mut model = ResourceModel::new(FitConfig::default());
//!   let plotter = CurvePlotter::new("out");
//!   let fits = model.fit(&samples, &[Method::LBfgs, Method::NelderMead], &plotter)?;
//!   for fit in &fits {
//!       println!("{}: loss {:.3}, converged: {}", fit.method, fit.loss, fit.outcome.converged);
//!   }
//!   # Ok(())
//!   # }
//!   ```

pub mod optimization;
pub mod report;
pub mod resource;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duckworth_lewis::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::optimization::prelude::*;
    pub use crate::report::{CurvePlotter, CurveRenderer, ReportError, ReportResult};
    pub use crate::resource::prelude::*;
}
