//! optimization — least-squares stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting: an Argmin-backed
//! least-squares minimizer behind a small trait, a closed set of solver
//! strategies selected by name, and a single error/result surface. Callers
//! implement a loss, choose tolerances and a method, and obtain fitted
//! parameters and diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing squared-error losses** `c(θ)`
//!   (`least_squares`), including solver selection and stopping criteria.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::FitError`) with a common result
//!   alias (`FitResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Solvers operate on an unconstrained parameter vector θ and assume
//!   inputs are finite once validation has passed; invalid states are
//!   reported as `FitError`, not panics.
//! - Loss implementations treat domain violations (degenerate Z values,
//!   malformed θ) as recoverable errors surfaced through this layer —
//!   domain discipline comes from the initial guess, not from box
//!   constraints.
//!
//! Conventions
//! -----------
//! - Parameters and gradients are `ndarray`-based aliases (`Theta`, `Grad`).
//! - Public optimization entrypoints that can fail return `FitResult<T>`;
//!   callers never see raw Argmin errors.
//! - This module and its submodules avoid I/O and logging; higher layers
//!   (the CLI, the curve reporter) are responsible for reporting progress
//!   and artifacts.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: solver wiring,
//!   tolerance handling, adapter sign-free forwarding, and error
//!   conversions.
//! - Integration tests exercise end-to-end minimization, verifying that
//!   configuration mistakes and degenerate evaluations surface as sensible
//!   `FitError` values and that successful runs produce stable
//!   `FitOutcome`s.

pub mod errors;
pub mod least_squares;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duckworth_lewis::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{FitError, FitResult};
    pub use super::least_squares::prelude::*;
}
