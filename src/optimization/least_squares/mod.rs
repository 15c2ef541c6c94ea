//! least_squares — argmin-powered nonlinear least-squares minimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **minimizing
//! squared-error losses** `c(θ)`. Callers implement a single trait,
//! [`Objective`], and invoke [`minimize`] with one of a closed set of
//! [`Method`] strategies — L-BFGS with a configurable line search, or the
//! Nelder–Mead simplex — plus tolerances and iteration limits.
//!
//! Key behaviors
//! -------------
//! - Bridge user objectives into Argmin via [`adapter::ArgMinAdapter`],
//!   with robust finite-difference gradients (central, forward fallback)
//!   when no analytic gradient exists.
//! - Expose a single entrypoint [`minimize`] that validates the initial
//!   guess, builds the requested solver via [`builders`], executes it via
//!   the runners in [`run`], and normalizes results into a [`FitOutcome`].
//! - Centralize configuration ([`Tolerances`], [`FitOptions`]) and
//!   validation ([`validation`]) so downstream code can assume sane, finite
//!   inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The loss is minimized **directly**; no sign conventions exist anywhere
//!   in this module tree.
//! - [`Objective::value`] must treat invalid or degenerate parameter
//!   regions as recoverable [`FitError`](crate::optimization::errors::FitError)
//!   values — fail fast, never emit NaN/∞ silently.
//! - Vectors use the canonical aliases [`Theta`] and [`Grad`]; all are
//!   assumed finite whenever optimization proceeds.
//! - A solver stopping at its iteration cap is a *recorded outcome*
//!   (`converged == false`), not an error; callers decide what to do with
//!   non-converged fits.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`Objective`] for its types, then calls
//!   [`minimize`] once per requested method with a shared initial guess.
//! - Front-ends interact only with the re-exported surface: [`minimize`],
//!   [`Objective`], [`Method`], [`FitOptions`], [`Tolerances`],
//!   [`FitOutcome`], plus the numeric aliases from [`types`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover cost/gradient forwarding in
//!   [`adapter`], solver construction in [`builders`], and configuration
//!   plus outcome invariants in [`traits`].
//! - Integration tests exercise [`minimize`] on toy convex objectives
//!   (analytic-optimum recovery) and on the full resource-model loss.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{FitOptions, FitOutcome, LineSearcher, Method, Objective, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duckworth_lewis::optimization::least_squares::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{FitOptions, FitOutcome, LineSearcher, Method, Objective, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
