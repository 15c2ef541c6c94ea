//! least_squares::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! least-squares optimizer. By defining these in one place, the rest of the
//! optimization code stays agnostic to `ndarray` and Argmin generics and can
//! evolve more easily if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, gradients, and scalar
//!   costs (`Theta`, `Grad`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose pre-wired solver aliases: L-BFGS per line-search strategy plus
//!   the Nelder–Mead simplex, all over the common `(Theta, Grad, Cost)`
//!   shapes.
//!
//! Conventions
//! -----------
//! - All optimizer vectors are `ndarray` containers over `f64`; `Theta` and
//!   `Grad` are conceptually column vectors of length 11 for this crate's
//!   loss, though the aliases themselves carry no fixed length.
//! - `Cost` is the mean squared prediction error — minimized directly, with
//!   no sign convention to track.
//! - `DEFAULT_LBFGS_MEM` encodes the typical history size for L-BFGS;
//!   callers may override it via per-run options.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    neldermead::NelderMead,
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector θ for least-squares minimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Gradient vector ∇c(θ), matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value minimized by the solvers (mean squared error).
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager–Zhang line search specialized to this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;

/// Nelder–Mead simplex solver over the crate's numeric types.
pub type NelderMeadSimplex = NelderMead<Theta, Cost>;
