//! Execution helpers that run an `argmin` solver on a least-squares problem
//! and return a crate-friendly [`FitOutcome`].
//!
//! Two runners exist because Argmin's iteration state differs between solver
//! families: gradient-based solvers carry a gradient slot in their
//! `IterState`, the simplex does not. Both runners wire the same things —
//! initial parameters, the iteration cap, and terminal-state normalization.
use crate::optimization::{
    errors::FitResult,
    least_squares::{FitOptions, FitOutcome, Grad, Objective, Theta, adapter::ArgMinAdapter},
};
use argmin::core::{Executor, State};

/// Run a gradient-based `argmin` solver (e.g. L-BFGS) to completion.
///
/// Wires up the user problem via [`ArgMinAdapter`], sets `theta0` (consumed)
/// and the optional iteration cap, executes the solver, and converts the
/// terminal state into a [`FitOutcome`] — including the last available
/// gradient's norm.
///
/// # Errors
/// - Propagates any `argmin` runtime error (solver errors, line-search
///   failures, degenerate-parameter evaluations surfaced by the objective)
///   via the crate's `From<argmin::core::Error>` conversion.
/// - Propagates validation errors from [`FitOutcome::new`].
pub fn run_gradient_solver<'a, F, S>(
    theta0: Theta, opts: &FitOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> FitResult<FitOutcome>
where
    F: Objective,
    S: argmin::core::Solver<
            ArgMinAdapter<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    FitOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

/// Run a derivative-free simplex solver (Nelder–Mead) to completion.
///
/// Identical wiring to [`run_gradient_solver`] over the gradient-free
/// `IterState`; the resulting outcome carries `grad_norm = None`.
///
/// # Errors
/// Same contract as [`run_gradient_solver`].
pub fn run_simplex_solver<'a, F, S>(
    theta0: Theta, opts: &FitOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> FitResult<FitOutcome>
where
    F: Objective,
    S: argmin::core::Solver<
            ArgMinAdapter<'a, F>,
            argmin::core::IterState<Theta, (), (), (), (), f64>,
        > + Send
        + 'static,
{
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    FitOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        None,
    )
}
