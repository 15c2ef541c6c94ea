//! High-level entry point for minimizing a user-provided [`Objective`].
//!
//! This dispatches on the requested [`Method`]: L-BFGS (with the configured
//! line search) through the gradient runner, or Nelder–Mead through the
//! simplex runner. In both cases the model is wrapped in an
//! [`ArgMinAdapter`] and the initial guess is validated first.
use crate::optimization::{
    errors::FitResult,
    least_squares::{
        FitOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_lbfgs_hager_zhang, build_lbfgs_more_thuente, build_nelder_mead},
        run::{run_gradient_solver, run_simplex_solver},
        traits::{FitOptions, LineSearcher, Method, Objective},
    },
};

/// Minimize a loss `c(θ)` with the chosen method.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an [`ArgMinAdapter`].
/// - `Method::LBfgs`: builds an L-BFGS solver with the line search from
///   `opts.line_searcher` and runs it through the gradient runner (finite
///   differences supply the gradient when `f` has none).
/// - `Method::NelderMead`: builds a deterministic simplex around `theta0`
///   and runs it through the simplex runner.
///
/// Each invocation is independent: repeated calls with different methods
/// share nothing but the read-only data, so different methods may land in
/// different local minima of a non-convex loss. That is expected usage, not
/// an error.
///
/// # Parameters
/// - `f`: Your model implementing [`Objective`].
/// - `theta0`: Initial parameter vector (consumed).
/// - `data`: Model data passed through to `value`/`grad`.
/// - `opts`: Optimizer options (tolerances, line search, L-BFGS memory).
/// - `method`: Which solver strategy to run.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_*`.
/// - Propagates runtime errors from the runners (line-search failures,
///   degenerate-parameter evaluations raised by the objective).
///
/// # Returns
/// A [`FitOutcome`] containing `theta_hat`, the best loss value,
/// termination status, iteration counts, function-evaluation counts, and
/// the gradient norm when one is available.
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &FitOptions, method: Method,
) -> FitResult<FitOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match method {
        Method::LBfgs => match opts.line_searcher {
            LineSearcher::MoreThuente => {
                let solver = build_lbfgs_more_thuente(opts)?;
                run_gradient_solver(theta0, opts, problem, solver)
            }
            LineSearcher::HagerZhang => {
                let solver = build_lbfgs_hager_zhang(opts)?;
                run_gradient_solver(theta0, opts, problem, solver)
            }
        },
        Method::NelderMead => {
            let solver = build_nelder_mead(&theta0, opts)?;
            run_simplex_solver(theta0, opts, problem, solver)
        }
    }
}
