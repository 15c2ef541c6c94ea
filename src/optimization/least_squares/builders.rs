//! least_squares::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the solvers behind [`Method`]: L-BFGS
//! with either line search, and the Nelder–Mead simplex. These helpers hide
//! Argmin's generic wiring and apply crate-level options (tolerances, memory
//! size, simplex seeding) so higher-level code can request a configured
//! solver without touching Argmin-specific types.
//!
//! Conventions
//! -----------
//! - The builders do **not** set the initial parameter vector (`theta0`) or
//!   `max_iters`; these are runtime concerns applied by the runners. The one
//!   exception is Nelder–Mead, whose *simplex* is necessarily derived from
//!   `theta0` at build time.
//! - The simplex is deterministic: vertex `i + 1` perturbs coordinate `i` of
//!   `theta0` by `max(0.05·|θᵢ|, 0.25)`. No randomness, so repeated runs are
//!   reproducible.
//! - Errors are always reported via [`FitResult`]; the underlying
//!   `argmin::core::Error` values never leak across module boundaries.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::FitResult,
    least_squares::{
        traits::FitOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, NelderMeadSimplex, Theta,
        },
    },
};

/// Relative per-coordinate step used to seed the Nelder–Mead simplex.
const SIMPLEX_RELATIVE_STEP: f64 = 0.05;

/// Absolute floor for the simplex step, so near-zero coordinates still move.
const SIMPLEX_MIN_STEP: f64 = 0.25;

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (default [`DEFAULT_LBFGS_MEM`]) and wires the
/// optional gradient/cost tolerances through [`configure_lbfgs`]. Initial
/// parameters and iteration limits are left to the runner.
///
/// # Errors
/// Returns a [`FitError`](crate::optimization::errors::FitError) if Argmin
/// rejects a tolerance setting.
pub fn build_lbfgs_hager_zhang(opts: &FitOptions) -> FitResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Same contract as [`build_lbfgs_hager_zhang`] with the More–Thuente
/// strategy.
///
/// # Errors
/// Returns a [`FitError`](crate::optimization::errors::FitError) if Argmin
/// rejects a tolerance setting.
pub fn build_lbfgs_more_thuente(opts: &FitOptions) -> FitResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// When a tolerance is `None`, the corresponding `with_tolerance_*` method
/// is not called and Argmin's defaults remain in effect. The generics are
/// kept minimal (`L` only) so new line-search types can reuse this function.
///
/// # Errors
/// Returns a [`FitError`](crate::optimization::errors::FitError) when
/// `with_tolerance_grad` or `with_tolerance_cost` rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &FitOptions,
) -> FitResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

/// Construct a Nelder–Mead solver with a deterministic simplex around
/// `theta0`.
///
/// The simplex holds `theta0.len() + 1` vertices: `theta0` itself plus one
/// vertex per coordinate, stepped by `max(0.05·|θᵢ|, 0.25)`. If
/// `opts.tols.tol_cost` is set, it becomes the simplex standard-deviation
/// stopping tolerance.
///
/// # Errors
/// Returns a [`FitError`](crate::optimization::errors::FitError) if Argmin
/// rejects the standard-deviation tolerance.
pub fn build_nelder_mead(theta0: &Theta, opts: &FitOptions) -> FitResult<NelderMeadSimplex> {
    let mut simplex = Vec::with_capacity(theta0.len() + 1);
    simplex.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        let step = (SIMPLEX_RELATIVE_STEP * vertex[i].abs()).max(SIMPLEX_MIN_STEP);
        vertex[i] += step;
        simplex.push(vertex);
    }
    let mut solver = NelderMeadSimplex::new(simplex);
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_sd_tolerance(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::least_squares::traits::{FitOptions, LineSearcher, Tolerances};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic construction of the L-BFGS solvers with both line searches.
    // - Propagation of `lbfgs_mem` (Some vs None) into the builder paths.
    // - Tolerance application via `configure_lbfgs`.
    // - Nelder–Mead construction from a seed point.
    //
    // They intentionally DO NOT cover:
    // - End-to-end executor behavior, which is tested in the runner layer
    //   and the integration tests.
    // -------------------------------------------------------------------------

    fn options(lbfgs_mem: Option<usize>) -> FitOptions {
        let tols =
            Tolerances::new(Some(1e-6), Some(1e-8), Some(50)).expect("Tolerances should be valid");
        FitOptions::new(tols, LineSearcher::MoreThuente, lbfgs_mem)
            .expect("FitOptions should be valid")
    }

    #[test]
    // Purpose
    // -------
    // Both L-BFGS builders succeed with default memory (`lbfgs_mem = None`)
    // and valid tolerances.
    fn lbfgs_builders_use_default_memory_when_none() {
        let opts = options(None);

        assert!(build_lbfgs_more_thuente(&opts).is_ok());
        assert!(build_lbfgs_hager_zhang(&opts).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Both L-BFGS builders accept an explicit memory value.
    fn lbfgs_builders_respect_explicit_memory() {
        let opts = options(Some(11));

        assert!(build_lbfgs_more_thuente(&opts).is_ok());
        assert!(build_lbfgs_hager_zhang(&opts).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `configure_lbfgs` succeeds when both tolerances are absent, relying on
    // Argmin defaults.
    fn configure_lbfgs_respects_absent_tolerances() {
        let raw = LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM);
        let tols = Tolerances::new(None, None, Some(50)).expect("Tolerances should be valid");
        let opts = FitOptions::new(tols, LineSearcher::MoreThuente, None)
            .expect("FitOptions should be valid");

        assert!(configure_lbfgs(raw, &opts).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // The Nelder–Mead builder accepts a seed point and the configured cost
    // tolerance; construction must not depend on randomness.
    fn nelder_mead_builds_from_seed_point() {
        let opts = options(None);
        let theta0 = array![10.0, 30.0, 0.0];

        assert!(build_nelder_mead(&theta0, &opts).is_ok());
    }
}
