//! Public API surface for least-squares minimization.
//!
//! - [`Objective`]: trait users implement for their loss.
//! - [`FitOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`Method`]: the closed set of interchangeable solver strategies,
//!   selected by string name.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`FitOutcome`]: normalized result returned by the high-level
//!   `minimize` API.
//!
//! Convention: the loss `c(θ)` is *minimized directly* — there is no sign
//! flip anywhere in the stack. If an analytic gradient is provided, it is
//! the gradient of the loss itself.
use crate::optimization::{
    errors::{FitError, FitResult},
    least_squares::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented loss interface.
///
/// The optimizer minimizes `c(θ)` as returned by `value`; no sign
/// conventions apply.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> FitResult<Cost>`: evaluate the loss.
///   - Errors: return a descriptive `FitError` for invalid inputs or
///     degenerate parameter regions (fail fast rather than yielding NaN/∞).
/// - `check(&Theta, &Data) -> FitResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> FitResult<Grad>`: analytic loss gradient.
///   If not implemented, robust finite differences are used automatically.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> FitResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> FitResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> FitResult<Grad> {
        Err(FitError::GradientNotImplemented)
    }
}

/// The closed set of optimizer strategies, selected by string name.
///
/// Variants:
/// - `LBfgs`: gradient-based quasi-Newton (finite-difference gradients when
///   the objective provides none), line search per [`FitOptions`].
/// - `NelderMead`: derivative-free downhill simplex.
///
/// Different methods may converge to different local minima on a non-convex
/// loss surface; running several and comparing outcomes is expected usage,
/// not an error.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"lbfgs"`, `"l-bfgs"`, `"nelder-mead"`, `"neldermead"`). Unknown names
/// return `FitError::InvalidMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    LBfgs,
    NelderMead,
}

impl Method {
    /// Canonical label for this method, used in reporting and artifact
    /// naming. Stable: artifact paths are a pure function of this label.
    pub const fn label(&self) -> &'static str {
        match self {
            Method::LBfgs => "lbfgs",
            Method::NelderMead => "nelder-mead",
        }
    }
}

impl FromStr for Method {
    type Err = FitError;

    /// Parse a method choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"lbfgs"` / `"l-bfgs"`
    /// - `"nelder-mead"` / `"neldermead"`
    /// - Any case variant (e.g., `"LBFGS"`, `"Nelder-Mead"`).
    ///
    /// Any other value returns `FitError::InvalidMethod` with a helpful
    /// message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbfgs" | "l-bfgs" => Ok(Method::LBfgs),
            "nelder-mead" | "neldermead" => Ok(Method::NelderMead),
            _ => Err(FitError::InvalidMethod {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'lbfgs' or 'nelder-mead'.",
            }),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `FitError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = FitError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"MoreThuente"`
    /// - `"HagerZhang"`
    /// - Any case variant (e.g., `"morethuente"`, `"HAGERZHANG"`).
    ///
    /// Any other value returns `FitError::InvalidLineSearch` with a helpful
    /// message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(FitError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `line_searcher: LineSearcher` — line-search algorithm used by L-BFGS
///   (ignored by the simplex method).
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size; `None` uses the
///   default of 7.
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = None`, `max_iter = 300`
/// - `line_searcher`: `MoreThuente`
/// - `lbfgs_mem`: `None`
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub lbfgs_mem: Option<usize>,
}

impl FitOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of numeric fields
    /// is performed inside [`Tolerances::new`].
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, lbfgs_mem: Option<usize>,
    ) -> FitResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(FitError::InvalidLbfgsMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, lbfgs_mem })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-6), None, Some(300)).unwrap(),
            line_searcher: LineSearcher::MoreThuente,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold
///   (also drives the simplex standard-deviation stopping rule).
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`FitError::NoTolerancesProvided`] if all three are `None`.
    /// - [`FitError::InvalidTolGrad`] / [`FitError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`FitError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> FitResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(FitError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(FitError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best loss value `c(θ̂)`.
/// - `converged`: `true` only if the solver terminated because it converged
///   or hit its target cost; iteration-cap and other exits leave it `false`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`
///   (keys follow argmin's counters, e.g., cost_count, gradient_count).
/// - `grad_norm`: norm of the last available gradient, if present (`None`
///   for derivative-free methods).
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl FitOutcome {
    /// Build a validated [`FitOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// A non-converged outcome is still a valid outcome: the caller records
    /// it as-is (the convergence flag is diagnostic, not an error).
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> FitResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashMap;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - String parsing for `Method` and `LineSearcher`.
    // - Validation rules of `Tolerances::new` and `FitOptions::new`.
    // - Termination-status mapping in `FitOutcome::new`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `Method::from_str` accepts the documented spellings case-insensitively
    // and rejects anything else with `InvalidMethod`.
    fn method_from_str_parses_known_names() {
        assert_eq!("lbfgs".parse::<Method>().unwrap(), Method::LBfgs);
        assert_eq!("L-BFGS".parse::<Method>().unwrap(), Method::LBfgs);
        assert_eq!("nelder-mead".parse::<Method>().unwrap(), Method::NelderMead);
        assert_eq!("NelderMead".parse::<Method>().unwrap(), Method::NelderMead);

        match "slsqp".parse::<Method>() {
            Err(FitError::InvalidMethod { name, .. }) => assert_eq!(name, "slsqp"),
            other => panic!("expected InvalidMethod, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Method labels are stable identifiers (artifact naming depends on them).
    fn method_labels_are_stable() {
        assert_eq!(Method::LBfgs.label(), "lbfgs");
        assert_eq!(Method::NelderMead.label(), "nelder-mead");
    }

    #[test]
    // Purpose
    // -------
    // `LineSearcher::from_str` mirrors the method parsing behavior.
    fn line_searcher_from_str_parses_known_names() {
        assert_eq!("morethuente".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert_eq!("HAGERZHANG".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);
        assert!("golden".parse::<LineSearcher>().is_err());
    }

    #[test]
    // Purpose
    // -------
    // At least one stopping rule must be provided, and provided tolerances
    // must be finite and strictly positive.
    fn tolerances_new_enforces_rules() {
        assert_eq!(Tolerances::new(None, None, None).unwrap_err(), FitError::NoTolerancesProvided);
        assert!(matches!(
            Tolerances::new(Some(-1.0), None, Some(10)).unwrap_err(),
            FitError::InvalidTolGrad { .. }
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), Some(10)).unwrap_err(),
            FitError::InvalidTolCost { .. }
        ));
        assert!(matches!(
            Tolerances::new(Some(1e-6), None, Some(0)).unwrap_err(),
            FitError::InvalidMaxIter { .. }
        ));
        assert!(Tolerances::new(Some(1e-6), Some(1e-8), Some(100)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Zero L-BFGS memory is rejected at options construction.
    fn fit_options_rejects_zero_memory() {
        let tols = Tolerances::new(Some(1e-6), None, Some(50)).unwrap();

        let result = FitOptions::new(tols, LineSearcher::MoreThuente, Some(0));

        assert!(matches!(result.unwrap_err(), FitError::InvalidLbfgsMem { mem: 0, .. }));
    }

    #[test]
    // Purpose
    // -------
    // Termination mapping: solver convergence flags as converged,
    // iteration-cap exit does not, and a missing θ̂ is an error.
    fn fit_outcome_maps_termination_status() {
        let theta = array![1.0, 2.0];

        let ok = FitOutcome::new(
            Some(theta.clone()),
            0.5,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            12,
            HashMap::new(),
            None,
        )
        .unwrap();
        assert!(ok.converged);
        assert_eq!(ok.iterations, 12);
        assert_eq!(ok.grad_norm, None);

        let capped = FitOutcome::new(
            Some(theta),
            0.5,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            300,
            HashMap::new(),
            None,
        )
        .unwrap();
        assert!(!capped.converged);

        let missing =
            FitOutcome::new(None, 0.5, TerminationStatus::NotTerminated, 0, HashMap::new(), None);
        assert_eq!(missing.unwrap_err(), FitError::MissingThetaHat);
    }
}
