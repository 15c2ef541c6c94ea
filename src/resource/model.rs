//! Resource model: the squared-error loss and the multi-method fit driver.
//!
//! This module wires the resource-decay family to the [`Objective`] trait
//! and owns the driver that runs a list of optimizer methods over one shared
//! initial guess. Key ideas:
//!
//! - The loss is evaluated on the raw optimizer vector θ — no parameter
//!   transform sits between the solver and the model. `ResourceParams` is
//!   materialized from the final θ only after a method finishes.
//! - Squared error accumulates **only over samples with positive runs
//!   remaining**, but the sum is normalized by the **full** sample count.
//!   Changing that normalization changes every fitted value, so it is part
//!   of the model contract, not an implementation detail.
//! - A Z ≤ 0 reached during evaluation is a fail-fast degenerate-parameter
//!   error; the solvers are expected to stay in the valid region because the
//!   initial guess starts them well inside it.
//! - Each requested method runs independently from the same guess and is
//!   reported (curve artifact) immediately after it finishes, before the
//!   next method starts.
use crate::{
    optimization::{
        errors::{FitError, FitResult},
        least_squares::{Cost, FitOptions, FitOutcome, Method, Objective, Theta, minimize},
    },
    report::CurveRenderer,
    resource::core::{
        curve::expected_runs,
        init::InitialGuess,
        params::{NUM_BUCKETS, ResourceParams, THETA_LEN},
        samples::InningsSamples,
    },
};

/// Mean squared prediction error of θ over the samples.
///
/// For each sample with `runs_remaining > 0`:
/// `Z = θ[wickets − 1]`, `predicted = Z (1 − exp(−L · overs / Z))`, and
/// `(predicted − runs_remaining)²` joins the sum. Samples with
/// `runs_remaining ≤ 0` contribute nothing to the sum but still count in
/// the denominator: the result is `sum / samples.len()`.
///
/// # Errors
/// - [`FitError::ThetaLengthMismatch`] if `theta.len() != 11`.
/// - [`FitError::DegenerateZ`] the first time a used Z is ≤ 0 — the decay
///   form divides by Z, so evaluation stops rather than producing NaN/∞.
pub fn sse_loss(theta: &Theta, samples: &InningsSamples) -> FitResult<f64> {
    if theta.len() != THETA_LEN {
        return Err(FitError::ThetaLengthMismatch { expected: THETA_LEN, actual: theta.len() });
    }
    let l = theta[NUM_BUCKETS];
    let mut error = 0.0;
    for ((&runs, &overs), &wickets) in samples
        .runs_remaining
        .iter()
        .zip(samples.overs_remaining.iter())
        .zip(samples.wickets_in_hand.iter())
    {
        if runs <= 0.0 {
            continue;
        }
        let z = theta[wickets as usize - 1];
        if z <= 0.0 {
            return Err(FitError::DegenerateZ { bucket: wickets as usize, value: z });
        }
        let predicted = expected_runs(z, l, overs);
        error += (predicted - runs).powi(2);
    }
    Ok(error / samples.len() as f64)
}

/// Configuration for a model fit: initial-guess policy plus optimizer
/// options shared by every method in the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub init: InitialGuess,
    pub opts: FitOptions,
}

impl FitConfig {
    pub fn new(init: InitialGuess, opts: FitOptions) -> FitConfig {
        FitConfig { init, opts }
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig { init: InitialGuess::fixed(), opts: FitOptions::default() }
    }
}

/// Result of one optimizer method: the method, its materialized parameters,
/// the final loss, and the raw solver outcome (convergence flag, status,
/// counters).
#[derive(Debug, Clone, PartialEq)]
pub struct MethodFit {
    pub method: Method,
    pub params: ResourceParams,
    pub loss: f64,
    pub outcome: FitOutcome,
}

/// The resource-decay model with its fit driver.
///
/// Implements [`Objective`] so it plugs directly into the least-squares
/// layer. After [`ResourceModel::fit`], `results` holds one [`MethodFit`]
/// per requested method in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceModel {
    /// Fit configuration shared across methods.
    pub config: FitConfig,
    /// Per-method results (populated after `fit`).
    pub results: Vec<MethodFit>,
}

impl ResourceModel {
    /// Construct an unfitted model with the given configuration.
    pub fn new(config: FitConfig) -> ResourceModel {
        ResourceModel { config, results: Vec::new() }
    }

    /// Fit every requested method independently and report each one.
    ///
    /// ## Steps, per method
    /// 1. Materialize the starting θ from the configured
    ///    [`InitialGuess`] policy (the fixed vector in production use).
    /// 2. Run [`minimize`] with this model as the objective. Non-convergence
    ///    is recorded in the outcome's flag, never retried or discarded.
    /// 3. Materialize [`ResourceParams`] from the final θ.
    /// 4. Render the curve artifact for this method **immediately** — the
    ///    side effect is per method, not deferred to the end of the batch.
    ///
    /// Methods share nothing but the read-only samples and the common
    /// starting point; no warm starts. Divergent local minima across
    /// methods are expected on this non-convex surface.
    ///
    /// ## Errors
    /// - Propagates solver hard errors (degenerate-parameter evaluations,
    ///   line-search failures) for the failing method.
    /// - Propagates parameter materialization and rendering failures.
    pub fn fit<R: CurveRenderer>(
        &mut self, samples: &InningsSamples, methods: &[Method], renderer: &R,
    ) -> FitResult<Vec<MethodFit>> {
        let mut fits = Vec::with_capacity(methods.len());
        for &method in methods {
            let theta0 = self.config.init.theta0(samples);
            let outcome = minimize(&*self, theta0, samples, &self.config.opts, method)?;
            let params = ResourceParams::from_theta(outcome.theta_hat.view())?;
            renderer.render(&params, method.label())?;
            fits.push(MethodFit { method, params, loss: outcome.value, outcome });
        }
        self.results = fits.clone();
        Ok(fits)
    }
}

impl Objective for ResourceModel {
    type Data = InningsSamples;

    /// Evaluate the mean squared prediction error at θ.
    fn value(&self, theta: &Theta, samples: &InningsSamples) -> FitResult<Cost> {
        sse_loss(theta, samples)
    }

    /// Reject starting points outside the valid domain: θ must have length
    /// 11, be finite throughout, and carry strictly positive Z entries.
    fn check(&self, theta: &Theta, _samples: &InningsSamples) -> FitResult<()> {
        if theta.len() != THETA_LEN {
            return Err(FitError::ThetaLengthMismatch {
                expected: THETA_LEN,
                actual: theta.len(),
            });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(FitError::NonFiniteTheta { index, value });
            }
        }
        for slot in 0..NUM_BUCKETS {
            if theta[slot] <= 0.0 {
                return Err(FitError::DegenerateZ { bucket: slot + 1, value: theta[slot] });
            }
        }
        Ok(())
    }
}
