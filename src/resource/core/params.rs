//! Resource-model parameterization: per-wicket asymptotes and shared decay.
//!
//! Purpose
//! -------
//! Provide the **model-space** parameter container [`ResourceParams`]
//! (Z₁..Z₁₀ and L) and its mapping to the flat **optimizer-space** vector θ
//! used by the solvers. The container also owns the validated mapping from
//! wickets in hand to its Z slot, so nothing else in the crate does raw
//! `wickets − 1` index arithmetic.
//!
//! Mapping conventions
//! -------------------
//! - `θ = [Z₁, …, Z₁₀, L]`, length 11. The optimizer works on θ directly;
//!   `ResourceParams` is materialized from the final θ after a fit.
//! - Wickets in hand `w ∈ 1..=10` maps to slot `w − 1`. Out-of-domain
//!   wickets are a typed error, never an index panic.
//!
//! Invariants validated by constructors
//! ------------------------------------
//! - `z.len() == 10`, every entry finite and **strictly positive** (the
//!   decay form divides by Z).
//! - `l` finite. No sign constraint: the decay rate is fitted
//!   unconstrained.
//! - **No monotonicity constraint** across Z buckets. Fitted Z values are
//!   free to violate Z₁ ≤ … ≤ Z₁₀; constraining them would change the
//!   fitted optimum.
use crate::resource::errors::{ParamError, ParamResult};
use ndarray::{Array1, ArrayView1};

/// Number of wickets-in-hand buckets (1..=10).
pub const NUM_BUCKETS: usize = 10;

/// Length of the optimizer-space vector θ: ten Z slots plus L.
pub const THETA_LEN: usize = NUM_BUCKETS + 1;

/// Constrained model-space parameters of the resource-decay family.
///
/// Invariants are validated at construction; use this type for curve
/// evaluation and reporting. See [`ResourceParams::from_theta`] for the
/// optimizer-space mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceParams {
    /// Asymptotic run potential per wickets-in-hand bucket; `z[k]` is the
    /// asymptote for `k + 1` wickets in hand. Each entry > 0.
    pub z: Array1<f64>,
    /// Shared exponential decay rate (finite).
    pub l: f64,
}

impl ResourceParams {
    /// Create validated model-space parameters.
    ///
    /// Validates:
    /// - `z.len() == 10`
    /// - every `z` entry finite and strictly positive
    /// - `l` finite
    ///
    /// # Errors
    /// - [`ParamError::ThetaLengthMismatch`] for a wrong-sized Z vector.
    /// - [`ParamError::DegenerateZ`] for a non-finite or non-positive Z
    ///   entry, reported with its 1-based wickets bucket.
    /// - [`ParamError::NonFiniteTheta`] for a non-finite L.
    pub fn new(z: Array1<f64>, l: f64) -> ParamResult<Self> {
        if z.len() != NUM_BUCKETS {
            return Err(ParamError::ThetaLengthMismatch {
                expected: NUM_BUCKETS,
                actual: z.len(),
            });
        }
        for (slot, &value) in z.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamError::DegenerateZ { bucket: slot + 1, value });
            }
        }
        if !l.is_finite() {
            return Err(ParamError::NonFiniteTheta { index: NUM_BUCKETS, value: l });
        }
        Ok(ResourceParams { z, l })
    }

    /// Build validated model-space parameters from an optimizer-space θ.
    ///
    /// Layout: `θ = [Z₁, …, Z₁₀, L]`. Intended for post-fit
    /// materialization: pass the solver's final θ to obtain parameters for
    /// curve reporting.
    ///
    /// # Errors
    /// - [`ParamError::ThetaLengthMismatch`] if `theta.len() != 11`.
    /// - Propagates the entry-level checks of [`ResourceParams::new`].
    pub fn from_theta(theta: ArrayView1<f64>) -> ParamResult<Self> {
        if theta.len() != THETA_LEN {
            return Err(ParamError::ThetaLengthMismatch {
                expected: THETA_LEN,
                actual: theta.len(),
            });
        }
        let z = theta.slice(ndarray::s![..NUM_BUCKETS]).to_owned();
        let l = theta[NUM_BUCKETS];
        ResourceParams::new(z, l)
    }

    /// Map model-space parameters to the optimizer-space θ.
    ///
    /// Returns a newly allocated vector `[Z₁, …, Z₁₀, L]` of length 11.
    pub fn to_theta(&self) -> Array1<f64> {
        let mut theta = Array1::zeros(THETA_LEN);
        theta.slice_mut(ndarray::s![..NUM_BUCKETS]).assign(&self.z);
        theta[NUM_BUCKETS] = self.l;
        theta
    }

    /// Asymptote for a wickets-in-hand bucket.
    ///
    /// The explicit 1-indexed mapping `w → z[w − 1]`, validated rather than
    /// relying on raw index arithmetic.
    ///
    /// # Errors
    /// - [`ParamError::WicketsOutOfDomain`] for `w == 0` or `w > 10`.
    pub fn z_for_wickets(&self, wickets: u8) -> ParamResult<f64> {
        if wickets == 0 || wickets as usize > NUM_BUCKETS {
            return Err(ParamError::WicketsOutOfDomain { wickets });
        }
        Ok(self.z[wickets as usize - 1])
    }
}
