//! Initial-guess policies for the 11-parameter fit.
//!
//! Purpose
//! -------
//! Encode how the starting θ for an optimization run is chosen. Two policies
//! exist: the fixed vector every production fit uses, and a per-bucket
//! sample-mean scheme. The fit driver and the CLI always use
//! [`InitialGuess::Fixed`]; `BucketMeans` stays available as a selectable
//! alternative for exploratory runs but is deliberately not the default —
//! the fitted optimum depends on the exact fixed values.
//!
//! Conventions
//! -----------
//! - Every policy yields a full θ of length 11 (`[Z₁..Z₁₀ | L]`) with
//!   strictly positive Z entries, so any policy is a valid starting point
//!   for any method.
//! - L always starts at 10, regardless of policy.
use crate::optimization::least_squares::Theta;
use crate::resource::core::{params::THETA_LEN, samples::InningsSamples};
use ndarray::Array1;

/// The fixed starting vector: Z₁..Z₁₀ then L.
///
/// These exact values are load-bearing: the loss surface is non-convex and
/// the fitted optimum depends on where the solvers start.
pub const FIXED_GUESS: [f64; THETA_LEN] =
    [10.0, 30.0, 40.0, 65.0, 85.0, 130.0, 155.0, 170.0, 185.0, 200.0, 10.0];

/// Policy for seeding the optimizer's starting θ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialGuess {
    /// The fixed vector in [`FIXED_GUESS`]. Default, and the only policy
    /// the fit driver uses.
    Fixed,
    /// Z seeded with the per-wickets-bucket mean of runs remaining
    /// (falling back to the fixed value for buckets with no samples or a
    /// non-positive mean), L seeded at 10.
    BucketMeans,
}

impl InitialGuess {
    /// Select the fixed starting vector.
    pub const fn fixed() -> Self {
        InitialGuess::Fixed
    }

    /// Select the per-bucket sample-mean starting vector.
    pub const fn bucket_means() -> Self {
        InitialGuess::BucketMeans
    }

    /// Materialize the starting θ for this policy over the given samples.
    ///
    /// `Fixed` ignores the samples entirely. `BucketMeans` averages the
    /// runs-remaining column per wickets bucket; buckets that are empty or
    /// average to ≤ 0 fall back to the corresponding fixed entry so the
    /// starting point stays in the strictly-positive Z domain.
    pub fn theta0(&self, samples: &InningsSamples) -> Theta {
        match self {
            InitialGuess::Fixed => Array1::from_vec(FIXED_GUESS.to_vec()),
            InitialGuess::BucketMeans => {
                let mut sums = [0.0f64; 10];
                let mut counts = [0usize; 10];
                for (&runs, &wickets) in
                    samples.runs_remaining.iter().zip(samples.wickets_in_hand.iter())
                {
                    let slot = wickets as usize - 1;
                    sums[slot] += runs;
                    counts[slot] += 1;
                }
                let mut theta = Array1::from_vec(FIXED_GUESS.to_vec());
                for slot in 0..10 {
                    if counts[slot] > 0 {
                        let mean = sums[slot] / counts[slot] as f64;
                        if mean > 0.0 {
                            theta[slot] = mean;
                        }
                    }
                }
                theta
            }
        }
    }
}

impl Default for InitialGuess {
    fn default() -> Self {
        InitialGuess::Fixed
    }
}
