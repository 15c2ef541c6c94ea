//! The exponential resource-decay form and percentage curves derived from it.
//!
//! Purpose
//! -------
//! Hold the one functional family this crate fits: expected runs as a
//! function of overs remaining for a given (Z, L) pair, plus the normalized
//! resource-percentage curves used for reporting. Both the loss function and
//! the curve reporter evaluate the model through this module so the form is
//! written down exactly once.
//!
//! Conventions
//! -----------
//! - `expected_runs(z, l, overs) = z · (1 − exp(−l · overs / z))`: zero at
//!   zero overs remaining, approaching the asymptote `z` as overs grow.
//! - Percentages are normalized against the anchor at overs = 50 with ten
//!   wickets in hand, so the anchor point reads exactly 100.
//! - Callers guarantee `z > 0`; `ResourceParams` construction enforces it,
//!   and the loss fails fast on degenerate Z before reaching this form.
use crate::resource::{
    core::params::ResourceParams,
    errors::ParamResult,
};

/// Inclusive upper edge of the overs-remaining grid (a full 50-over innings).
pub const MAX_OVERS: u32 = 50;

/// Expected runs obtainable with `overs` remaining under asymptote `z` and
/// decay rate `l`.
///
/// The canonical exponential decay form: `z * (1 - exp(-l * overs / z))`.
/// Returns 0 at `overs == 0` and is monotonically non-decreasing in `overs`
/// for `z > 0`, `l ≥ 0`.
pub fn expected_runs(z: f64, l: f64, overs: f64) -> f64 {
    z * (1.0 - (-l * overs / z).exp())
}

/// Resource percentage at a given overs-remaining/wickets point, normalized
/// so that (overs = 50, wickets = 10) reads exactly 100.
///
/// # Errors
/// - Propagates [`ParamError::WicketsOutOfDomain`](crate::resource::errors::ParamError)
///   from the bucket lookup.
pub fn resource_percentage(params: &ResourceParams, overs: f64, wickets: u8) -> ParamResult<f64> {
    let z = params.z_for_wickets(wickets)?;
    let z_ref = params.z_for_wickets(10)?;
    let anchor = expected_runs(z_ref, params.l, f64::from(MAX_OVERS));
    Ok(expected_runs(z, params.l, overs) / anchor * 100.0)
}

/// Percentage curves for all ten wicket buckets over the integer overs grid
/// `0..=50`, in bucket order (index 0 holds the wickets = 1 curve).
///
/// Each curve is a list of `(overs_remaining, percentage)` points suitable
/// for direct plotting. The wickets = 10 curve ends at exactly 100.
pub fn percentage_curves(params: &ResourceParams) -> Vec<Vec<(f64, f64)>> {
    let z_ref = params.z[9];
    let anchor = expected_runs(z_ref, params.l, f64::from(MAX_OVERS));
    params
        .z
        .iter()
        .map(|&z| {
            (0..=MAX_OVERS)
                .map(|x| {
                    let overs = f64::from(x);
                    (overs, expected_runs(z, params.l, overs) / anchor * 100.0)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Boundary and monotonicity properties of `expected_runs`.
    // - The normalization anchor of the percentage curves.
    //
    // They intentionally DO NOT cover:
    // - Rendering of the curves (covered in `report::plot`).
    // -------------------------------------------------------------------------

    fn linear_z_params() -> ResourceParams {
        // Z = [10, 20, ..., 100], L = 0.05
        let z = Array1::from_iter((1..=10).map(|k| 10.0 * k as f64));
        ResourceParams::new(z, 0.05).expect("strictly positive Z and finite L")
    }

    #[test]
    // Purpose
    // -------
    // Verify the boundary condition: no overs remaining means no runs
    // obtainable, for every bucket asymptote.
    //
    // Given
    // -----
    // - A spread of z values and decay rates.
    //
    // Expect
    // ------
    // - `expected_runs(z, l, 0.0) == 0.0` exactly.
    fn expected_runs_is_zero_at_zero_overs() {
        for &z in &[1.0, 85.0, 200.0] {
            for &l in &[0.0, 0.05, 10.0] {
                assert_eq!(expected_runs(z, l, 0.0), 0.0);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify monotonicity in overs remaining and approach to the asymptote.
    //
    // Given
    // -----
    // - z = 85, l = 10, overs sampled on an increasing grid.
    //
    // Expect
    // ------
    // - Values are non-decreasing along the grid and never exceed z.
    fn expected_runs_is_monotone_and_bounded_by_z() {
        let z = 85.0;
        let l = 10.0;
        let mut prev = 0.0;
        for x in 0..=200 {
            let overs = x as f64 * 0.5;
            let y = expected_runs(z, l, overs);
            assert!(y >= prev, "curve decreased at overs {overs}: {y} < {prev}");
            assert!(y <= z, "curve exceeded asymptote at overs {overs}: {y}");
            prev = y;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the normalization anchor: at overs = 50 with ten wickets in
    // hand the percentage is exactly 100, independent of the Z spread.
    //
    // Given
    // -----
    // - Z = [10, 20, ..., 100], L = 0.05.
    //
    // Expect
    // ------
    // - `resource_percentage(.., 50.0, 10) == 100.0` exactly.
    // - The last point of the wickets = 10 curve from `percentage_curves`
    //   agrees.
    fn percentage_anchor_is_exactly_one_hundred() {
        let params = linear_z_params();

        let pct = resource_percentage(&params, 50.0, 10).expect("wickets 10 is in domain");
        assert_eq!(pct, 100.0);

        let curves = percentage_curves(&params);
        assert_eq!(curves.len(), 10);
        let (overs, pct) = *curves[9].last().expect("51 grid points");
        assert_eq!(overs, 50.0);
        assert_eq!(pct, 100.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify lower buckets carry a smaller share of resources than higher
    // buckets at the same overs-remaining point when Z increases in wickets.
    //
    // Given
    // -----
    // - The linearly increasing Z vector, evaluated at overs = 25.
    //
    // Expect
    // ------
    // - Percentages strictly increase with the wickets bucket.
    fn percentage_increases_with_wickets_for_increasing_z() {
        let params = linear_z_params();
        let mut prev = -1.0;
        for wickets in 1..=10u8 {
            let pct = resource_percentage(&params, 25.0, wickets).expect("in domain");
            assert!(pct > prev, "bucket {wickets} not above bucket below: {pct} <= {prev}");
            prev = pct;
        }
        // The grid curves agree with the pointwise evaluation.
        let curves = percentage_curves(&params);
        assert_relative_eq!(curves[9][25].1, prev, epsilon = 1e-12);
    }
}
