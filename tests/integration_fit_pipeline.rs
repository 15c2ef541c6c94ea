//! Integration tests for the resource-model fitting pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from raw match records, through
//!   preprocessing and multi-method fitting, to per-method outcomes and
//!   curve artifacts on disk.
//! - Exercise the generic least-squares layer on a convex sub-problem with
//!   a known analytic optimum, so solver wiring is verified independently
//!   of the full non-convex 11-parameter surface.
//!
//! Coverage
//! --------
//! - `resource::records` / `resource::preprocess`:
//!   - CSV-shaped synthetic tables and the cleaning invariants.
//! - `resource::model::ResourceModel`:
//!   - Multi-method fitting from the fixed initial guess, result recording,
//!     and the immediate per-method reporting side effect.
//! - `optimization::least_squares`:
//!   - `minimize` with both `Method::LBfgs` and `Method::NelderMead` on a
//!     1-parameter objective with a closed-form minimizer.
//! - `report::CurvePlotter`:
//!   - Exactly one artifact per distinct method label, named purely from
//!     the label.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of containers, tolerances, and loss edge cases
//!   — covered by unit tests in the respective modules.
//! - Fitting quality on real historical data; these tests use synthetic
//!   tables sized for CI.
use duckworth_lewis::optimization::least_squares::{
    Cost, FitOptions, LineSearcher, Method, Objective, Theta, Tolerances, minimize,
};
use duckworth_lewis::optimization::errors::FitResult;
use duckworth_lewis::report::{CurvePlotter, artifact_file_name};
use duckworth_lewis::resource::core::expected_runs;
use duckworth_lewis::resource::{
    FitConfig, InitialGuess, MatchRecord, ResourceModel, preprocess,
    records::load_match_records_from_reader, sse_loss,
};
use ndarray::array;

/// Purpose
/// -------
/// Build a synthetic three-match, first-innings-only table whose wickets in
/// hand sweep the full 1..=10 domain and whose runs track a smooth innings
/// progression.
///
/// Returns
/// -------
/// - One `MatchRecord` per (match, over) pair for overs 0..=49, with:
///   - cumulative runs growing linearly to the innings total,
///   - wickets in hand stepping down from 10 to 1 across the innings,
///   - no error flags and no second-innings rows.
///
/// Invariants
/// ----------
/// - Every row survives preprocessing except the over-49 anchor duplicates
///   (the allotment is 50 overs, so duplicates land at zero overs remaining
///   and are filtered), keeping sample counts predictable.
fn synthetic_matches() -> Vec<MatchRecord> {
    let mut records = Vec::new();
    for (match_idx, &innings_total) in [250.0_f64, 280.0, 210.0].iter().enumerate() {
        for over in 0..=49u32 {
            let progress = f64::from(over) / 50.0;
            let total_runs = (innings_total * progress).floor();
            // 10 wickets in hand early, stepping down to 1 by the death overs.
            let wickets = (10 - (over / 5) as u8).max(1);
            records.push(MatchRecord {
                innings: 1,
                match_id: 9000 + match_idx as u32,
                over,
                total_overs: 50,
                total_runs,
                innings_total_runs: innings_total,
                wickets_in_hand: wickets,
                error_in_data: 0,
            });
        }
    }
    records
}

/// Purpose
/// -------
/// Provide a stable baseline `FitConfig` for integration fits: the fixed
/// reference initial guess, More–Thuente L-BFGS, and tolerances loose
/// enough for CI-sized synthetic data.
fn default_fit_config(max_iter: usize) -> FitConfig {
    let tols = Tolerances::new(Some(1e-5), Some(1e-9), Some(max_iter))
        .expect("Tolerances::new should accept positive tolerances");
    let opts = FitOptions::new(tols, LineSearcher::MoreThuente, None)
        .expect("FitOptions::new should succeed with reasonable tolerances");
    FitConfig::new(InitialGuess::fixed(), opts)
}

/// One-parameter objective with a known analytic minimizer: with Z fixed,
/// `c(L) = (Z (1 − exp(−L · overs / Z)) − target)²` is minimized exactly at
/// the L whose curve passes through `target`.
struct SingleRateObjective {
    z: f64,
    overs: f64,
    target: f64,
}

impl Objective for SingleRateObjective {
    type Data = ();

    fn value(&self, theta: &Theta, _data: &()) -> FitResult<Cost> {
        let predicted = expected_runs(self.z, theta[0], self.overs);
        Ok((predicted - self.target).powi(2))
    }

    fn check(&self, _theta: &Theta, _data: &()) -> FitResult<()> {
        Ok(())
    }
}

#[test]
// Purpose
// -------
// Verify the full pipeline: synthetic records → preprocessing → fitting
// with both methods → recorded outcomes and one artifact per method.
//
// Given
// -----
// - Three synthetic first-innings matches (wickets spanning 1..=10).
// - Baseline fit configuration with a CI-sized iteration cap.
// - A temp directory as the artifact sink.
//
// Expect
// ------
// - Preprocessing keeps 150 samples (3 matches × 50 overs, over-0 rows
//   included, anchor duplicates filtered at zero overs remaining).
// - `fit` returns one result per method in request order; each recorded
//   loss is finite, non-negative, and no worse than the loss at the fixed
//   initial guess.
// - The artifact directory holds exactly one file per method label, named
//   `resourceVSovers_<label>.png`.
fn pipeline_fits_synthetic_matches_and_writes_artifacts() {
    let records = synthetic_matches();
    let samples = preprocess(&records).expect("synthetic table should preprocess cleanly");
    assert_eq!(samples.len(), 150);
    assert!(samples.overs_remaining.iter().all(|&o| o > 0.0));
    assert!(samples.wickets_in_hand.iter().all(|&w| (1..=10).contains(&w)));

    let mut model = ResourceModel::new(default_fit_config(60));
    let initial_loss = sse_loss(&InitialGuess::fixed().theta0(&samples), &samples)
        .expect("initial guess should evaluate");

    let dir = tempfile::tempdir().expect("temp dir");
    let plotter = CurvePlotter::new(dir.path());
    let methods = [Method::LBfgs, Method::NelderMead];

    let fits = model.fit(&samples, &methods, &plotter).expect("fit should record both methods");

    assert_eq!(fits.len(), 2);
    for (fit, &method) in fits.iter().zip(methods.iter()) {
        assert_eq!(fit.method, method);
        assert!(fit.loss.is_finite() && fit.loss >= 0.0);
        assert!(
            fit.loss <= initial_loss + 1e-9,
            "{} worsened the loss: {} > {}",
            fit.method,
            fit.loss,
            initial_loss
        );
        assert_eq!(fit.outcome.theta_hat.len(), 11);
        // Artifact exists and is named purely from the label.
        let path = dir.path().join(artifact_file_name(method.label()));
        assert!(path.is_file(), "missing artifact for {}", fit.method);
    }

    let artifact_count = std::fs::read_dir(dir.path()).expect("readable dir").count();
    assert_eq!(artifact_count, methods.len(), "exactly one artifact per method");
    assert_eq!(model.results, fits);
}

#[test]
// Purpose
// -------
// Verify solver wiring on a convex sub-problem of the loss surface: with Z
// fixed and a single data point, the recovered decay rate must match the
// closed-form minimizer within 1e-3 for both methods.
//
// Given
// -----
// - Z = 85, overs = 25, target runs generated at L_true = 3.0.
// - Starting point L₀ = 1.0, tight tolerances.
//
// Expect
// ------
// - Both `Method::LBfgs` and `Method::NelderMead` recover L within 1e-3
//   and report convergence.
fn convex_subproblem_recovers_analytic_rate() {
    let l_true = 3.0;
    let objective = SingleRateObjective {
        z: 85.0,
        overs: 25.0,
        target: expected_runs(85.0, l_true, 25.0),
    };
    let tols = Tolerances::new(Some(1e-8), Some(1e-12), Some(200))
        .expect("Tolerances::new should accept tight tolerances");
    let opts = FitOptions::new(tols, LineSearcher::MoreThuente, None)
        .expect("FitOptions::new should succeed");

    for method in [Method::LBfgs, Method::NelderMead] {
        let outcome = minimize(&objective, array![1.0], &(), &opts, method)
            .expect("1-D minimization should succeed");

        let recovered = outcome.theta_hat[0];
        assert!(
            (recovered - l_true).abs() < 1e-3,
            "{method} recovered L = {recovered}, expected {l_true}"
        );
        assert!(outcome.converged, "{method} should converge on a convex sub-problem");
        assert!(outcome.value < 1e-8, "{method} residual loss too large: {}", outcome.value);
    }
}

#[test]
// Purpose
// -------
// Verify the CSV boundary end to end: a small in-memory table with the
// dotted headers parses, cleans, and fits with a single method, and the
// renderer fires exactly once for that method's label.
//
// Given
// -----
// - A 2-match in-memory CSV including one error-flagged row, one
//   second-innings row, and one all-out row.
//
// Expect
// ------
// - The flagged/second-innings/all-out rows vanish during preprocessing.
// - A Nelder–Mead fit over the survivors records one outcome and one
//   artifact.
fn csv_table_round_trips_through_the_pipeline() {
    let table = "\
Match,Innings,Over,Total.Overs,Total.Runs,Innings.Total.Runs,Wickets.in.Hand,Error.In.Data
11,1,10,50,48,236,9,0
11,1,20,50,101,236,8,0
11,1,30,50,155,236,6,1
11,2,10,50,39,180,9,0
12,1,15,50,70,255,10,0
12,1,40,50,201,255,0,0
12,1,45,50,228,255,3,0
";
    let records = load_match_records_from_reader(table.as_bytes(), "inline")
        .expect("table should parse");
    assert_eq!(records.len(), 7);

    let samples = preprocess(&records).expect("survivors remain");
    assert_eq!(samples.len(), 4);

    let mut model = ResourceModel::new(default_fit_config(40));
    let dir = tempfile::tempdir().expect("temp dir");
    let plotter = CurvePlotter::new(dir.path());

    let fits = model
        .fit(&samples, &[Method::NelderMead], &plotter)
        .expect("single-method fit should succeed");

    assert_eq!(fits.len(), 1);
    assert!(plotter.artifact_path("nelder-mead").is_file());
    assert_eq!(std::fs::read_dir(dir.path()).expect("readable dir").count(), 1);
}
