//! Fit the resource model to a historical limited-overs innings table.
//!
//! Reads the per-over CSV, cleans it into first-innings samples, fits the
//! 11-parameter resource-decay model with each requested optimizer method,
//! and writes one resource-percentage curve PNG per method.
//!
//! Usage:
//!   cargo run --bin dl-fit -- --data data/04_cricket_1999to2011.csv
//!   cargo run --bin dl-fit -- --data innings.csv --methods lbfgs,nelder-mead --out-dir plots

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use duckworth_lewis::optimization::least_squares::{
    FitOptions, LineSearcher, Method, Tolerances,
};
use duckworth_lewis::report::CurvePlotter;
use duckworth_lewis::resource::{
    FitConfig, InitialGuess, ResourceModel, preprocess, read_match_records,
};

/// Resource-model fitter for limited-overs innings data.
#[derive(Parser)]
#[command(name = "dl-fit")]
struct Args {
    /// Path to the per-over innings table (CSV).
    #[arg(long)]
    data: PathBuf,

    /// Optimizer methods to run, in order (comma-separated:
    /// lbfgs, nelder-mead).
    #[arg(long, default_value = "lbfgs,nelder-mead", value_delimiter = ',')]
    methods: Vec<String>,

    /// Directory for the curve artifacts.
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,

    /// Iteration cap per method.
    #[arg(long, default_value = "300")]
    max_iter: usize,

    /// Gradient-norm stopping tolerance for L-BFGS.
    #[arg(long, default_value = "1e-6")]
    tol_grad: f64,

    /// L-BFGS line search ("MoreThuente" or "HagerZhang").
    #[arg(long, default_value = "MoreThuente")]
    line_search: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let methods = args
        .methods
        .iter()
        .map(|name| name.parse::<Method>())
        .collect::<Result<Vec<_>, _>>()
        .context("unrecognized optimizer method")?;
    let line_searcher: LineSearcher =
        args.line_search.parse().context("unrecognized line search")?;

    let records = read_match_records(&args.data)
        .with_context(|| format!("reading {}", args.data.display()))?;
    info!(rows = records.len(), "loaded match records");

    let samples = preprocess(&records).context("preprocessing match records")?;
    info!(samples = samples.len(), "cleaned first-innings samples");

    let tols = Tolerances::new(Some(args.tol_grad), None, Some(args.max_iter))
        .context("invalid tolerances")?;
    let opts = FitOptions::new(tols, line_searcher, None).context("invalid fit options")?;
    let mut model = ResourceModel::new(FitConfig::new(InitialGuess::fixed(), opts));
    let plotter = CurvePlotter::new(&args.out_dir);

    let fits = model.fit(&samples, &methods, &plotter).context("fitting resource model")?;

    for fit in &fits {
        info!(
            method = %fit.method,
            loss = fit.loss,
            converged = fit.outcome.converged,
            iterations = fit.outcome.iterations,
            "method finished"
        );
        println!("method: {}", fit.method);
        println!("  converged: {} ({})", fit.outcome.converged, fit.outcome.status);
        println!("  loss: {:.6}", fit.loss);
        for (slot, z) in fit.params.z.iter().enumerate() {
            println!("  Z{:<2} = {:.4}", slot + 1, z);
        }
        println!("  L   = {:.6}", fit.params.l);
        println!("  artifact: {}", plotter.artifact_path(fit.method.label()).display());
    }

    Ok(())
}
