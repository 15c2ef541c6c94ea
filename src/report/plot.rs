//! PNG rendering of resource-percentage curves, one artifact per method.
//!
//! Purpose
//! -------
//! Persist the ten percentage curves of a fitted parameter set as a single
//! labeled chart. Every render call owns its drawing area for the full call
//! and flushes to file before returning, so there is no shared figure state
//! between methods and a finished call always corresponds to a finished
//! file.
//!
//! Conventions
//! -----------
//! - Artifact names are a pure function of the method label:
//!   `resourceVSovers_<label>.png` inside the plotter's output directory.
//! - Axes are fixed: overs remaining 0–50 on x, percentage 0–100 on y.
//!   Curves are labeled "Z1".."Z10" with one palette color per bucket.
//! - Rendering never displays anything interactively.
use crate::report::errors::{ReportError, ReportResult};
use crate::resource::core::{curve::percentage_curves, params::ResourceParams};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel dimensions of the rendered artifact.
const PLOT_SIZE: (u32, u32) = (900, 600);

/// Renderer interface the fit driver reports through.
///
/// The driver invokes `render` once per method, immediately after that
/// method's fit completes. Implementations must be side-effect-isolated per
/// label: distinct labels produce distinct artifacts.
pub trait CurveRenderer {
    fn render(&self, params: &ResourceParams, label: &str) -> ReportResult<PathBuf>;
}

/// File name of the artifact for a method label.
///
/// Pure: the same label always yields the same name.
pub fn artifact_file_name(label: &str) -> String {
    format!("resourceVSovers_{label}.png")
}

/// Renders resource-percentage curves as PNG files under a fixed directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePlotter {
    out_dir: PathBuf,
}

impl CurvePlotter {
    /// Create a plotter writing artifacts under `out_dir`. The directory is
    /// created lazily on the first render.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        CurvePlotter { out_dir: out_dir.into() }
    }

    /// Full artifact path for a method label; pure function of the label
    /// and the configured directory.
    pub fn artifact_path(&self, label: &str) -> PathBuf {
        self.out_dir.join(artifact_file_name(label))
    }
}

impl CurveRenderer for CurvePlotter {
    /// Render the ten percentage curves for `params` and persist them as the
    /// artifact for `label`.
    ///
    /// The drawing area is scoped to this call: the chart is drawn, the
    /// legend attached, and the bitmap flushed to disk via `present` before
    /// the path is returned. An `Err` means no finished artifact was
    /// produced for this label.
    ///
    /// # Errors
    /// - [`ReportError::CreateDir`] if the output directory cannot be
    ///   created.
    /// - [`ReportError::Backend`] for any drawing or flush failure.
    fn render(&self, params: &ResourceParams, label: &str) -> ReportResult<PathBuf> {
        fs::create_dir_all(&self.out_dir).map_err(|e| ReportError::CreateDir {
            path: self.out_dir.display().to_string(),
            text: e.to_string(),
        })?;
        let path = self.artifact_path(label);
        let curves = percentage_curves(params);

        let root = BitMapBackend::new(&path, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Percentage of Resources Remaining vs Overs Remaining", ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..50.0, 0.0..100.0)
            .map_err(backend_err)?;
        chart
            .configure_mesh()
            .x_desc("Overs Remaining")
            .y_desc("Percentage Of Resources Remaining")
            .x_labels(6)
            .y_labels(11)
            .draw()
            .map_err(backend_err)?;

        for (slot, points) in curves.iter().enumerate() {
            let color = Palette99::pick(slot).to_rgba();
            let legend_color = color.clone();
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))
                .map_err(backend_err)?
                .label(format!("Z{}", slot + 1))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], legend_color.clone())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_err)?;
        root.present().map_err(backend_err)?;
        drop(chart);
        drop(root);
        Ok(path)
    }
}

fn backend_err<E: std::error::Error>(err: E) -> ReportError {
    ReportError::Backend { text: err.to_string() }
}

/// True when `path` names an artifact this module would produce for `label`.
/// Used by callers that need to audit an output directory.
pub fn is_artifact_for(path: &Path, label: &str) -> bool {
    path.file_name().map(|name| name == artifact_file_name(label).as_str()).unwrap_or(false)
}
