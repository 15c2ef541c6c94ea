//! report — curve artifacts for fitted parameter sets.
//!
//! Purpose
//! -------
//! Turn a fitted [`ResourceParams`](crate::resource::core::params::ResourceParams)
//! into a persisted, human-readable artifact: one PNG of the ten
//! resource-percentage curves per optimizer method. The fit driver calls
//! into this layer through the [`CurveRenderer`] trait immediately after
//! each method finishes.
//!
//! Conventions
//! -----------
//! - Artifact naming is deterministic in the method label
//!   (`resourceVSovers_<label>.png`); see [`plot::artifact_file_name`].
//! - Each render call owns its drawing context and flushes to file before
//!   returning — no figure state survives between calls or methods.
//! - This layer performs no fitting and holds no parameters; it is a pure
//!   consumer of `ResourceParams`.

pub mod errors;
pub mod plot;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ReportError, ReportResult};
pub use self::plot::{CurvePlotter, CurveRenderer, artifact_file_name};
