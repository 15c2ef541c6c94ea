//! resource::core — validated containers and the pure model family.
//!
//! Purpose
//! -------
//! Hold the building blocks the rest of the resource layer composes: the
//! aligned sample container ([`samples::InningsSamples`]), the parameter
//! container with its θ mapping ([`params::ResourceParams`]), initial-guess
//! policies ([`init::InitialGuess`]), and the exponential decay form with
//! its percentage curves ([`curve`]).
//!
//! Conventions
//! -----------
//! - Everything here is pure and I/O-free: construction validates, functions
//!   compute. Ingestion, fitting, and rendering live in sibling modules.
//! - Invariants are enforced once, at construction; downstream code assumes
//!   them rather than re-validating.

pub mod curve;
pub mod init;
pub mod params;
pub mod samples;

pub use self::curve::{expected_runs, percentage_curves, resource_percentage};
pub use self::init::InitialGuess;
pub use self::params::{NUM_BUCKETS, ResourceParams, THETA_LEN};
pub use self::samples::InningsSamples;
