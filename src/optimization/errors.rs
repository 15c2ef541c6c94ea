use argmin::core::{ArgminError, Error};

use crate::report::errors::ReportError;
use crate::resource::errors::ParamError;

/// Crate-wide result alias for optimizer operations.
pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- FitOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// Invalid optimizer method name.
    InvalidMethod {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLbfgsMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Loss / parameter domain ----
    /// θ length mismatch for the Z/L vector.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// θ entries must be finite.
    NonFiniteTheta {
        index: usize,
        value: f64,
    },

    /// A Z parameter was ≤ 0 during loss evaluation (division by Z).
    DegenerateZ {
        bucket: usize,
        value: f64,
    },

    /// Wickets-in-hand bucket outside 1..=10 at parameter lookup.
    WicketsOutOfDomain {
        wickets: u8,
    },

    // ---- Reporting ----
    /// Curve rendering failed while the fit driver was reporting a method.
    Render {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            FitError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            FitError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            FitError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- FitOptions ----
            FitError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            FitError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            FitError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            FitError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            FitError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            FitError::InvalidMethod { name, reason } => {
                write!(f, "Invalid optimizer method '{name}': {reason}")
            }
            FitError::InvalidLbfgsMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Cost function ----
            FitError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            FitError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            FitError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            FitError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            FitError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            FitError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            FitError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            FitError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            FitError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            FitError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            FitError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Loss / parameter domain ----
            FitError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, actual {actual}")
            }
            FitError::NonFiniteTheta { index, value } => {
                write!(f, "Non-finite parameter at index {index}: {value}")
            }
            FitError::DegenerateZ { bucket, value } => {
                write!(f, "Degenerate Z for wickets bucket {bucket}: {value}, must be > 0")
            }
            FitError::WicketsOutOfDomain { wickets } => {
                write!(f, "Wickets in hand {wickets} outside the parameter domain 1..=10")
            }

            // ---- Reporting ----
            FitError::Render { text } => {
                write!(f, "Curve rendering failed: {text}")
            }

            // ---- Fallback ----
            FitError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for FitError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(fit_err) => match fit_err {
                ArgminError::InvalidParameter { text } => FitError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => FitError::NotImplemented { text },
                ArgminError::NotInitialized { text } => FitError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => FitError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => FitError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => FitError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => FitError::ImpossibleError { text },
                _ => FitError::UnknownError,
            },
            Err(err) => FitError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ParamError> for FitError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::ThetaLengthMismatch { expected, actual } => {
                FitError::ThetaLengthMismatch { expected, actual }
            }
            ParamError::NonFiniteTheta { index, value } => {
                FitError::NonFiniteTheta { index, value }
            }
            ParamError::DegenerateZ { bucket, value } => FitError::DegenerateZ { bucket, value },
            ParamError::WicketsOutOfDomain { wickets } => {
                FitError::WicketsOutOfDomain { wickets }
            }
        }
    }
}

impl From<ReportError> for FitError {
    fn from(err: ReportError) -> Self {
        FitError::Render { text: err.to_string() }
    }
}
