/// Result alias for curve-rendering operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while persisting curve artifacts.
///
/// Backend failures are captured as text so this type stays
/// `Clone + PartialEq`; the drawing backend's error type is generic and
/// cannot be owned here.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// Could not create the artifact output directory.
    CreateDir { path: String, text: String },

    /// The drawing backend failed while rendering or flushing the artifact.
    Backend { text: String },
}

impl std::error::Error for ReportError {}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::CreateDir { path, text } => {
                write!(f, "Failed to create artifact directory '{path}': {text}")
            }
            ReportError::Backend { text } => {
                write!(f, "Drawing backend error: {text}")
            }
        }
    }
}
