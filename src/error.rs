use std::fmt;
use std::io;

/// Failure modes of a transform run.
///
/// All variants are fail-fast: they are detected before or during traversal
/// of the source, and no partial output is written once one is raised. The
/// nesting engine itself never fails; out-of-range levels and empty anchor
/// ids are treated as ineligible input rather than errors.
#[derive(Debug)]
pub enum TransformError {
    /// The input file or stream is missing or unreadable.
    SourceUnavailable { path: String, source: io::Error },
    /// The outline parser could not parse the input.
    MalformedSource { detail: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::SourceUnavailable { path, source } => {
                write!(f, "cannot read {}: {}", path, source)
            }
            TransformError::MalformedSource { detail } => {
                write!(f, "malformed OPML source: {}", detail)
            }
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::SourceUnavailable { source, .. } => Some(source),
            TransformError::MalformedSource { .. } => None,
        }
    }
}
