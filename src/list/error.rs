//! Error types for language list loading.

use super::context::ListContext;
use super::source::SourceError;

/// Errors surfaced to the presentation layer by the list controller.
#[derive(Debug)]
pub enum LoadError {
    /// The localization source query for a context failed.
    LoadFailed {
        /// Context whose query failed.
        context: ListContext,
        /// Underlying source failure.
        source: SourceError,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::LoadFailed { context, source } => {
                write!(f, "failed to load {} languages: {}", context, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::LoadFailed { source, .. } => Some(source),
        }
    }
}
