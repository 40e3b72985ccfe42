//! Language list loading and user intent routing.
//!
//! [`LanguageListController`] loads the candidate language set from a
//! [`LocalizationSource`], exposes per-item download/installed state for
//! the presentation layer, and forwards select/uninstall intents into the
//! download coordinator.

mod context;
mod controller;
mod error;
mod source;

pub use context::ListContext;
pub use controller::{ItemViewState, LanguageListController, SelectionOutcome};
pub use error::LoadError;
pub use source::{LocalizationSource, SourceError, SourceFuture};

#[cfg(test)]
pub use source::tests::MockSource;
