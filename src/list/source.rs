//! Localization source contract.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::locale::Localization;

/// Errors surfaced by a localization source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The backing request failed.
    #[error("localization request failed: {0}")]
    Fetch(String),
    /// The response could not be decoded into localizations.
    #[error("localization response invalid: {0}")]
    Decode(String),
}

/// Future returned by source queries.
pub type SourceFuture<'a> = BoxFuture<'a, Result<Vec<Localization>, SourceError>>;

/// Supplies the candidate language set, one query per list context.
///
/// Implementations live outside this crate (HTTP backends, bundled
/// catalogs). Queries are one-shot; callers do not retry through this
/// trait. Futures are boxed to keep the trait usable as a trait object.
pub trait LocalizationSource: Send + Sync {
    /// Languages available for the application interface.
    fn app_localizations(&self) -> SourceFuture<'_>;

    /// Languages with content plans available.
    fn plan_localizations(&self) -> SourceFuture<'_>;

    /// Languages offered during initial setup, optionally biased toward a
    /// country.
    fn initial_localizations<'a>(&'a self, country_hint: Option<&'a str>) -> SourceFuture<'a>;

    /// Languages with daily content available.
    fn daily_localizations(&self) -> SourceFuture<'_>;
}
