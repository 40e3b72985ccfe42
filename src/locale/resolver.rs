//! Tag derivation from catalog identifiers.

use super::tag::LanguageTag;

/// Derives language tags from a localization's catalog id.
///
/// The content tag keys downloadable content modules; the interface tag keys
/// the application-interface module for the same language. The two
/// derivations are independent and must not be assumed equal for any id.
pub trait TagResolver: Send + Sync {
    /// Tag of the content module for `id`.
    fn content_tag(&self, id: &str) -> LanguageTag;

    /// Tag of the interface module for `id`.
    fn interface_tag(&self, id: &str) -> LanguageTag;
}
