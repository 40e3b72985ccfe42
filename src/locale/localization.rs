//! Localization catalog entries.

use serde::{Deserialize, Serialize};

/// A selectable language as supplied by a localization source.
///
/// The catalog `id` maps to a content-language tag and, independently, to an
/// interface-language tag via [`TagResolver`](super::TagResolver). The two
/// derived tags may differ for the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// Catalog identifier, e.g. `"en"` or `"pt-BR"`.
    pub id: String,
    /// Display name, used for list ordering.
    pub name: String,
}

impl Localization {
    /// Create a catalog entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
