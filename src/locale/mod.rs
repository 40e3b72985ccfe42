//! Language identity and catalog data model.
//!
//! This module holds the key types shared by the rest of the crate: the
//! validated [`LanguageTag`], the [`Localization`] catalog entry, and the
//! [`TagResolver`] seam that derives a content tag and an interface tag
//! from one catalog id.

mod localization;
mod resolver;
mod tag;

pub use localization::Localization;
pub use resolver::TagResolver;
pub use tag::{LanguageTag, TagError};

#[cfg(test)]
pub use resolver::tests::MockTagResolver;
