//! List context selection.

use std::fmt;

/// Which language list is being presented.
///
/// The context selects the backing localization query, decides which
/// derived tag governs installed/progress lookups, and whether the list
/// offers explicit module downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListContext {
    /// Application-interface languages. Selection may download a module;
    /// lookups use the interface tag.
    AppInterface,
    /// Content plan languages.
    ContentPlans,
    /// First-run language selection, biased by a country hint.
    InitialSetup,
    /// Daily content languages.
    DailyContent,
}

impl ListContext {
    /// Whether this context offers an explicit module download action.
    pub fn download_allowed(self) -> bool {
        matches!(self, ListContext::AppInterface)
    }
}

impl fmt::Display for ListContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListContext::AppInterface => "app-interface",
            ListContext::ContentPlans => "content-plans",
            ListContext::InitialSetup => "initial-setup",
            ListContext::DailyContent => "daily-content",
        };
        f.write_str(name)
    }
}
