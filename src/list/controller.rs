//! Language list control.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::coordinator::{DownloadCoordinator, OperationResult};
use crate::locale::{LanguageTag, Localization, TagResolver};
use crate::progress::DownloadProgress;

use super::context::ListContext;
use super::error::LoadError;
use super::source::LocalizationSource;

/// Per-item state the presentation layer binds against.
#[derive(Debug, Clone)]
pub struct ItemViewState {
    /// Shared progress cell while a download for the item's tag is in
    /// flight.
    pub progress: Option<Arc<DownloadProgress>>,
    /// Whether the item's module is installed.
    pub installed: bool,
    /// Whether this list offers an explicit download action.
    pub download_allowed: bool,
}

/// Outcome of selecting a language from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The language is ready; selection is complete.
    Finished(Localization),
    /// A module download was requested. The list stays open until the
    /// install completes out of band.
    DownloadRequested,
}

/// Loads candidate languages and routes user intents into the coordinator.
///
/// One controller serves one screen; the coordinator behind it is the
/// process-wide one, so state is shared across screens.
pub struct LanguageListController {
    source: Arc<dyn LocalizationSource>,
    resolver: Arc<dyn TagResolver>,
    coordinator: Arc<DownloadCoordinator>,
}

impl LanguageListController {
    /// Create a controller over the given collaborators.
    pub fn new(
        source: Arc<dyn LocalizationSource>,
        resolver: Arc<dyn TagResolver>,
        coordinator: Arc<DownloadCoordinator>,
    ) -> Self {
        Self {
            source,
            resolver,
            coordinator,
        }
    }

    /// Load the candidate set for `context`.
    ///
    /// Items come back sorted ascending by display name (byte-wise) and
    /// deduplicated by id, first occurrence winning. The query is one-shot;
    /// a source failure is surfaced, never retried here. `country_hint`
    /// only reaches the source for [`ListContext::InitialSetup`].
    pub async fn load(
        &self,
        context: ListContext,
        country_hint: Option<&str>,
    ) -> Result<Vec<Localization>, LoadError> {
        let fetched = match context {
            ListContext::AppInterface => self.source.app_localizations().await,
            ListContext::ContentPlans => self.source.plan_localizations().await,
            ListContext::InitialSetup => self.source.initial_localizations(country_hint).await,
            ListContext::DailyContent => self.source.daily_localizations().await,
        };
        let mut items = fetched.map_err(|source| LoadError::LoadFailed { context, source })?;

        items.sort_by(|a, b| a.name.cmp(&b.name));
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.id.clone()));

        debug!(context = %context, count = items.len(), "language list loaded");
        Ok(items)
    }

    /// Tag governing installed/progress lookups for `item` in `context`.
    fn relevant_tag(&self, item: &Localization, context: ListContext) -> LanguageTag {
        match context {
            ListContext::AppInterface => self.resolver.interface_tag(&item.id),
            _ => self.resolver.content_tag(&item.id),
        }
    }

    /// State for one list row.
    pub fn view_state_for(&self, item: &Localization, context: ListContext) -> ItemViewState {
        let tag = self.relevant_tag(item, context);
        ItemViewState {
            progress: self.coordinator.current_progress(&tag),
            installed: self.coordinator.is_installed(&tag),
            download_allowed: context.download_allowed(),
        }
    }

    /// Handle selection of `item`.
    ///
    /// An installed language completes the selection immediately, with no
    /// install request. Otherwise a download is requested and the selection
    /// stays pending; completion is observed out of band.
    pub fn on_select(&self, item: &Localization, context: ListContext) -> SelectionOutcome {
        let tag = self.relevant_tag(item, context);
        if self.coordinator.is_installed(&tag) {
            debug!(tag = %tag, "selection finished, module present");
            return SelectionOutcome::Finished(item.clone());
        }
        self.coordinator.start_download(&tag);
        SelectionOutcome::DownloadRequested
    }

    /// Forward an uninstall intent for `item`.
    ///
    /// Uninstall concerns the interface module for the item's language.
    /// The coordinator's outcome is returned to the caller, including the
    /// last-language refusal.
    pub fn on_uninstall_requested(&self, item: &Localization) -> OperationResult {
        let tag = self.resolver.interface_tag(&item.id);
        self.coordinator.request_uninstall(&tag)
    }
}
