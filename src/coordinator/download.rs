//! Process-wide download coordination.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::installer::ModuleInstaller;
use crate::locale::LanguageTag;
use crate::progress::DownloadProgress;

use super::observer::{DownloadObserver, ObserverSet};
use super::registry::{InFlightRegistry, Observation};

/// Outcome of an install or uninstall request.
///
/// These are informational outcomes the caller routes on, not errors: an
/// already-installed module and a refused uninstall are expected states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// A download request was handed to the installer.
    Started,
    /// The module is already installed; nothing was requested.
    AlreadyInstalled,
    /// An uninstall request was handed to the installer. Removal completes
    /// at an unspecified future time.
    Accepted {
        /// Human-readable note about the deferred removal.
        note: String,
    },
    /// Refused: at least one language module must remain installed.
    LastLanguageProtected,
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationResult::Started => write!(f, "download started"),
            OperationResult::AlreadyInstalled => write!(f, "already installed"),
            OperationResult::Accepted { note } => write!(f, "{}", note),
            OperationResult::LastLanguageProtected => {
                write!(f, "refused: the last installed language cannot be removed")
            }
        }
    }
}

/// Process-wide download coordinator.
///
/// Owns the in-flight registry and the observer set. Constructed once per
/// process and shared behind an [`Arc`]; the coordinator has no lifecycle
/// of its own. Screens subscribe when they become visible and unsubscribe
/// when they disappear, while the registry persists, so a download started
/// from one screen stays visible from another.
pub struct DownloadCoordinator {
    installer: Arc<dyn ModuleInstaller>,
    registry: InFlightRegistry,
    observers: ObserverSet,
}

impl DownloadCoordinator {
    /// Create a coordinator delegating installed state to `installer`.
    pub fn new(installer: Arc<dyn ModuleInstaller>) -> Self {
        Self {
            installer,
            registry: InFlightRegistry::default(),
            observers: ObserverSet::default(),
        }
    }

    /// Request a download of the module for `tag`.
    ///
    /// Returns once the request is accepted, never waiting for the install
    /// to finish. An already-installed module short-circuits without
    /// touching the installer's queue.
    pub fn start_download(&self, tag: &LanguageTag) -> OperationResult {
        if self.installer.is_installed(tag) {
            debug!(tag = %tag, "module already installed, skipping download");
            return OperationResult::AlreadyInstalled;
        }
        self.installer.enqueue_install(tag);
        info!(tag = %tag, "download requested");
        OperationResult::Started
    }

    /// Ingest a progress event from the bus.
    ///
    /// The first event for a tag inserts its registry entry and notifies
    /// every observer exactly once; later events mutate the shared cell in
    /// place with no further notification. Observers holding the cell see
    /// the update live; observers that only recorded the tag re-query
    /// [`current_progress`](Self::current_progress) on their own refresh.
    pub fn ingest_progress(&self, tag: &LanguageTag, progress_bytes: u64, total_bytes: u64) {
        match self.registry.observe(tag, progress_bytes, total_bytes) {
            Observation::FirstSight => {
                debug!(tag = %tag, total_bytes, "download observed, notifying observers");
                self.observers.notify_started(tag);
            }
            Observation::Update => {}
        }
    }

    /// Ingest a completion signal for `tag`.
    ///
    /// The in-flight entry is removed only when the installer confirms the
    /// module installed; an unconfirmed signal leaves the entry alone and
    /// the tag keeps reporting as in flight.
    pub fn ingest_completed(&self, tag: &LanguageTag) {
        if !self.installer.is_installed(tag) {
            warn!(tag = %tag, "completion signal for a module not installed, keeping entry");
            return;
        }
        if self.registry.complete(tag) {
            info!(tag = %tag, "download complete, registry entry removed");
        }
    }

    /// Shared progress cell for `tag`, if a download is in flight.
    pub fn current_progress(&self, tag: &LanguageTag) -> Option<Arc<DownloadProgress>> {
        self.registry.get(tag)
    }

    /// Whether the module for `tag` is installed.
    pub fn is_installed(&self, tag: &LanguageTag) -> bool {
        self.installer.is_installed(tag)
    }

    /// Number of downloads currently in flight.
    pub fn in_flight(&self) -> usize {
        self.registry.len()
    }

    /// Request removal of the module for `tag`.
    ///
    /// Refused without contacting the installer when it would remove the
    /// last installed language. Otherwise best-effort: the result reports
    /// acceptance of the request, not completion of the removal.
    pub fn request_uninstall(&self, tag: &LanguageTag) -> OperationResult {
        if self.installer.installed_count() <= 1 {
            warn!(tag = %tag, "refusing uninstall of the last installed language");
            return OperationResult::LastLanguageProtected;
        }
        self.installer.request_uninstall(tag);
        info!(tag = %tag, "uninstall requested");
        OperationResult::Accepted {
            note: format!(
                "Requested uninstall of {}. This will happen at some point in the future.",
                tag
            ),
        }
    }

    /// Register `observer` for first-sight download notifications.
    pub fn subscribe(&self, observer: Arc<dyn DownloadObserver>) {
        self.observers.add(observer);
    }

    /// Remove `observer`. Idempotent and safe when never subscribed.
    pub fn unsubscribe(&self, observer: &Arc<dyn DownloadObserver>) {
        self.observers.remove(observer);
    }
}
