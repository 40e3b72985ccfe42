//! First-sight download notification fan-out.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::locale::LanguageTag;

/// Receives a notification when a previously-unseen tag starts
/// downloading.
///
/// Observers learn only that a download now exists; they query
/// [`current_progress`](super::DownloadCoordinator::current_progress) for
/// state on their own refresh cadence. No ordering is guaranteed between
/// observers.
pub trait DownloadObserver: Send + Sync {
    /// Called exactly once per tag, when its first progress event arrives.
    fn on_download_started(&self, tag: &LanguageTag);
}

/// Set of registered observers.
///
/// Identity is `Arc` pointer identity, so an observer is removed with the
/// same handle it was added with. Callbacks run on a clone of the set taken
/// under the lock, so an observer may subscribe or unsubscribe from within
/// its callback without deadlocking.
#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Mutex<Vec<Arc<dyn DownloadObserver>>>,
}

impl ObserverSet {
    pub(crate) fn add(&self, observer: Arc<dyn DownloadObserver>) {
        self.observers.lock().push(observer);
    }

    /// Remove `observer`. Idempotent; a no-op when never added.
    pub(crate) fn remove(&self, observer: &Arc<dyn DownloadObserver>) {
        self.observers.lock().retain(|o| !Arc::ptr_eq(o, observer));
    }

    pub(crate) fn notify_started(&self, tag: &LanguageTag) {
        let observers = self.observers.lock().clone();
        for observer in observers {
            observer.on_download_started(tag);
        }
    }
}
