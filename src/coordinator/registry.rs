//! In-flight download registry.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::locale::LanguageTag;
use crate::progress::DownloadProgress;

/// Outcome of recording a progress observation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Observation {
    /// The tag was new; an entry was inserted.
    FirstSight,
    /// The tag was already tracked; its cell was updated in place.
    Update,
}

/// Mapping from language tag to its shared progress cell.
///
/// A tag is present iff a download for it has been observed as started and
/// not yet confirmed complete. Progress observations never remove entries;
/// removal happens only through [`complete`](Self::complete), driven by an
/// installer-confirmed signal upstream.
#[derive(Debug, Default)]
pub(crate) struct InFlightRegistry {
    downloads: DashMap<LanguageTag, Arc<DownloadProgress>>,
}

impl InFlightRegistry {
    /// Record a progress observation for `tag`.
    ///
    /// The insert-vs-update decision is atomic per tag: racing first-sight
    /// observations resolve to exactly one `FirstSight`, and the inserted
    /// entry is visible to lookups before this returns.
    pub(crate) fn observe(
        &self,
        tag: &LanguageTag,
        progress_bytes: u64,
        total_bytes: u64,
    ) -> Observation {
        // Fast path: downloads spend most of their life as updates.
        if let Some(cell) = self.downloads.get(tag) {
            cell.update(progress_bytes, total_bytes);
            return Observation::Update;
        }
        match self.downloads.entry(tag.clone()) {
            Entry::Occupied(entry) => {
                entry.get().update(progress_bytes, total_bytes);
                Observation::Update
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(DownloadProgress::new(progress_bytes, total_bytes)));
                Observation::FirstSight
            }
        }
    }

    /// Shared progress cell for `tag`, if a download is in flight.
    pub(crate) fn get(&self, tag: &LanguageTag) -> Option<Arc<DownloadProgress>> {
        self.downloads.get(tag).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop the entry for `tag`. Returns whether an entry existed.
    pub(crate) fn complete(&self, tag: &LanguageTag) -> bool {
        self.downloads.remove(tag).is_some()
    }

    /// Number of in-flight downloads.
    pub(crate) fn len(&self) -> usize {
        self.downloads.len()
    }
}
