//! Shared download progress state.

use parking_lot::RwLock;
use serde::Serialize;

/// Point-in-time copy of a download's progress.
///
/// `0/0` is permitted and means "unknown/just started".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    /// Bytes downloaded so far.
    pub progress_bytes: u64,
    /// Expected total bytes.
    pub total_bytes: u64,
}

impl ProgressSnapshot {
    /// Progress as a ratio in `0.0..=1.0`, or `None` while the total is
    /// unknown.
    pub fn ratio(&self) -> Option<f64> {
        if self.total_bytes == 0 {
            None
        } else {
            Some(self.progress_bytes as f64 / self.total_bytes as f64)
        }
    }
}

/// Mutable-in-place progress cell for one in-flight download.
///
/// The registry hands out `Arc<DownloadProgress>`, so every observer of a
/// tag shares one cell and sees updates without re-fetching. Reads go
/// through [`snapshot`](Self::snapshot), which copies both fields under one
/// read lock, never a torn pair.
#[derive(Debug)]
pub struct DownloadProgress {
    state: RwLock<ProgressSnapshot>,
}

impl DownloadProgress {
    /// Create a cell with initial progress.
    pub fn new(progress_bytes: u64, total_bytes: u64) -> Self {
        Self {
            state: RwLock::new(ProgressSnapshot {
                progress_bytes,
                total_bytes,
            }),
        }
    }

    /// Overwrite both fields. Later values replace earlier ones; there is
    /// no merging.
    pub fn update(&self, progress_bytes: u64, total_bytes: u64) {
        *self.state.write() = ProgressSnapshot {
            progress_bytes,
            total_bytes,
        };
    }

    /// Consistent copy of the current progress.
    pub fn snapshot(&self) -> ProgressSnapshot {
        *self.state.read()
    }
}
