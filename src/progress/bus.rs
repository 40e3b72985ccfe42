//! Process-wide progress event channel.
//!
//! The bus carries progress events from the external installer to the
//! download coordinator and only the coordinator. Delivery is
//! at-least-once: `publish` waits for channel capacity instead of dropping.
//! The single channel preserves send order per publisher handle, which
//! keeps per-tag delivery FIFO for the one-stream-per-download sources an
//! installer runs. There is no persistence and no historical replay;
//! events published before a drain task exists are buffered only up to the
//! channel capacity.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::locale::LanguageTag;

/// Event carried by the progress bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Byte-level progress for an in-flight download.
    Progress {
        tag: LanguageTag,
        progress_bytes: u64,
        total_bytes: u64,
    },
    /// The installer confirmed the module for `tag` finished installing.
    Completed { tag: LanguageTag },
}

/// Error returned when publishing to a bus whose consumer is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("progress bus is closed")]
pub struct PublishError;

/// Publisher half of the progress bus.
///
/// Clone freely; the installer side holds one handle per download stream.
#[derive(Debug, Clone)]
pub struct ProgressPublisher {
    tx: mpsc::Sender<ProgressEvent>,
}

impl ProgressPublisher {
    /// Publish a progress event for `tag`.
    pub async fn publish(
        &self,
        tag: LanguageTag,
        progress_bytes: u64,
        total_bytes: u64,
    ) -> Result<(), PublishError> {
        self.tx
            .send(ProgressEvent::Progress {
                tag,
                progress_bytes,
                total_bytes,
            })
            .await
            .map_err(|_| PublishError)
    }

    /// Publish an installer-confirmed completion signal for `tag`.
    pub async fn completed(&self, tag: LanguageTag) -> Result<(), PublishError> {
        self.tx
            .send(ProgressEvent::Completed { tag })
            .await
            .map_err(|_| PublishError)
    }
}

/// Receiving half of the progress bus, consumed by a single drain task.
#[derive(Debug)]
pub struct ProgressBus {
    rx: mpsc::Receiver<ProgressEvent>,
}

impl ProgressBus {
    /// Create a bus with the given channel capacity.
    pub fn new(capacity: usize) -> (ProgressPublisher, ProgressBus) {
        let (tx, rx) = mpsc::channel(capacity);
        (ProgressPublisher { tx }, ProgressBus { rx })
    }

    /// Receive the next event; `None` once every publisher is dropped.
    pub async fn recv(&mut self) -> Option<ProgressEvent> {
        self.rx.recv().await
    }
}
