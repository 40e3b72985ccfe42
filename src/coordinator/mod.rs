//! Download coordination.
//!
//! The coordinator is the process-wide owner of in-flight download state.
//! It deduplicates start requests against installed state, ingests
//! out-of-band progress events, fans out first-sight notifications to
//! subscribed observers, and enforces the last-language rule on uninstall.
//!
//! # Architecture
//!
//! ```text
//! ProgressPublisher ──► ProgressBus ──► drain task ──► DownloadCoordinator
//!                                                        │           ▲
//!                                     on_download_started│           │current_progress
//!                                                        ▼           │
//!                                                      observers (UI lists)
//! ```

mod download;
mod observer;
mod registry;

pub use download::{DownloadCoordinator, OperationResult};
pub use observer::DownloadObserver;

#[cfg(test)]
mod tests;
