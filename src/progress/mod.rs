//! Download progress state and the progress event bus.
//!
//! ```text
//! installer side                          core
//! ProgressPublisher ──publish──► ProgressBus ──drain──► DownloadCoordinator
//! ```
//!
//! [`DownloadProgress`] is the shared mutable cell observers hold;
//! [`ProgressBus`] is the process-wide channel feeding the coordinator.

mod bus;
mod state;

pub use bus::{ProgressBus, ProgressEvent, ProgressPublisher, PublishError};
pub use state::{DownloadProgress, ProgressSnapshot};
