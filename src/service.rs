//! Process-level assembly of the language module services.
//!
//! [`LanguageService`] wires the coordinator to the progress bus and owns
//! the drain task forwarding bus events into it. It is constructed once per
//! process; presentation layers create a controller from it per screen.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use langpack::{LangpackConfig, LanguageService};
//!
//! let service = LanguageService::start(LangpackConfig::default(), installer);
//!
//! // Installer side reports progress through the publisher.
//! let publisher = service.publisher();
//! publisher.publish(tag, 1024, 100_000).await?;
//!
//! // A screen builds its controller from the shared coordinator.
//! let controller = service.controller(source, resolver);
//!
//! // Graceful shutdown.
//! service.shutdown().await;
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::LangpackConfig;
use crate::coordinator::DownloadCoordinator;
use crate::installer::ModuleInstaller;
use crate::list::{LanguageListController, LocalizationSource};
use crate::locale::TagResolver;
use crate::progress::{ProgressBus, ProgressEvent, ProgressPublisher};

/// Owns the process-wide coordinator and the progress bus drain task.
pub struct LanguageService {
    coordinator: Arc<DownloadCoordinator>,
    publisher: ProgressPublisher,
    cancellation: CancellationToken,
    drain: JoinHandle<()>,
}

impl LanguageService {
    /// Start the service: build the coordinator and spawn the bus drain
    /// task.
    ///
    /// Must be called within a Tokio runtime.
    pub fn start(config: LangpackConfig, installer: Arc<dyn ModuleInstaller>) -> Self {
        let coordinator = Arc::new(DownloadCoordinator::new(installer));
        let (publisher, mut bus) = ProgressBus::new(config.bus_capacity);
        let cancellation = CancellationToken::new();

        let drain_coordinator = Arc::clone(&coordinator);
        let drain_cancellation = cancellation.clone();
        let drain = tokio::spawn(async move {
            loop {
                tokio::select! {
                    event = bus.recv() => match event {
                        Some(ProgressEvent::Progress { tag, progress_bytes, total_bytes }) => {
                            drain_coordinator.ingest_progress(&tag, progress_bytes, total_bytes);
                        }
                        Some(ProgressEvent::Completed { tag }) => {
                            drain_coordinator.ingest_completed(&tag);
                        }
                        None => break,
                    },
                    _ = drain_cancellation.cancelled() => break,
                }
            }
            debug!("progress bus drain stopped");
        });

        info!(bus_capacity = config.bus_capacity, "language service started");
        Self {
            coordinator,
            publisher,
            cancellation,
            drain,
        }
    }

    /// Shared coordinator handle.
    pub fn coordinator(&self) -> Arc<DownloadCoordinator> {
        Arc::clone(&self.coordinator)
    }

    /// Publisher handle for the installer-side progress stream.
    pub fn publisher(&self) -> ProgressPublisher {
        self.publisher.clone()
    }

    /// Controller wired to this service's coordinator.
    pub fn controller(
        &self,
        source: Arc<dyn LocalizationSource>,
        resolver: Arc<dyn TagResolver>,
    ) -> LanguageListController {
        LanguageListController::new(source, resolver, self.coordinator())
    }

    /// Stop the drain task and wait for it to finish.
    pub async fn shutdown(self) {
        self.cancellation.cancel();
        self.drain.await.ok();
        info!("language service stopped");
    }
}
