//! Langpack - on-demand language module coordination.
//!
//! This library coordinates asynchronous installation of per-language
//! content modules. It deduplicates download requests per language tag,
//! ingests out-of-band progress events from an external installer and fans
//! them out to any number of observers, reconciles installed state against
//! in-flight downloads, and refuses to remove the last installed language.
//!
//! # Architecture
//!
//! ```text
//! LocalizationSource ──► LanguageListController ──► DownloadCoordinator
//!                                                         ▲
//! ModuleInstaller ──► ProgressPublisher ──► ProgressBus ──┘ (drain task)
//! ```
//!
//! Rendering, navigation, and localized strings stay outside this crate,
//! behind the [`LocalizationSource`](list::LocalizationSource),
//! [`ModuleInstaller`](installer::ModuleInstaller), and
//! [`TagResolver`](locale::TagResolver) seams. The in-flight registry and
//! its observer set are process-wide and outlive any single screen:
//! screens subscribe on becoming visible and unsubscribe on disappearing,
//! while a download started from one screen stays visible from another.

pub mod config;
pub mod coordinator;
pub mod installer;
pub mod list;
pub mod locale;
pub mod log;
pub mod progress;
pub mod service;

pub use config::LangpackConfig;
pub use coordinator::{DownloadCoordinator, DownloadObserver, OperationResult};
pub use installer::ModuleInstaller;
pub use list::{
    ItemViewState, LanguageListController, ListContext, LoadError, LocalizationSource,
    SelectionOutcome, SourceError,
};
pub use locale::{LanguageTag, Localization, TagError, TagResolver};
pub use progress::{
    DownloadProgress, ProgressBus, ProgressEvent, ProgressPublisher, ProgressSnapshot,
    PublishError,
};
pub use service::LanguageService;
