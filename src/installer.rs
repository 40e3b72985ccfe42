//! External module installer contract.
//!
//! The installer performs the actual asynchronous download and install of a
//! language module; this crate only defines the contract it requires.
//! Install and uninstall are fire-and-forget requests whose completion, if
//! observed at all, arrives later through the progress bus or an
//! installed-state poll. The coordinator never blocks on either.

use crate::locale::LanguageTag;

/// Contract for the external module installer.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock installers in tests.
pub trait ModuleInstaller: Send + Sync {
    /// Whether the module for `tag` is currently installed.
    fn is_installed(&self, tag: &LanguageTag) -> bool;

    /// Number of language modules currently installed.
    fn installed_count(&self) -> usize;

    /// Request installation of the module for `tag`.
    ///
    /// Returns once the request is accepted, not once installation
    /// completes.
    fn enqueue_install(&self, tag: &LanguageTag);

    /// Request removal of the module for `tag`.
    ///
    /// Best-effort; removal happens at an unspecified future time.
    fn request_uninstall(&self, tag: &LanguageTag);
}
