//! Tracing setup helpers.
//!
//! Library code logs through `tracing` macros; embedding binaries call one
//! of the initializers here once at startup. A `RUST_LOG` directive
//! overrides the default when set.

use std::path::Path;

use time::format_description::well_known::Rfc3339;
use time::UtcOffset;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::EnvFilter;

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn local_timer() -> OffsetTime<Rfc3339> {
    // Local offset lookup can fail after threads start; fall back to UTC.
    OffsetTime::local_rfc_3339().unwrap_or_else(|_| OffsetTime::new(UtcOffset::UTC, Rfc3339))
}

/// Install a console subscriber with RFC 3339 local-time timestamps.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_timer(local_timer())
        .init();
}

/// Install a daily-rolling file subscriber.
///
/// The returned guard must be held for the lifetime of the process;
/// dropping it flushes and stops the background writer.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_file_tracing(
    directory: impl AsRef<Path>,
    file_prefix: &str,
    default_directive: &str,
) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(directory, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_timer(local_timer())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
