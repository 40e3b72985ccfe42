//! Service configuration.

/// Default capacity of the progress event channel.
///
/// Progress events are small and the drain task does little per event, so a
/// modest buffer absorbs bursts from several simultaneous downloads while
/// keeping a slow consumer from holding unbounded memory.
pub const DEFAULT_BUS_CAPACITY: usize = 64;

/// Construction-time configuration for
/// [`LanguageService`](crate::service::LanguageService).
#[derive(Debug, Clone)]
pub struct LangpackConfig {
    /// Capacity of the progress event channel.
    pub bus_capacity: usize,
}

impl Default for LangpackConfig {
    fn default() -> Self {
        Self {
            bus_capacity: DEFAULT_BUS_CAPACITY,
        }
    }
}
