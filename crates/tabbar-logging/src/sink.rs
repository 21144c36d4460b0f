//! Host log sink management

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tabbar_core::LogLevel;

/// Host log sink
///
/// Receives the level, the target (module path) and the formatted message.
/// Sinks may be invoked from any thread.
pub type LogSink = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Global log sink manager
static SINK_MANAGER: OnceCell<LogSinkManager> = OnceCell::new();

/// Manager for the host log sink and the active level filter
pub struct LogSinkManager {
    sink: RwLock<Option<LogSink>>,
    level: AtomicU8,
}

impl LogSinkManager {
    /// Create a new sink manager
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global sink manager instance
    pub fn global() -> &'static LogSinkManager {
        SINK_MANAGER.get_or_init(LogSinkManager::new)
    }

    /// Install a sink, replacing any previous one
    pub fn set_sink<F>(&self, sink: F)
    where
        F: Fn(LogLevel, &str, &str) + Send + Sync + 'static,
    {
        *self.sink.write() = Some(Arc::new(sink));
    }

    /// Remove the current sink
    pub fn clear_sink(&self) {
        *self.sink.write() = None;
    }

    /// Whether a sink is installed
    pub fn has_sink(&self) -> bool {
        self.sink.read().is_some()
    }

    /// Set the log level
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the current log level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Forward a message to the sink if one is set and the level is enabled
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        // Sinks may log themselves, so never hold the lock while calling out
        let sink = match self.sink.read().clone() {
            Some(sink) => sink,
            None => return,
        };

        sink(level, target, message);
    }
}

impl Default for LogSinkManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogSinkManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSinkManager")
            .field("level", &self.level())
            .field("has_sink", &self.has_sink())
            .finish()
    }
}
