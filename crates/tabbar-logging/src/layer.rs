//! Tracing layer that forwards to the host log sink

use crate::sink::LogSinkManager;
use std::fmt::Write;
use tabbar_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Hands every enabled `tracing` event to a [`LogSinkManager`]
///
/// Events are flattened to one line: the `message` field followed by the
/// remaining fields as `key=value`.
pub struct HostLoggingLayer {
    manager: &'static LogSinkManager,
}

impl HostLoggingLayer {
    pub fn new() -> Self {
        Self::with_manager(LogSinkManager::global())
    }

    /// Forward to `manager` instead of the process-wide one
    pub fn with_manager(manager: &'static LogSinkManager) -> Self {
        Self { manager }
    }

    fn accepts(&self, level: &Level) -> bool {
        self.manager.is_enabled(log_level(level))
    }
}

fn log_level(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

impl Default for HostLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for HostLoggingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.accepts(metadata.level())
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // The level can change after `enabled` cached its answer.
        if !self.accepts(metadata.level()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.manager.log(
            log_level(metadata.level()),
            metadata.target(),
            &visitor.into_message(),
        );
    }
}

/// Collects the `message` field and renders the rest as `key=value` pairs
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn into_message(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Install [`HostLoggingLayer`] as the global subscriber
///
/// A no-op when the app already installed its own subscriber.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let installed = tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(HostLoggingLayer::new()),
    );
    if installed.is_err() {
        tracing::debug!("global subscriber already set, host logging layer not installed");
    }
}

pub fn init_logging_with_level(level: LogLevel) {
    LogSinkManager::global().set_level(level);
    init_logging();
}
