//! tabbar-logging - Tracing to host log sink bridge
//!
//! This crate provides:
//! - [`HostLoggingLayer`] tracing layer that forwards logs to the host
//! - [`LogSink`] type for the host log sink
//! - Dynamic log level filtering through [`LogSinkManager`]

mod layer;
mod sink;

pub use layer::{HostLoggingLayer, init_logging, init_logging_with_level};
pub use sink::{LogSink, LogSinkManager};
pub use tabbar_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HostLoggingLayer, LogLevel, LogSink, LogSinkManager, init_logging};
}
