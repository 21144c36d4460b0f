//! tabbar-core - Tab bar model, validation, and wire payloads
//!
//! This crate provides the pieces shared by the host and native sides:
//! - [`TabItem`] and [`TabBarStyle`] builders
//! - [`validate_tabs`] for the structural rules of a tab set
//! - [`ActionRegistry`] mapping action names to host callbacks
//! - [`BarPayload`] and friends, the JSON sent across the bridge
//! - [`NativeEvent`] raised by the native side
//! - [`TabBarError`] for error handling

mod config;
mod error;
mod event;
mod item;
mod lifecycle;
mod method;
mod payload;
mod registry;
mod style;
mod validate;

pub use config::{Platform, TabBarSettings};
pub use error::{TabBarError, TabBarResult};
pub use event::{NativeEvent, TabActionTriggered, TabSelected};
pub use item::{TabIconType, TabItem, TabType, Visibility};
pub use lifecycle::TabBarState;
pub use method::BridgeMethod;
pub use payload::{BarPayload, SetActiveParams, SetBadgeParams, StyleColors, StylePayload, TabPayload};
pub use registry::{ActionCallback, ActionRegistry};
pub use style::{ColorKey, TabBarStyle};
pub use validate::{MAX_TABS, validate_tabs};

/// Log levels forwarded to the host log sink
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActionRegistry, LogLevel, TabBarError, TabBarResult, TabBarStyle, TabItem, TabType,
        Visibility, validate_tabs,
    };
}
