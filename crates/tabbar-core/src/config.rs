//! Runtime settings shared by the host and native sides

use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Platform whose native widget renders the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// UIKit `UITabBar`
    Ios,
    /// Material `BottomNavigationView`
    Android,
    /// No widget; state is only recorded (desktop and CI)
    #[default]
    Headless,
}

/// Tab bar settings, typically loaded from JSON at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabBarSettings {
    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Target platform for native defaults and toggles
    #[serde(default)]
    pub platform: Platform,

    /// Duration of the show/hide transition in milliseconds
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Appearance reported by the headless renderer
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_animation_ms() -> u64 {
    300
}

impl Default for TabBarSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            platform: Platform::default(),
            animation_ms: default_animation_ms(),
            dark_mode: false,
        }
    }
}

impl TabBarSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Parsed `log_level`; unrecognized names fall back to `Info`
    pub fn parsed_log_level(&self) -> LogLevel {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "off" => LogLevel::Off,
            _ => LogLevel::Info,
        }
    }
}
