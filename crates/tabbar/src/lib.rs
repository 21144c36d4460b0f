//! # tabbar
//!
//! A native bottom tab bar for hybrid mobile apps, described from host code
//! and rendered by platform widgets.
//!
//! The host builds tabs and a style, [`TabBar`] validates and sends them
//! across the bridge, and native code renders them and reports taps back as
//! [`NativeEvent`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tabbar::prelude::*;
//!
//! let bridge = LocalBridge::with_settings(&TabBarSettings::default());
//! let (ui, main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
//! bridge.manager().attach(ui);
//!
//! let tab_bar = Arc::new(TabBar::new(bridge));
//! tab_bar.route_native_events();
//!
//! tab_bar.configure(
//!     vec![
//!         TabItem::new("home").label("Home").icon("house").url("/").active(),
//!         TabItem::new("create")
//!             .label("Create")
//!             .icon("plus.circle")
//!             .action_with("new", |id, action| {
//!                 tracing::info!(id, action, "create tapped");
//!                 Ok(())
//!             }),
//!     ],
//!     Some(TabBarStyle::new().active_color("#007AFF").dark_active_color("#0A84FF")),
//! )?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`tabbar_core`] - Tab model, validation, registry, payloads
//! - [`tabbar_transport`] - Bridge envelopes and client trait
//! - [`tabbar_native`] - Native manager, UI queue, renderers
//! - [`tabbar_logging`] - Host log sink layer

mod host;
mod local;
mod provider;

pub use host::{EventListener, EventOutcome, TabBar};
pub use provider::TabBarProvider;

// Re-export core types
pub use tabbar_core::{
    ActionCallback, ActionRegistry, BarPayload, BridgeMethod, ColorKey, LogLevel, MAX_TABS,
    NativeEvent, Platform, StylePayload, TabActionTriggered, TabBarError, TabBarResult,
    TabBarSettings, TabBarState, TabBarStyle, TabIconType, TabItem, TabPayload, TabSelected,
    TabType, Visibility, validate_tabs,
};

// Re-export bridge and native types
pub use tabbar_logging::{HostLoggingLayer, LogSinkManager, init_logging, init_logging_with_level};
pub use tabbar_native::{
    Color, EventSink, HeadlessRenderer, LocalBridge, MainLoop, NativeRenderer, RenderedItem,
    ResolvedStyle, TabBarFunctions, TabBarManager, UiCommand, UiHandle,
};
pub use tabbar_transport::{BridgeClient, BridgeRequest, BridgeResponse};

// Re-export common dependencies that app authors need
pub use anyhow;
pub use serde_json;
pub use tracing;

/// Install the host logging layer at the level named in `settings`
pub fn init_logging_from(settings: &TabBarSettings) {
    init_logging_with_level(settings.parsed_log_level());
}

/// Prelude module for convenient imports.
///
/// Use `use tabbar::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BridgeClient, EventOutcome, HeadlessRenderer, LocalBridge, MainLoop, NativeEvent,
        Platform, TabBar, TabBarError, TabBarProvider, TabBarResult, TabBarSettings, TabBarStyle,
        TabItem, TabType,
    };
}
