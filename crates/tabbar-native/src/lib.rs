//! tabbar-native - Native side of the tab bar bridge
//!
//! This crate provides:
//! - [`TabBarFunctions`] answering `TabBar.*` bridge calls
//! - [`TabBarManager`] holding the rendered tab set, style, and visibility
//! - [`UiHandle`] and [`MainLoop`] posting commands to the UI thread
//! - [`NativeRenderer`] implemented per platform, with [`HeadlessRenderer`]
//!   for desktop and CI
//! - [`LocalBridge`], an in-process [`tabbar_transport::BridgeClient`]

mod appearance;
mod color;
mod functions;
mod local;
mod manager;
mod renderer;
mod ui;

pub use appearance::{DEFAULT_ACTIVE_COLOR, DEFAULT_INACTIVE_COLOR, PlatformDefaults, ResolvedStyle};
pub use color::Color;
pub use functions::TabBarFunctions;
pub use local::LocalBridge;
pub use manager::{EventSink, TabBarManager};
pub use renderer::{HeadlessRenderer, Icon, NativeRenderer, RenderedItem};
pub use ui::{MainLoop, UiCommand, UiHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EventSink, HeadlessRenderer, LocalBridge, MainLoop, NativeRenderer, TabBarFunctions,
        TabBarManager, UiHandle,
    };
}
