//! UI thread command queue

use tabbar_core::{Platform, StylePayload, TabBarSettings};
use tokio::sync::mpsc;

use crate::{NativeRenderer, RenderedItem, ResolvedStyle};

/// Work posted to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    RenderTabs(Vec<RenderedItem>),
    /// Resolved against the renderer's appearance when applied
    ApplyStyle(StylePayload),
    SetBadge { tag: usize, count: Option<u32> },
    Select { tag: usize },
    SetVisible { visible: bool, animate_ms: u64 },
    Navigate { url: String },
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::RenderTabs(_) => "render_tabs",
            UiCommand::ApplyStyle(_) => "apply_style",
            UiCommand::SetBadge { .. } => "set_badge",
            UiCommand::Select { .. } => "select",
            UiCommand::SetVisible { .. } => "set_visible",
            UiCommand::Navigate { .. } => "navigate",
        }
    }
}

/// Sending half of the UI queue; its presence is the host context
#[derive(Debug, Clone)]
pub struct UiHandle {
    sender: mpsc::UnboundedSender<UiCommand>,
}

impl UiHandle {
    /// Post a command without waiting for it to run
    ///
    /// Returns `false` if the UI loop is gone and the command was dropped.
    pub fn post(&self, command: UiCommand) -> bool {
        let name = command.name();
        match self.sender.send(command) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!(command = name, "UI loop closed, command dropped");
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Receiving half of the UI queue, owning the renderer
///
/// Drive it with [`MainLoop::drain`] from a platform run loop, or spawn
/// [`MainLoop::run`] on a tokio runtime.
pub struct MainLoop<R> {
    receiver: mpsc::UnboundedReceiver<UiCommand>,
    renderer: R,
    platform: Platform,
}

impl<R: NativeRenderer> MainLoop<R> {
    /// Create a loop and the handle that feeds it
    pub fn new(renderer: R, platform: Platform) -> (UiHandle, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let main_loop = Self {
            receiver,
            renderer,
            platform,
        };
        (UiHandle { sender }, main_loop)
    }

    /// Create a loop for the platform named in `settings`
    pub fn from_settings(renderer: R, settings: &TabBarSettings) -> (UiHandle, Self) {
        Self::new(renderer, settings.platform)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Apply one command to the renderer
    pub fn apply(&mut self, command: UiCommand) {
        tracing::trace!(command = command.name(), "applying UI command");
        match command {
            UiCommand::RenderTabs(items) => self.renderer.render_tabs(&items),
            UiCommand::ApplyStyle(style) => {
                let dark_mode = self.renderer.is_dark_mode();
                let resolved = ResolvedStyle::resolve(&style, self.platform, dark_mode);
                self.renderer.apply_style(&resolved);
            }
            UiCommand::SetBadge { tag, count } => self.renderer.set_badge(tag, count),
            UiCommand::Select { tag } => self.renderer.set_active(tag),
            UiCommand::SetVisible {
                visible,
                animate_ms,
            } => self.renderer.set_visible(visible, animate_ms),
            UiCommand::Navigate { url } => self.renderer.navigate(&url),
        }
    }

    /// Apply every command queued so far, returning how many ran
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.receiver.try_recv() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Apply commands as they arrive until every [`UiHandle`] is dropped
    pub async fn run(mut self) -> R {
        while let Some(command) = self.receiver.recv().await {
            self.apply(command);
        }
        tracing::debug!("UI loop finished");
        self.renderer
    }
}

#[cfg(test)]
#[path = "ui/ui_tests.rs"]
mod ui_tests;
