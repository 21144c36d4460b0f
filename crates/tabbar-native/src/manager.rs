//! Native tab bar state

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tabbar_core::{
    BarPayload, NativeEvent, StylePayload, TabBarError, TabBarResult, TabBarSettings, TabPayload,
    TabType,
};

use crate::{RenderedItem, UiCommand, UiHandle};

/// Receives events raised by taps on the native widget
pub trait EventSink: Send + Sync {
    fn dispatch(&self, event: NativeEvent);
}

impl<F> EventSink for F
where
    F: Fn(NativeEvent) + Send + Sync,
{
    fn dispatch(&self, event: NativeEvent) {
        self(event)
    }
}

#[derive(Default)]
struct ManagerState {
    tab_configs: Vec<TabPayload>,
    style: StylePayload,
    is_visible: bool,
    /// Id of the tab last selected by the host or a tap
    selected: Option<String>,
    ui: Option<UiHandle>,
}

impl ManagerState {
    /// Position of `id` in the tab set, if it is currently rendered
    fn rendered_tag(&self, id: &str) -> Option<usize> {
        self.tab_configs
            .iter()
            .position(|tab| tab.id == id)
            .filter(|tag| self.tab_configs[*tag].visible)
    }

    /// Select `id` if it is rendered; returns whether it was
    fn select(&mut self, id: &str) -> bool {
        let Some(tag) = self.rendered_tag(id) else {
            return false;
        };
        self.selected = Some(id.to_string());
        self.post(UiCommand::Select { tag });
        true
    }

    fn post(&self, command: UiCommand) {
        if let Some(ui) = &self.ui {
            ui.post(command);
        }
    }
}

/// State behind the native tab bar
///
/// Owns the last tab set and style the host sent, the visible flag, and the
/// UI handle. All widget work goes through the UI queue.
pub struct TabBarManager {
    state: Mutex<ManagerState>,
    events: RwLock<Option<Arc<dyn EventSink>>>,
    animation_ms: u64,
}

impl TabBarManager {
    pub fn new(settings: &TabBarSettings) -> Self {
        Self {
            state: Mutex::new(ManagerState {
                is_visible: true,
                ..Default::default()
            }),
            events: RwLock::new(None),
            animation_ms: settings.animation_ms,
        }
    }

    /// Make a host context available for rendering
    pub fn attach(&self, ui: UiHandle) {
        self.state.lock().ui = Some(ui);
    }

    /// Drop the host context, e.g. when the activity goes away
    pub fn detach(&self) -> Option<UiHandle> {
        self.state.lock().ui.take()
    }

    pub fn has_host_context(&self) -> bool {
        self.state
            .lock()
            .ui
            .as_ref()
            .is_some_and(|ui| !ui.is_closed())
    }

    /// Route tap events to `sink`, replacing any previous sink
    pub fn set_event_sink<S: EventSink + 'static>(&self, sink: S) {
        let sink: Arc<dyn EventSink> = Arc::new(sink);
        *self.events.write() = Some(sink);
    }

    /// Replace the tab set and style, rebuilding the widget
    pub fn configure(&self, payload: BarPayload) -> TabBarResult<()> {
        let mut state = self.state.lock();
        Self::require_host_context(&state)?;

        state.tab_configs = payload.tabs;
        state.style = payload.style.unwrap_or_default();
        state.selected = None;

        tracing::info!(tabs = state.tab_configs.len(), "tab bar configured");
        Self::render(&mut state, payload.active_tab);
        Ok(())
    }

    /// Replace the tab set and patch the style
    ///
    /// Without an `active_tab`, the current selection is kept while it is
    /// still rendered.
    pub fn update(&self, payload: BarPayload) -> TabBarResult<()> {
        let mut state = self.state.lock();
        Self::require_host_context(&state)?;

        state.tab_configs = payload.tabs;
        if let Some(patch) = payload.style {
            state.style.merge(patch);
        }

        tracing::info!(tabs = state.tab_configs.len(), "tab bar updated");
        let active_tab = payload
            .active_tab
            .filter(|id| state.rendered_tag(id).is_some())
            .or_else(|| state.selected.take());
        Self::render(&mut state, active_tab);
        Ok(())
    }

    /// Select the tab with `id`; ignored when it is not rendered
    pub fn set_active(&self, id: &str) {
        if !self.state.lock().select(id) {
            tracing::debug!(id, "set_active ignored, tab not rendered");
        }
    }

    /// Set or clear the badge of `id`
    pub fn set_badge(&self, id: &str, count: Option<u32>) {
        let mut state = self.state.lock();
        let Some(tag) = state.tab_configs.iter().position(|tab| tab.id == id) else {
            tracing::debug!(id, "set_badge ignored, unknown tab");
            return;
        };

        state.tab_configs[tag].badge = count;
        if state.tab_configs[tag].visible {
            state.post(UiCommand::SetBadge { tag, count });
        }
    }

    /// Show the tab bar; returns whether the state changed
    pub fn show(&self) -> bool {
        self.set_visible(true)
    }

    /// Hide the tab bar; returns whether the state changed
    pub fn hide(&self) -> bool {
        self.set_visible(false)
    }

    /// React to a tap on the rendered item with `tag`
    ///
    /// Selects the item and raises `TabSelected`, then `TabActionTriggered`
    /// for action tabs, or navigates for url tabs. Events are dispatched
    /// after the state lock is released so the sink may call straight back
    /// into the manager.
    pub fn handle_tab_tap(&self, tag: usize) -> Vec<NativeEvent> {
        let events = {
            let mut state = self.state.lock();
            let Some(id) = state
                .tab_configs
                .get(tag)
                .filter(|tab| tab.visible)
                .map(|tab| tab.id.clone())
            else {
                tracing::debug!(tag, "tap on unknown tab ignored");
                return Vec::new();
            };

            state.selected = Some(id);
            state.post(UiCommand::Select { tag });
            let tab = &state.tab_configs[tag];

            let url = tab.url.clone().unwrap_or_default();
            let mut events = vec![NativeEvent::tab_selected(&tab.id, url, tag)];

            match (tab.tab_type, &tab.url, &tab.action) {
                (TabType::Url, Some(url), _) => state.post(UiCommand::Navigate { url: url.clone() }),
                (TabType::Action, _, Some(action)) => {
                    events.push(NativeEvent::action_triggered(&tab.id, action))
                }
                _ => {}
            }
            events
        };

        let sink = self.events.read().clone();
        if let Some(sink) = sink {
            for event in &events {
                tracing::debug!(event = event.name(), id = event.tab_id(), "dispatching event");
                sink.dispatch(event.clone());
            }
        }
        events
    }

    /// The last tab set received, with badge changes applied
    pub fn tab_configs(&self) -> Vec<TabPayload> {
        self.state.lock().tab_configs.clone()
    }

    /// Id of the selected tab, when the host or a tap chose one
    pub fn selected(&self) -> Option<String> {
        self.state.lock().selected.clone()
    }

    /// The current style after all patches
    pub fn style(&self) -> StylePayload {
        self.state.lock().style.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().is_visible
    }

    fn require_host_context(state: &ManagerState) -> TabBarResult<()> {
        match &state.ui {
            Some(ui) if !ui.is_closed() => Ok(()),
            _ => Err(TabBarError::NoActiveHostContext),
        }
    }

    fn render(state: &mut ManagerState, active_tab: Option<String>) {
        state.post(UiCommand::RenderTabs(RenderedItem::from_payloads(
            &state.tab_configs,
        )));
        state.post(UiCommand::ApplyStyle(state.style.clone()));

        if let Some(id) = active_tab {
            state.select(&id);
        }
    }

    fn set_visible(&self, visible: bool) -> bool {
        let mut state = self.state.lock();
        if state.is_visible == visible {
            return false;
        }

        state.is_visible = visible;
        state.post(UiCommand::SetVisible {
            visible,
            animate_ms: self.animation_ms,
        });
        true
    }
}

impl Default for TabBarManager {
    fn default() -> Self {
        Self::new(&TabBarSettings::default())
    }
}

impl std::fmt::Debug for TabBarManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TabBarManager")
            .field("tabs", &state.tab_configs.len())
            .field("is_visible", &state.is_visible)
            .field("has_host_context", &state.ui.is_some())
            .field("animation_ms", &self.animation_ms)
            .finish()
    }
}

#[cfg(test)]
#[path = "manager/manager_tests.rs"]
mod manager_tests;
