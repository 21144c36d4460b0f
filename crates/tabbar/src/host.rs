//! Host side of the tab bar

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::sync::Arc;
use tabbar_core::{
    ActionCallback, ActionRegistry, BarPayload, BridgeMethod, NativeEvent, SetActiveParams, SetBadgeParams,
    TabBarError, TabBarResult, TabBarState, TabBarStyle, TabItem, validate_tabs,
};
use tabbar_transport::{BridgeClient, invoke};

use crate::TabBarProvider;

/// Listener notified of every native event after built-in handling
pub type EventListener = Arc<dyn Fn(&NativeEvent) + Send + Sync>;

/// What [`TabBar::handle_event`] did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The last tab set was re-sent so visibility is re-evaluated
    Refreshed,
    /// A registered callback ran
    ActionExecuted,
    /// No callback is registered for the action
    NoCallback,
    /// Nothing to do, the tab bar was never configured
    Ignored,
}

struct HostState {
    state: TabBarState,
    last_tabs: Vec<TabItem>,
}

/// The host's handle on the native tab bar
///
/// Validates and serializes tab sets, keeps the action registry in step
/// with what was sent, and reacts to events coming back from native code.
pub struct TabBar<C> {
    client: C,
    registry: ActionRegistry,
    inner: Mutex<HostState>,
    listeners: RwLock<Vec<EventListener>>,
}

impl<C: BridgeClient> TabBar<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            registry: ActionRegistry::new(),
            inner: Mutex::new(HostState {
                state: TabBarState::default(),
                last_tabs: Vec::new(),
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn state(&self) -> TabBarState {
        self.inner.lock().state
    }

    /// Ids of the last tab set sent, in order
    pub fn tab_ids(&self) -> Vec<String> {
        self.inner
            .lock()
            .last_tabs
            .iter()
            .map(|tab| tab.id().to_string())
            .collect()
    }

    /// Send a full tab set, replacing whatever native code shows
    ///
    /// Once native code accepts the tabs, their callbacks are added to the
    /// registry; existing registrations are kept.
    pub fn configure(&self, tabs: Vec<TabItem>, style: Option<TabBarStyle>) -> TabBarResult<Value> {
        let mut inner = self.inner.lock();
        if !inner.state.can_transition_to(TabBarState::Configured) {
            return Err(TabBarError::InvalidState {
                expected: TabBarState::Unconfigured.to_string(),
                actual: inner.state.to_string(),
            });
        }
        validate_tabs(&tabs)?;

        let payload = BarPayload::build(&tabs, style.as_ref());
        let data = invoke(&self.client, BridgeMethod::Configure, &payload)?;
        self.registry.register_many(Self::callbacks(&tabs));

        tracing::info!(tabs = tabs.len(), "tab bar configured");
        inner.state = TabBarState::Configured;
        inner.last_tabs = tabs;
        Ok(data)
    }

    /// Replace the tab set of a configured tab bar
    ///
    /// Once native code accepts the tabs, the registry is rebuilt from them.
    /// Style keys that are not set keep their previous native value.
    pub fn update(&self, tabs: Vec<TabItem>, style: Option<TabBarStyle>) -> TabBarResult<Value> {
        let mut inner = self.inner.lock();
        Self::require_configured(&inner)?;
        validate_tabs(&tabs)?;

        let payload = BarPayload::build(&tabs, style.as_ref());
        self.send_update(&mut inner, tabs, &payload)
    }

    /// Select a tab by id
    pub fn set_active(&self, id: impl Into<String>) -> TabBarResult<Value> {
        let params = SetActiveParams {
            id: Some(id.into()),
        };
        invoke(&self.client, BridgeMethod::SetActive, &params)
    }

    /// Set the badge of a tab; `None` or a count of zero or less clears it
    pub fn set_badge(&self, id: impl Into<String>, count: Option<i64>) -> TabBarResult<Value> {
        let params = SetBadgeParams {
            id: Some(id.into()),
            count,
        };
        invoke(&self.client, BridgeMethod::SetBadge, &params)
    }

    pub fn show(&self) -> TabBarResult<Value> {
        invoke(&self.client, BridgeMethod::Show, &serde_json::json!({}))
    }

    pub fn hide(&self) -> TabBarResult<Value> {
        invoke(&self.client, BridgeMethod::Hide, &serde_json::json!({}))
    }

    /// Configure from a provider at app start
    pub fn boot<P: TabBarProvider + ?Sized>(&self, provider: &P) -> TabBarResult<Value> {
        tracing::debug!("booting tab bar from provider");
        self.configure(provider.tabs(), provider.style())
    }

    /// Add a listener that sees every event after built-in handling
    pub fn listen<F>(&self, listener: F)
    where
        F: Fn(&NativeEvent) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(listener));
    }

    /// React to an event raised by native code
    ///
    /// `TabSelected` re-sends the last tab set, with the tapped tab active, so
    /// visibility predicates are evaluated again after navigation.
    /// `TabActionTriggered` runs the registered callback, if any. Listeners
    /// see the event even when this handling fails.
    pub fn handle_event(&self, event: &NativeEvent) -> TabBarResult<EventOutcome> {
        tracing::debug!(event = event.name(), id = event.tab_id(), "handling native event");

        let outcome = match event {
            NativeEvent::TabSelected(selected) => self.refresh(&selected.id),
            NativeEvent::TabActionTriggered(triggered) => self
                .registry
                .execute(&triggered.id, &triggered.action)
                .map(|ran| {
                    if ran {
                        EventOutcome::ActionExecuted
                    } else {
                        EventOutcome::NoCallback
                    }
                }),
        };

        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener(event);
        }
        outcome
    }

    /// Re-send the last tab set with the tapped tab selected
    fn refresh(&self, selected: &str) -> TabBarResult<EventOutcome> {
        let mut inner = self.inner.lock();
        if !inner.state.is_configured() {
            return Ok(EventOutcome::Ignored);
        }

        let tabs = inner.last_tabs.clone();
        let payload = BarPayload::build(&tabs, None).with_active_tab(selected);
        self.send_update(&mut inner, tabs, &payload)?;
        Ok(EventOutcome::Refreshed)
    }

    fn send_update(
        &self,
        inner: &mut HostState,
        tabs: Vec<TabItem>,
        payload: &BarPayload,
    ) -> TabBarResult<Value> {
        let data = invoke(&self.client, BridgeMethod::Update, payload)?;
        self.registry.replace(Self::callbacks(&tabs));

        tracing::info!(tabs = tabs.len(), "tab bar updated");
        inner.last_tabs = tabs;
        Ok(data)
    }

    fn require_configured(inner: &HostState) -> TabBarResult<()> {
        if inner.state.allows(BridgeMethod::Update) {
            return Ok(());
        }
        Err(TabBarError::InvalidState {
            expected: TabBarState::Configured.to_string(),
            actual: inner.state.to_string(),
        })
    }

    fn callbacks(tabs: &[TabItem]) -> Vec<(String, ActionCallback)> {
        tabs.iter()
            .filter_map(|tab| {
                let action = tab.action_name()?;
                let callback = tab.action_callback()?;
                Some((action.to_string(), callback.clone()))
            })
            .collect()
    }
}

impl<C> std::fmt::Debug for TabBar<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("TabBar")
            .field("state", &inner.state)
            .field("tabs", &inner.last_tabs.len())
            .field("registry", &self.registry)
            .finish()
    }
}
