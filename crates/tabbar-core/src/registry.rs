//! Action name → host callback registry

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{TabBarError, TabBarResult};

/// Callback bound to a tab action, invoked with `(tab_id, action_name)`
pub type ActionCallback = Arc<dyn Fn(&str, &str) -> anyhow::Result<()> + Send + Sync>;

/// Registered action callbacks, keyed by action name
///
/// Callbacks are cloned out of the lock before they run, so a callback may
/// re-enter the registry (or the tab bar owning it) without deadlocking.
#[derive(Default)]
pub struct ActionRegistry {
    callbacks: RwLock<HashMap<String, ActionCallback>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, replacing any existing one for `action`
    pub fn register(&self, action: impl Into<String>, callback: ActionCallback) {
        let action = action.into();
        tracing::debug!(action = %action, "registering tab action callback");
        self.callbacks.write().insert(action, callback);
    }

    /// Register several callbacks at once
    pub fn register_many<I, S>(&self, callbacks: I)
    where
        I: IntoIterator<Item = (S, ActionCallback)>,
        S: Into<String>,
    {
        let mut guard = self.callbacks.write();
        for (action, callback) in callbacks {
            guard.insert(action.into(), callback);
        }
    }

    /// Swap the whole registry for `callbacks` under a single lock
    ///
    /// Equivalent to [`flush`](Self::flush) followed by
    /// [`register_many`](Self::register_many), without a window in which
    /// `execute` sees an empty registry.
    pub fn replace<I, S>(&self, callbacks: I)
    where
        I: IntoIterator<Item = (S, ActionCallback)>,
        S: Into<String>,
    {
        let fresh: HashMap<String, ActionCallback> = callbacks
            .into_iter()
            .map(|(action, callback)| (action.into(), callback))
            .collect();
        *self.callbacks.write() = fresh;
    }

    pub fn has(&self, action: &str) -> bool {
        self.callbacks.read().contains_key(action)
    }

    /// Run the callback registered for `action`, if any
    ///
    /// Returns `Ok(true)` when a callback ran and `Ok(false)` when none is
    /// registered. A failing callback surfaces as [`TabBarError::ActionFailed`].
    pub fn execute(&self, id: &str, action: &str) -> TabBarResult<bool> {
        let callback = match self.callbacks.read().get(action) {
            Some(callback) => Arc::clone(callback),
            None => return Ok(false),
        };

        tracing::debug!(id, action, "executing tab action callback");
        callback(id, action).map_err(|err| TabBarError::ActionFailed {
            action: action.to_string(),
            message: format!("{err:#}"),
        })?;
        Ok(true)
    }

    pub fn forget(&self, action: &str) {
        self.callbacks.write().remove(action);
    }

    /// Remove every registered callback
    pub fn flush(&self) {
        self.callbacks.write().clear();
    }

    /// Registered action names, sorted
    pub fn actions(&self) -> Vec<String> {
        let mut actions: Vec<String> = self.callbacks.read().keys().cloned().collect();
        actions.sort();
        actions
    }

    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions())
            .finish()
    }
}
