//! In-process bridge client

use std::sync::Arc;
use tabbar_core::{TabBarResult, TabBarSettings};
use tabbar_transport::BridgeClient;

use crate::{TabBarFunctions, TabBarManager};

/// [`BridgeClient`] that calls [`TabBarFunctions`] directly
///
/// Used by desktop builds and tests where host and native code share a
/// process.
#[derive(Debug, Clone)]
pub struct LocalBridge {
    functions: TabBarFunctions,
}

impl LocalBridge {
    pub fn new(manager: Arc<TabBarManager>) -> Self {
        Self {
            functions: TabBarFunctions::new(manager),
        }
    }

    /// A bridge over a fresh manager built from `settings`
    pub fn with_settings(settings: &TabBarSettings) -> Self {
        Self::new(Arc::new(TabBarManager::new(settings)))
    }

    pub fn manager(&self) -> &Arc<TabBarManager> {
        self.functions.manager()
    }
}

impl BridgeClient for LocalBridge {
    fn call(&self, method: &str, params: &[u8]) -> TabBarResult<Vec<u8>> {
        Ok(self.functions.execute(method, params))
    }
}
