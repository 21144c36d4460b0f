//! Wiring for host and native code sharing one process

use std::sync::{Arc, Weak};
use tabbar_core::NativeEvent;
use tabbar_native::LocalBridge;

use crate::TabBar;

impl TabBar<LocalBridge> {
    /// Route tap events from the in-process manager back into this tab bar
    ///
    /// The manager only keeps a weak reference, so dropping the last `Arc`
    /// of the tab bar stops delivery.
    pub fn route_native_events(self: &Arc<Self>) {
        let host: Weak<Self> = Arc::downgrade(self);
        self.client()
            .manager()
            .set_event_sink(move |event: NativeEvent| {
                let Some(host) = host.upgrade() else {
                    tracing::debug!(event = event.name(), "tab bar dropped, event discarded");
                    return;
                };
                if let Err(err) = host.handle_event(&event) {
                    tracing::warn!(event = event.name(), error = %err, "native event handling failed");
                }
            });
    }
}
