//! Events raised by the native side toward the host

use serde::{Deserialize, Serialize};

/// A tab was tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSelected {
    pub id: String,
    /// Tab url, or empty for action tabs
    #[serde(default)]
    pub url: String,
    /// Position of the tab in the last sent tab set
    #[serde(default)]
    pub index: usize,
}

/// An action tab was tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabActionTriggered {
    pub id: String,
    pub action: String,
}

/// Inbound event, tagged by name on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum NativeEvent {
    TabSelected(TabSelected),
    TabActionTriggered(TabActionTriggered),
}

impl NativeEvent {
    pub fn tab_selected(id: impl Into<String>, url: impl Into<String>, index: usize) -> Self {
        NativeEvent::TabSelected(TabSelected {
            id: id.into(),
            url: url.into(),
            index,
        })
    }

    pub fn action_triggered(id: impl Into<String>, action: impl Into<String>) -> Self {
        NativeEvent::TabActionTriggered(TabActionTriggered {
            id: id.into(),
            action: action.into(),
        })
    }

    /// Event name as dispatched to host listeners
    pub fn name(&self) -> &'static str {
        match self {
            NativeEvent::TabSelected(_) => "TabSelected",
            NativeEvent::TabActionTriggered(_) => "TabActionTriggered",
        }
    }

    /// Id of the tab the event concerns
    pub fn tab_id(&self) -> &str {
        match self {
            NativeEvent::TabSelected(e) => &e.id,
            NativeEvent::TabActionTriggered(e) => &e.id,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
