//! Host-side tab bar state machine

use serde::{Deserialize, Serialize};

use crate::BridgeMethod;

/// State of the natively rendered tab bar as observed by the host
///
/// State transitions:
/// ```text
/// Unconfigured → Configured ──┐
///                    ↑        │ configure / update
///                    └────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabBarState {
    /// No tab set has been sent yet
    #[default]
    Unconfigured,
    /// A tab set has been sent with configure (and possibly updated since)
    Configured,
}

impl TabBarState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: TabBarState) -> bool {
        use TabBarState::*;
        matches!(
            (self, target),
            (Unconfigured, Configured) | (Configured, Configured)
        )
    }

    /// Check if a bridge method may be issued in this state
    ///
    /// Only `update` requires a prior `configure`; the remaining methods are
    /// forwarded regardless and become no-ops natively when no bar exists.
    pub fn allows(&self, method: BridgeMethod) -> bool {
        match method {
            BridgeMethod::Update => matches!(self, TabBarState::Configured),
            _ => true,
        }
    }

    /// Whether a tab set has been sent
    pub fn is_configured(&self) -> bool {
        matches!(self, TabBarState::Configured)
    }
}

impl std::fmt::Display for TabBarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabBarState::Unconfigured => write!(f, "Unconfigured"),
            TabBarState::Configured => write!(f, "Configured"),
        }
    }
}
