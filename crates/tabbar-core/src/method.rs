//! Bridge method names

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TabBarError;

/// A tab bar method callable across the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeMethod {
    #[serde(rename = "TabBar.Configure")]
    Configure,
    #[serde(rename = "TabBar.Update")]
    Update,
    #[serde(rename = "TabBar.SetActive")]
    SetActive,
    #[serde(rename = "TabBar.SetBadge")]
    SetBadge,
    #[serde(rename = "TabBar.Show")]
    Show,
    #[serde(rename = "TabBar.Hide")]
    Hide,
}

impl BridgeMethod {
    /// All methods, in declaration order
    pub const ALL: [BridgeMethod; 6] = [
        BridgeMethod::Configure,
        BridgeMethod::Update,
        BridgeMethod::SetActive,
        BridgeMethod::SetBadge,
        BridgeMethod::Show,
        BridgeMethod::Hide,
    ];

    /// Wire name of the method (e.g. `"TabBar.Configure"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeMethod::Configure => "TabBar.Configure",
            BridgeMethod::Update => "TabBar.Update",
            BridgeMethod::SetActive => "TabBar.SetActive",
            BridgeMethod::SetBadge => "TabBar.SetBadge",
            BridgeMethod::Show => "TabBar.Show",
            BridgeMethod::Hide => "TabBar.Hide",
        }
    }
}

impl FromStr for BridgeMethod {
    type Err = TabBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BridgeMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| TabBarError::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for BridgeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
