//! Wire payloads sent to the native side
//!
//! Every optional field is omitted when unset, so the native adapters only
//! ever see keys that carry a value.

use serde::{Deserialize, Serialize};

use crate::item::{TabIconType, TabItem, TabType};
use crate::style::{ColorKey, TabBarStyle};

fn default_true() -> bool {
    true
}

/// One serialized tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabPayload {
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub icon_type: TabIconType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_icon_type: Option<TabIconType>,

    #[serde(rename = "type", default)]
    pub tab_type: TabType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default)]
    pub is_active: bool,
}

/// The six color slots, each optional
///
/// Serialized as the nested `dark` object of a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl StyleColors {
    pub fn slot(&self, key: ColorKey) -> Option<&str> {
        match key {
            ColorKey::Background => self.background_color.as_deref(),
            ColorKey::Active => self.active_color.as_deref(),
            ColorKey::Inactive => self.inactive_color.as_deref(),
            ColorKey::Badge => self.badge_color.as_deref(),
            ColorKey::BadgeText => self.badge_text_color.as_deref(),
            ColorKey::Border => self.border_color.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, key: ColorKey) -> &mut Option<String> {
        match key {
            ColorKey::Background => &mut self.background_color,
            ColorKey::Active => &mut self.active_color,
            ColorKey::Inactive => &mut self.inactive_color,
            ColorKey::Badge => &mut self.badge_color,
            ColorKey::BadgeText => &mut self.badge_text_color,
            ColorKey::Border => &mut self.border_color,
        }
    }

    pub fn is_empty(&self) -> bool {
        ColorKey::ALL.iter().all(|key| self.slot(*key).is_none())
    }
}

/// Serialized style: present light-mode keys plus an optional `dark` object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePayload {
    /// Light-mode colors, flattened into the top level
    #[serde(flatten)]
    pub colors: StyleColors,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translucent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<StyleColors>,
}

impl StylePayload {
    /// Color for a slot in the given appearance
    ///
    /// Dark mode prefers the dark override and falls back to the light value.
    /// `None` means the platform default applies.
    pub fn resolve(&self, key: ColorKey, dark_mode: bool) -> Option<&str> {
        let dark = if dark_mode {
            self.dark.as_ref().and_then(|d| d.slot(key))
        } else {
            None
        };
        dark.or_else(|| self.colors.slot(key))
    }

    /// Patch this style with the keys present in `patch`
    ///
    /// Absent keys keep their current value. A present `dark` object replaces
    /// the current one whole; it is not merged key by key.
    pub fn merge(&mut self, patch: StylePayload) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        let mut colors = patch.colors;
        for key in ColorKey::ALL {
            take(self.colors.slot_mut(key), colors.slot_mut(key).take());
        }
        take(&mut self.border_width, patch.border_width);
        take(&mut self.translucent, patch.translucent);
        take(&mut self.elevation, patch.elevation);
        take(&mut self.dark, patch.dark);
    }
}

/// Parameters of `TabBar.Configure` and `TabBar.Update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPayload {
    pub tabs: Vec<TabPayload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StylePayload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<String>,
}

impl BarPayload {
    /// Serialize a tab set and optional style
    ///
    /// `active_tab` is the id of the first tab flagged active.
    pub fn build(tabs: &[TabItem], style: Option<&TabBarStyle>) -> Self {
        let active_tab = tabs
            .iter()
            .find(|tab| tab.is_active())
            .map(|tab| tab.id().to_string());

        Self {
            tabs: tabs.iter().map(TabItem::to_payload).collect(),
            style: style.map(TabBarStyle::to_payload),
            active_tab,
        }
    }

    /// Override the tab to select once the payload is applied
    pub fn with_active_tab(mut self, id: impl Into<String>) -> Self {
        self.active_tab = Some(id.into());
        self
    }
}

/// Parameters of `TabBar.SetActive`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetActiveParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Parameters of `TabBar.SetBadge`
///
/// `count` stays signed on the wire; zero or negative clears the badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBadgeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub count: Option<i64>,
}

impl SetBadgeParams {
    /// The badge to display, or `None` to clear
    pub fn effective_count(&self) -> Option<u32> {
        self.count
            .filter(|count| *count > 0)
            .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
#[path = "payload/payload_tests.rs"]
mod payload_tests;
