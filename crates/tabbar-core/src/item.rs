//! Tab descriptors and their builder

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::payload::TabPayload;
use crate::registry::ActionCallback;

/// Where a tab's icon comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabIconType {
    /// Platform icon set (SF Symbol on iOS, Material icon on Android)
    #[default]
    System,
    /// Bundled image asset
    Custom,
}

/// What happens when a tab is tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabType {
    /// Navigate the web view to the tab's url
    #[default]
    Url,
    /// Raise an action event toward the host
    Action,
}

/// Visibility of a tab, resolved each time the tab is serialized
#[derive(Clone)]
pub enum Visibility {
    Static(bool),
    Dynamic(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl Visibility {
    /// Evaluate the visibility now
    pub fn resolve(&self) -> bool {
        match self {
            Visibility::Static(visible) => *visible,
            Visibility::Dynamic(predicate) => predicate(),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Static(true)
    }
}

impl std::fmt::Debug for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Static(visible) => f.debug_tuple("Static").field(visible).finish(),
            Visibility::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One entry of the tab bar
///
/// Setters consume and return the item so a tab can be described in a single
/// expression. Nothing is validated here; see [`crate::validate_tabs`].
///
/// ```ignore
/// let home = TabItem::new("home")
///     .label("Home")
///     .icon("house")
///     .url("/dashboard")
///     .active();
///
/// let create = TabItem::new("create")
///     .label("Create")
///     .icon("plus.circle")
///     .action_fn(|_id, _action| Ok(()));
/// ```
#[derive(Clone, Default)]
pub struct TabItem {
    id: String,
    label: String,
    icon: String,
    icon_type: TabIconType,
    active_icon: Option<String>,
    active_icon_type: Option<TabIconType>,
    tab_type: TabType,
    url: Option<String>,
    action_name: Option<String>,
    action_callback: Option<ActionCallback>,
    badge: Option<u32>,
    badge_color: Option<String>,
    visible: Visibility,
    is_active: bool,
}

impl TabItem {
    /// Create a tab with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Use a platform icon by name
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = name.into();
        self.icon_type = TabIconType::System;
        self
    }

    /// Use a bundled image asset as the icon
    pub fn custom_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = path.into();
        self.icon_type = TabIconType::Custom;
        self
    }

    /// Platform icon shown while the tab is selected
    pub fn active_icon(mut self, name: impl Into<String>) -> Self {
        self.active_icon = Some(name.into());
        self.active_icon_type = Some(TabIconType::System);
        self
    }

    /// Bundled image shown while the tab is selected
    pub fn active_custom_icon(mut self, path: impl Into<String>) -> Self {
        self.active_icon = Some(path.into());
        self.active_icon_type = Some(TabIconType::Custom);
        self
    }

    /// Navigate to `url` when tapped
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self.tab_type = TabType::Url;
        self
    }

    /// Raise a named action when tapped, with no bound callback
    ///
    /// The host reacts through its own event handling.
    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.tab_type = TabType::Action;
        self.action_name = Some(name.into());
        self.action_callback = None;
        self
    }

    /// Raise a named action and run `callback` with `(id, action)`
    pub fn action_with<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str, &str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.tab_type = TabType::Action;
        self.action_name = Some(name.into());
        self.action_callback = Some(Arc::new(callback));
        self
    }

    /// Run `callback` when tapped, using the tab id as the action name
    pub fn action_fn<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.tab_type = TabType::Action;
        self.action_name = Some(self.id.clone());
        self.action_callback = Some(Arc::new(callback));
        self
    }

    /// Set a numeric badge; `None` clears it
    pub fn badge(mut self, count: Option<u32>) -> Self {
        self.badge = count;
        self
    }

    /// Badge background color as a hex string (e.g. `"#FF3B30"`)
    pub fn badge_color(mut self, hex: impl Into<String>) -> Self {
        self.badge_color = Some(hex.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Visibility::Static(visible);
        self
    }

    /// Decide visibility with `predicate` each time the tab is serialized
    pub fn visible_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.visible = Visibility::Dynamic(Arc::new(predicate));
        self
    }

    /// Mark this tab as the initially selected one
    pub fn active(self) -> Self {
        self.active_if(true)
    }

    pub fn active_if(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn tab_type(&self) -> TabType {
        self.tab_type
    }

    pub fn url_target(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn action_name(&self) -> Option<&str> {
        self.action_name.as_deref()
    }

    pub fn action_callback(&self) -> Option<&ActionCallback> {
        self.action_callback.as_ref()
    }

    pub fn has_action_callback(&self) -> bool {
        self.action_callback.is_some()
    }

    pub fn badge_count(&self) -> Option<u32> {
        self.badge
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visible
    }

    /// Serialize this tab for the bridge
    ///
    /// Visibility is evaluated here. The callback is not part of the payload;
    /// it lives in the [`crate::ActionRegistry`].
    pub fn to_payload(&self) -> TabPayload {
        TabPayload {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            icon_type: self.icon_type,
            active_icon: self.active_icon.clone(),
            active_icon_type: self.active_icon_type,
            tab_type: self.tab_type,
            url: self.url.clone(),
            action: self.action_name.clone(),
            badge: self.badge,
            badge_color: self.badge_color.clone(),
            visible: self.visible.resolve(),
            is_active: self.is_active,
        }
    }
}

impl std::fmt::Debug for TabItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("tab_type", &self.tab_type)
            .field("url", &self.url)
            .field("action_name", &self.action_name)
            .field("has_callback", &self.action_callback.is_some())
            .field("badge", &self.badge)
            .field("visible", &self.visible)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}
