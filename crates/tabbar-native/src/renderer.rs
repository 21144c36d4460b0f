//! Renderer capability trait and the headless renderer

use tabbar_core::{TabBarSettings, TabIconType, TabPayload};

use crate::{Color, ResolvedStyle};

/// An icon reference handed to the platform widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub kind: TabIconType,
}

impl Icon {
    /// `None` when there is nothing to look up
    fn from_parts(name: &str, kind: TabIconType) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self {
            name: name.to_string(),
            kind,
        })
    }
}

/// One item as shown by the widget
///
/// `tag` is the position of the tab in the last sent tab set. Hidden tabs
/// are never rendered, so tags of rendered items may have gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    pub tag: usize,
    pub id: String,
    pub label: String,
    pub icon: Option<Icon>,
    pub active_icon: Option<Icon>,
    pub badge: Option<u32>,
    pub badge_color: Option<Color>,
}

impl RenderedItem {
    /// Items for the visible tabs of a tab set, in order
    pub fn from_payloads(tabs: &[TabPayload]) -> Vec<Self> {
        tabs.iter()
            .enumerate()
            .filter(|(_, tab)| tab.visible)
            .map(|(tag, tab)| Self {
                tag,
                id: tab.id.clone(),
                label: tab.label.clone(),
                icon: Icon::from_parts(&tab.icon, tab.icon_type),
                active_icon: tab.active_icon.as_deref().and_then(|name| {
                    Icon::from_parts(name, tab.active_icon_type.unwrap_or_default())
                }),
                badge: tab.badge.filter(|count| *count > 0),
                badge_color: tab.badge_color.as_deref().and_then(Color::parse_hex),
            })
            .collect()
    }
}

/// Operations a platform tab bar widget must support
///
/// Called only from the UI thread through [`crate::MainLoop`]. Implementors
/// treat unknown tags as no-ops.
pub trait NativeRenderer: Send {
    /// Replace every item of the widget
    fn render_tabs(&mut self, items: &[RenderedItem]);

    fn apply_style(&mut self, style: &ResolvedStyle);

    /// Show `count` on the item, or clear its badge when `None`
    fn set_badge(&mut self, tag: usize, count: Option<u32>);

    fn set_active(&mut self, tag: usize);

    fn set_visible(&mut self, visible: bool, animate_ms: u64);

    /// Point the host web view at `url`
    fn navigate(&mut self, url: &str);

    /// Current system appearance
    fn is_dark_mode(&self) -> bool;
}

/// Renderer that records state instead of drawing
///
/// Mirrors what a widget would show: rendering replaces the items, and the
/// selection falls back to the first item when the selected one disappears.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    items: Vec<RenderedItem>,
    style: Option<ResolvedStyle>,
    selected: Option<usize>,
    visible: bool,
    dark_mode: bool,
    visibility_transitions: usize,
    navigations: Vec<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            style: None,
            selected: None,
            visible: true,
            dark_mode: false,
            visibility_transitions: 0,
            navigations: Vec::new(),
        }
    }

    /// A renderer using the appearance from `settings`
    pub fn from_settings(settings: &TabBarSettings) -> Self {
        Self::new().with_dark_mode(settings.dark_mode)
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&RenderedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn style(&self) -> Option<&ResolvedStyle> {
        self.style.as_ref()
    }

    /// Id of the selected item
    pub fn selected_id(&self) -> Option<&str> {
        let tag = self.selected?;
        self.items
            .iter()
            .find(|item| item.tag == tag)
            .map(|item| item.id.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How many times the visible state actually changed
    pub fn visibility_transitions(&self) -> usize {
        self.visibility_transitions
    }

    /// URLs navigated to, oldest first
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    fn item_mut(&mut self, tag: usize) -> Option<&mut RenderedItem> {
        self.items.iter_mut().find(|item| item.tag == tag)
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeRenderer for HeadlessRenderer {
    fn render_tabs(&mut self, items: &[RenderedItem]) {
        self.items = items.to_vec();

        let still_rendered = self
            .selected
            .is_some_and(|tag| self.items.iter().any(|item| item.tag == tag));
        if !still_rendered {
            self.selected = self.items.first().map(|item| item.tag);
        }
    }

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = Some(style.clone());
    }

    fn set_badge(&mut self, tag: usize, count: Option<u32>) {
        if let Some(item) = self.item_mut(tag) {
            item.badge = count;
        }
    }

    fn set_active(&mut self, tag: usize) {
        if self.items.iter().any(|item| item.tag == tag) {
            self.selected = Some(tag);
        }
    }

    fn set_visible(&mut self, visible: bool, _animate_ms: u64) {
        if self.visible != visible {
            self.visible = visible;
            self.visibility_transitions += 1;
        }
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }
}
