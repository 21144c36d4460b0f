//! App-defined tab bar contents

use tabbar_core::{TabBarStyle, TabItem};

/// Supplies the tabs (and optionally the style) configured at app start
///
/// ```ignore
/// struct AppTabs;
///
/// impl TabBarProvider for AppTabs {
///     fn tabs(&self) -> Vec<TabItem> {
///         vec![
///             TabItem::new("home").label("Home").icon("house").url("/").active(),
///             TabItem::new("create").label("Create").icon("plus.circle").action_fn(|_, _| Ok(())),
///         ]
///     }
/// }
///
/// tab_bar.boot(&AppTabs)?;
/// ```
pub trait TabBarProvider {
    fn tabs(&self) -> Vec<TabItem>;

    fn style(&self) -> Option<TabBarStyle> {
        None
    }
}
