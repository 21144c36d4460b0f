//! Structural checks applied to a tab set before it is sent

use std::collections::HashSet;

use crate::item::TabItem;
use crate::{TabBarError, TabBarResult};

/// Maximum number of tabs UITabBar and BottomNavigationView can display
pub const MAX_TABS: usize = 5;

/// Validate a tab set, failing on the first violated rule
///
/// Rules, in order: at most [`MAX_TABS`] tabs, at least one tab, unique ids,
/// at most one tab flagged active.
pub fn validate_tabs(tabs: &[TabItem]) -> TabBarResult<()> {
    let count = tabs.len();

    if count > MAX_TABS {
        return Err(TabBarError::TooManyTabs {
            count,
            max: MAX_TABS,
        });
    }

    if count == 0 {
        return Err(TabBarError::EmptyTabSet);
    }

    let duplicates = duplicate_ids(tabs);
    if !duplicates.is_empty() {
        return Err(TabBarError::DuplicateTabIds(duplicates));
    }

    let active = tabs.iter().filter(|tab| tab.is_active()).count();
    if active > 1 {
        return Err(TabBarError::MultipleActiveTabs(active));
    }

    Ok(())
}

/// Ids that appear more than once, each listed once in first-repeat order
fn duplicate_ids(tabs: &[TabItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for tab in tabs {
        let id = tab.id();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }

    duplicates
}


#[cfg(test)]
#[path = "validate/validate_proptest.rs"]
mod validate_proptest;
