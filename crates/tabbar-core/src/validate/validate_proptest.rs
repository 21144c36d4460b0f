#![allow(non_snake_case)]

use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn unique_ids(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", range)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn validate_tabs___unique_ids_with_at_most_one_active___succeeds(
        ids in unique_ids(1..=5),
        active in prop::option::of(0usize..5),
    ) {
        let set: Vec<TabItem> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| TabItem::new(id.as_str()).active_if(Some(i) == active))
            .collect();

        prop_assert!(validate_tabs(&set).is_ok());
    }

    #[test]
    fn validate_tabs___more_than_five___fails_with_too_many_tabs(
        ids in prop::collection::vec("[a-z]{1,8}", 6..20),
    ) {
        let set: Vec<TabItem> = ids.iter().map(|id| TabItem::new(id.as_str())).collect();

        let result = validate_tabs(&set);

        prop_assert!(
            matches!(result, Err(TabBarError::TooManyTabs { count, max: MAX_TABS }) if count == ids.len()),
            "expected TooManyTabs"
        );
    }

    #[test]
    fn validate_tabs___duplicates___lists_exactly_the_repeated_ids(
        ids in prop::collection::vec("[a-c]", 2..=5),
    ) {
        let set: Vec<TabItem> = ids.iter().map(|id| TabItem::new(id.as_str())).collect();
        let mut seen = BTreeSet::new();
        let repeated: BTreeSet<&String> = ids.iter().filter(|id| !seen.insert(*id)).collect();

        let result = validate_tabs(&set);

        if repeated.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(TabBarError::DuplicateTabIds(reported)) => {
                    let reported_set: BTreeSet<&String> = reported.iter().collect();
                    prop_assert_eq!(reported.len(), reported_set.len());
                    prop_assert_eq!(reported_set, repeated);
                }
                other => prop_assert!(false, "expected DuplicateTabIds, got {:?}", other),
            }
        }
    }
}
