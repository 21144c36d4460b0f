#![allow(non_snake_case)]

use super::*;

#[test]
fn TabPayload___id_and_label_only___omits_optional_keys() {
    let json = serde_json::to_value(TabItem::new("home").label("Home").to_payload()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": "home",
            "label": "Home",
            "icon": "",
            "icon_type": "system",
            "type": "url",
            "visible": true,
            "is_active": false,
        })
    );
    assert!(json.get("badge").is_none());
    assert!(json.get("url").is_none());
    assert!(json.get("active_icon").is_none());
}

#[test]
fn TabPayload___action_tab___serializes_action_name() {
    let json = serde_json::to_value(
        TabItem::new("create")
            .label("Create")
            .icon("plus.circle")
            .action_with("new", |_, _| Ok(()))
            .badge(Some(3))
            .badge_color("#FF3B30")
            .to_payload(),
    )
    .unwrap();

    assert_eq!(json["type"], "action");
    assert_eq!(json["action"], "new");
    assert_eq!(json["badge"], 3);
    assert_eq!(json["badge_color"], "#FF3B30");
}

#[test]
fn TabPayload___deserialize_minimal___applies_defaults() {
    let payload: TabPayload = serde_json::from_str(r#"{"id": "home"}"#).unwrap();

    assert_eq!(payload.label, "");
    assert_eq!(payload.icon_type, TabIconType::System);
    assert_eq!(payload.tab_type, TabType::Url);
    assert!(payload.visible);
    assert!(!payload.is_active);
}

#[test]
fn BarPayload___build___sets_active_tab_from_active_item() {
    let tabs = vec![
        TabItem::new("home").url("/"),
        TabItem::new("inbox").url("/inbox").active(),
    ];

    let payload = BarPayload::build(&tabs, None);

    assert_eq!(payload.active_tab.as_deref(), Some("inbox"));
    assert_eq!(payload.tabs.len(), 2);
    assert!(payload.style.is_none());
}

#[test]
fn BarPayload___build_without_active___omits_active_tab() {
    let tabs = vec![TabItem::new("home")];

    let json = serde_json::to_value(BarPayload::build(&tabs, None)).unwrap();

    assert!(json.get("active_tab").is_none());
    assert!(json.get("style").is_none());
}

#[test]
fn BarPayload___build___preserves_tab_order() {
    let tabs = vec![TabItem::new("c"), TabItem::new("a"), TabItem::new("b")];

    let payload = BarPayload::build(&tabs, None);

    let ids: Vec<&str> = payload.tabs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn BarPayload___with_active_tab___overrides_flagged_tab() {
    let tabs = vec![TabItem::new("home").active(), TabItem::new("profile")];

    let payload = BarPayload::build(&tabs, None).with_active_tab("profile");

    assert_eq!(payload.active_tab.as_deref(), Some("profile"));
    assert!(payload.tabs[0].is_active);
}

#[test]
fn StylePayload___resolve___dark_falls_back_to_light() {
    let style = TabBarStyle::new()
        .active_color("#007AFF")
        .inactive_color("#8E8E93")
        .dark_active_color("#0A84FF")
        .to_payload();

    assert_eq!(style.resolve(ColorKey::Active, true), Some("#0A84FF"));
    assert_eq!(style.resolve(ColorKey::Inactive, true), Some("#8E8E93"));
    assert_eq!(style.resolve(ColorKey::Active, false), Some("#007AFF"));
    assert_eq!(style.resolve(ColorKey::Background, true), None);
}

#[test]
fn StylePayload___merge___keeps_unspecified_keys() {
    let mut current = TabBarStyle::new()
        .background_color("#FFFFFF")
        .active_color("#007AFF")
        .elevation(4.0)
        .to_payload();

    current.merge(TabBarStyle::new().active_color("#FF0000").to_payload());

    assert_eq!(current.colors.background_color.as_deref(), Some("#FFFFFF"));
    assert_eq!(current.colors.active_color.as_deref(), Some("#FF0000"));
    assert_eq!(current.elevation, Some(4.0));
}

#[test]
fn StylePayload___merge___replaces_dark_object_whole() {
    let mut current = TabBarStyle::new()
        .dark_background_color("#000000")
        .dark_active_color("#0A84FF")
        .to_payload();

    current.merge(TabBarStyle::new().dark_badge_color("#FF453A").to_payload());

    let dark = current.dark.unwrap();
    assert_eq!(dark.badge_color.as_deref(), Some("#FF453A"));
    assert!(dark.background_color.is_none());
    assert!(dark.active_color.is_none());
}

#[test]
fn StylePayload___merge_without_dark___keeps_previous_dark() {
    let mut current = TabBarStyle::new().dark_active_color("#0A84FF").to_payload();

    current.merge(TabBarStyle::new().active_color("#007AFF").to_payload());

    assert_eq!(
        current.dark.and_then(|d| d.active_color).as_deref(),
        Some("#0A84FF")
    );
}

#[test]
fn StylePayload___deserialize___reads_flattened_colors() {
    let style: StylePayload = serde_json::from_str(
        r##"{"background_color": "#FFFFFF", "translucent": false, "dark": {"active_color": "#0A84FF"}}"##,
    )
    .unwrap();

    assert_eq!(style.colors.background_color.as_deref(), Some("#FFFFFF"));
    assert_eq!(style.translucent, Some(false));
    assert_eq!(style.resolve(ColorKey::Active, true), Some("#0A84FF"));
}

#[test]
fn SetBadgeParams___effective_count___clears_non_positive() {
    let zero = SetBadgeParams {
        id: Some("home".into()),
        count: Some(0),
    };
    let negative = SetBadgeParams {
        id: Some("home".into()),
        count: Some(-2),
    };
    let none = SetBadgeParams {
        id: Some("home".into()),
        count: None,
    };
    let five = SetBadgeParams {
        id: Some("home".into()),
        count: Some(5),
    };

    assert_eq!(zero.effective_count(), None);
    assert_eq!(negative.effective_count(), None);
    assert_eq!(none.effective_count(), None);
    assert_eq!(five.effective_count(), Some(5));
}

#[test]
fn SetBadgeParams___null_count___serialized_as_null() {
    let params = SetBadgeParams {
        id: Some("home".into()),
        count: None,
    };

    let json = serde_json::to_value(params).unwrap();

    assert_eq!(json, serde_json::json!({"id": "home", "count": null}));
}

#[test]
fn SetActiveParams___missing_id___deserializes_to_none() {
    let params: SetActiveParams = serde_json::from_str("{}").unwrap();

    assert!(params.id.is_none());
}
