#![allow(non_snake_case)]

use super::*;
use crate::{HeadlessRenderer, MainLoop};
use tabbar_core::{Platform, TabBarStyle, TabItem};

fn attached() -> (TabBarManager, MainLoop<HeadlessRenderer>) {
    let manager = TabBarManager::default();
    let (ui, main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
    manager.attach(ui);
    (manager, main_loop)
}

fn bar(tabs: &[TabItem]) -> BarPayload {
    BarPayload::build(tabs, None)
}

fn standard_tabs() -> Vec<TabItem> {
    vec![
        TabItem::new("home").label("Home").icon("house").url("/"),
        TabItem::new("create")
            .label("Create")
            .icon("plus.circle")
            .action("new"),
        TabItem::new("profile")
            .label("Profile")
            .icon("person.circle")
            .url("/profile"),
    ]
}

fn collecting_sink(manager: &TabBarManager) -> Arc<Mutex<Vec<NativeEvent>>> {
    let events: Arc<Mutex<Vec<NativeEvent>>> = Arc::default();
    let seen = events.clone();
    manager.set_event_sink(move |event: NativeEvent| seen.lock().push(event));
    events
}

// Host context

#[test]
fn TabBarManager___configure___without_host_context_fails() {
    let manager = TabBarManager::default();

    let result = manager.configure(bar(&standard_tabs()));

    assert!(matches!(result, Err(TabBarError::NoActiveHostContext)));
}

#[test]
fn TabBarManager___update___after_loop_dropped_fails() {
    let (manager, main_loop) = attached();
    drop(main_loop);

    let result = manager.update(bar(&standard_tabs()));

    assert!(matches!(result, Err(TabBarError::NoActiveHostContext)));
    assert!(!manager.has_host_context());
}

#[test]
fn TabBarManager___detach___removes_host_context() {
    let (manager, _main_loop) = attached();

    let handle = manager.detach();

    assert!(handle.is_some());
    assert!(!manager.has_host_context());
}

// configure / update

#[test]
fn TabBarManager___configure___renders_items_and_style() {
    let (manager, mut main_loop) = attached();
    let style = TabBarStyle::new().active_color("#FF9500");

    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&style)))
        .unwrap();
    main_loop.drain();

    let renderer = main_loop.renderer();
    assert_eq!(renderer.items().len(), 3);
    assert_eq!(renderer.selected_id(), Some("home"));
    assert_eq!(
        renderer.style().unwrap().active,
        crate::Color::rgb(0xFF, 0x95, 0x00)
    );
}

#[test]
fn TabBarManager___configure___selects_active_tab() {
    let (manager, mut main_loop) = attached();
    let tabs = vec![TabItem::new("home"), TabItem::new("inbox").active()];

    manager.configure(bar(&tabs)).unwrap();
    main_loop.drain();

    assert_eq!(main_loop.renderer().selected_id(), Some("inbox"));
}

#[test]
fn TabBarManager___configure___replaces_previous_style() {
    let (manager, _main_loop) = attached();
    let first = TabBarStyle::new().background_color("#FFFFFF").elevation(4.0);
    let second = TabBarStyle::new().active_color("#000000");
    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&first)))
        .unwrap();

    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&second)))
        .unwrap();

    let style = manager.style();
    assert_eq!(style.colors.background_color, None);
    assert_eq!(style.elevation, None);
    assert_eq!(style.colors.active_color.as_deref(), Some("#000000"));
}

#[test]
fn TabBarManager___update___patches_style_keys() {
    let (manager, _main_loop) = attached();
    let base = TabBarStyle::new()
        .background_color("#FFFFFF")
        .active_color("#007AFF");
    let patch = TabBarStyle::new().active_color("#FF3B30");
    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&base)))
        .unwrap();

    manager
        .update(BarPayload::build(&standard_tabs(), Some(&patch)))
        .unwrap();

    let style = manager.style();
    assert_eq!(style.colors.background_color.as_deref(), Some("#FFFFFF"));
    assert_eq!(style.colors.active_color.as_deref(), Some("#FF3B30"));
}

#[test]
fn TabBarManager___update___replaces_dark_object_whole() {
    let (manager, _main_loop) = attached();
    let base = TabBarStyle::new()
        .dark_background_color("#000000")
        .dark_active_color("#0A84FF");
    let patch = TabBarStyle::new().dark_badge_color("#FF453A");
    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&base)))
        .unwrap();

    manager
        .update(BarPayload::build(&standard_tabs(), Some(&patch)))
        .unwrap();

    let dark = manager.style().dark.unwrap();
    assert_eq!(dark.background_color, None);
    assert_eq!(dark.active_color, None);
    assert_eq!(dark.badge_color.as_deref(), Some("#FF453A"));
}

#[test]
fn TabBarManager___update_without_style___keeps_style() {
    let (manager, _main_loop) = attached();
    let base = TabBarStyle::new().background_color("#FFFFFF");
    manager
        .configure(BarPayload::build(&standard_tabs(), Some(&base)))
        .unwrap();

    manager.update(bar(&standard_tabs())).unwrap();

    assert_eq!(
        manager.style().colors.background_color.as_deref(),
        Some("#FFFFFF")
    );
}

#[test]
fn TabBarManager___update___rebuilds_items_from_new_tabs() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();

    manager
        .update(bar(&[
            TabItem::new("home"),
            TabItem::new("hidden").visible(false),
        ]))
        .unwrap();
    main_loop.drain();

    let ids: Vec<&str> = main_loop
        .renderer()
        .items()
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, vec!["home"]);
    assert_eq!(manager.tab_configs().len(), 2);
}

// set_active

#[test]
fn TabBarManager___set_active___selects_rendered_tab() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();

    manager.set_active("profile");
    main_loop.drain();

    assert_eq!(main_loop.renderer().selected_id(), Some("profile"));
}

#[test]
fn TabBarManager___set_active___unknown_id_is_noop() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();
    main_loop.drain();

    manager.set_active("missing");

    assert_eq!(main_loop.drain(), 0);
    assert_eq!(main_loop.renderer().selected_id(), Some("home"));
}

#[test]
fn TabBarManager___set_active___hidden_tab_is_noop() {
    let (manager, mut main_loop) = attached();
    manager
        .configure(bar(&[
            TabItem::new("home"),
            TabItem::new("secret").visible(false),
        ]))
        .unwrap();
    main_loop.drain();

    manager.set_active("secret");

    assert_eq!(main_loop.drain(), 0);
}

#[test]
fn TabBarManager___update_without_active_tab___keeps_current_selection() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();
    manager.set_active("profile");

    manager.update(bar(&standard_tabs())).unwrap();
    main_loop.drain();

    assert_eq!(main_loop.renderer().selected_id(), Some("profile"));
    assert_eq!(manager.selected().as_deref(), Some("profile"));
}

#[test]
fn TabBarManager___update_with_active_tab___moves_selection() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();
    manager.set_active("profile");

    manager
        .update(bar(&standard_tabs()).with_active_tab("create"))
        .unwrap();
    main_loop.drain();

    assert_eq!(main_loop.renderer().selected_id(), Some("create"));
}

// set_badge

#[test]
fn TabBarManager___set_badge___sets_then_clears() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();

    manager.set_badge("create", Some(4));
    main_loop.drain();
    assert_eq!(main_loop.renderer().item("create").unwrap().badge, Some(4));

    manager.set_badge("create", None);
    main_loop.drain();
    assert_eq!(main_loop.renderer().item("create").unwrap().badge, None);
    assert_eq!(manager.tab_configs()[1].badge, None);
}

#[test]
fn TabBarManager___set_badge___unknown_id_is_noop() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();
    main_loop.drain();

    manager.set_badge("missing", Some(1));

    assert_eq!(main_loop.drain(), 0);
}

// show / hide

#[test]
fn TabBarManager___new___starts_visible() {
    let manager = TabBarManager::default();

    assert!(manager.is_visible());
}

#[test]
fn TabBarManager___show_twice___one_transition() {
    let (manager, mut main_loop) = attached();
    manager.hide();
    main_loop.drain();
    let before = main_loop.renderer().visibility_transitions();

    let first = manager.show();
    let second = manager.show();
    main_loop.drain();

    assert!(first);
    assert!(!second);
    assert_eq!(main_loop.renderer().visibility_transitions() - before, 1);
    assert!(main_loop.renderer().is_visible());
}

#[test]
fn TabBarManager___hide___hides_widget_with_custom_animation() {
    let settings = TabBarSettings {
        animation_ms: 120,
        ..Default::default()
    };
    let manager = TabBarManager::new(&settings);
    let (ui, mut main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
    manager.attach(ui);

    assert!(manager.hide());
    main_loop.drain();

    assert!(!manager.is_visible());
    assert!(!main_loop.renderer().is_visible());
}

// taps

#[test]
fn TabBarManager___tap_on_action_tab___emits_selected_then_action() {
    let (manager, _main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();
    let events = collecting_sink(&manager);

    let raised = manager.handle_tab_tap(1);

    let expected = vec![
        NativeEvent::tab_selected("create", "", 1),
        NativeEvent::action_triggered("create", "new"),
    ];
    assert_eq!(raised, expected);
    assert_eq!(*events.lock(), expected);
}

#[test]
fn TabBarManager___tap_on_url_tab___emits_selected_and_navigates() {
    let (manager, mut main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();

    let raised = manager.handle_tab_tap(2);
    main_loop.drain();

    assert_eq!(raised, vec![NativeEvent::tab_selected("profile", "/profile", 2)]);
    assert_eq!(main_loop.renderer().navigations(), ["/profile".to_string()]);
}

#[test]
fn TabBarManager___tap___selects_tapped_item() {
    let (manager, mut main_loop) = attached();
    manager
        .configure(bar(&[
            TabItem::new("home").url("/").active(),
            TabItem::new("profile").url("/profile"),
        ]))
        .unwrap();
    main_loop.drain();

    manager.handle_tab_tap(1);
    main_loop.drain();

    assert_eq!(main_loop.renderer().selected_id(), Some("profile"));
    assert_eq!(manager.selected().as_deref(), Some("profile"));
}

#[test]
fn TabBarManager___tap_on_action_tab_without_name___emits_selected_only() {
    let (manager, _main_loop) = attached();
    let mut payload = bar(&[TabItem::new("create").action("new")]);
    payload.tabs[0].action = None;
    manager.configure(payload).unwrap();

    let raised = manager.handle_tab_tap(0);

    assert_eq!(raised, vec![NativeEvent::tab_selected("create", "", 0)]);
}

#[test]
fn TabBarManager___tap_out_of_range___ignored() {
    let (manager, _main_loop) = attached();
    manager.configure(bar(&standard_tabs())).unwrap();

    assert!(manager.handle_tab_tap(9).is_empty());
}

#[test]
fn TabBarManager___sink_reentering_manager___does_not_deadlock() {
    let (manager, _main_loop) = attached();
    let manager = Arc::new(manager);
    manager.configure(bar(&standard_tabs())).unwrap();
    let inner = manager.clone();
    manager.set_event_sink(move |event: NativeEvent| {
        if let NativeEvent::TabSelected(selected) = event {
            inner.set_badge(&selected.id, None);
            inner.set_active(&selected.id);
        }
    });

    let raised = manager.handle_tab_tap(0);

    assert_eq!(raised.len(), 1);
}
