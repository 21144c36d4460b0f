#![allow(non_snake_case)]

use super::*;
use crate::{Color, HeadlessRenderer};
use tabbar_core::{TabBarSettings, TabBarStyle, TabItem};

fn items(ids: &[&str]) -> Vec<RenderedItem> {
    let tabs: Vec<_> = ids.iter().map(|id| TabItem::new(*id).to_payload()).collect();
    RenderedItem::from_payloads(&tabs)
}

// UiHandle tests

#[test]
fn UiHandle___post___returns_true_while_loop_alive() {
    let (handle, _main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);

    assert!(handle.post(UiCommand::Select { tag: 0 }));
    assert!(!handle.is_closed());
}

#[test]
fn UiHandle___post___returns_false_after_loop_dropped() {
    let (handle, main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
    drop(main_loop);

    assert!(!handle.post(UiCommand::Select { tag: 0 }));
    assert!(handle.is_closed());
}

// MainLoop tests

#[test]
fn MainLoop___drain___applies_commands_in_order() {
    let (handle, mut main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
    handle.post(UiCommand::RenderTabs(items(&["home", "search"])));
    handle.post(UiCommand::Select { tag: 1 });
    handle.post(UiCommand::SetBadge {
        tag: 0,
        count: Some(2),
    });

    let applied = main_loop.drain();

    assert_eq!(applied, 3);
    let renderer = main_loop.renderer();
    assert_eq!(renderer.selected_id(), Some("search"));
    assert_eq!(renderer.item("home").unwrap().badge, Some(2));
}

#[test]
fn MainLoop___drain___empty_queue_applies_nothing() {
    let (_handle, mut main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);

    assert_eq!(main_loop.drain(), 0);
}

#[test]
fn MainLoop___apply_style___resolves_with_renderer_appearance() {
    let renderer = HeadlessRenderer::new().with_dark_mode(true);
    let (_handle, mut main_loop) = MainLoop::new(renderer, Platform::Ios);
    let style = TabBarStyle::new()
        .background_color("#FFFFFF")
        .dark_background_color("#000000")
        .to_payload();

    main_loop.apply(UiCommand::ApplyStyle(style));

    let applied = main_loop.renderer().style().unwrap();
    assert_eq!(applied.background, Some(Color::rgb(0, 0, 0)));
    assert_eq!(applied.elevation, None);
}

#[test]
fn MainLoop___from_settings___android_drops_translucency() {
    let settings = TabBarSettings::from_json(br#"{"platform": "android", "dark_mode": true}"#).unwrap();
    let renderer = HeadlessRenderer::from_settings(&settings);
    let (_handle, mut main_loop) = MainLoop::from_settings(renderer, &settings);
    let style = TabBarStyle::new()
        .translucent(true)
        .background_color("#FFFFFF")
        .dark_background_color("#101010")
        .to_payload();

    main_loop.apply(UiCommand::ApplyStyle(style));

    assert_eq!(main_loop.platform(), Platform::Android);
    let applied = main_loop.renderer().style().unwrap();
    assert_eq!(applied.translucent, None);
    assert_eq!(applied.elevation, Some(8.0));
    assert_eq!(applied.background, Some(Color::rgb(0x10, 0x10, 0x10)));
}

#[test]
fn MainLoop___apply___set_visible_and_navigate() {
    let (_handle, mut main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);

    main_loop.apply(UiCommand::SetVisible {
        visible: false,
        animate_ms: 300,
    });
    main_loop.apply(UiCommand::Navigate {
        url: "/inbox".to_string(),
    });

    let renderer = main_loop.into_renderer();
    assert!(!renderer.is_visible());
    assert_eq!(renderer.navigations(), ["/inbox".to_string()]);
}

#[test]
fn UiCommand___name___matches_variant() {
    assert_eq!(UiCommand::RenderTabs(Vec::new()).name(), "render_tabs");
    assert_eq!(UiCommand::Select { tag: 0 }.name(), "select");
    assert_eq!(
        UiCommand::Navigate {
            url: String::new()
        }
        .name(),
        "navigate"
    );
}

#[tokio::test]
async fn MainLoop___run___applies_until_handles_dropped() {
    let (handle, main_loop) = MainLoop::new(HeadlessRenderer::new(), Platform::Headless);
    let task = tokio::spawn(main_loop.run());

    handle.post(UiCommand::RenderTabs(items(&["home", "inbox", "profile"])));
    handle.post(UiCommand::Select { tag: 2 });
    handle.post(UiCommand::SetVisible {
        visible: false,
        animate_ms: 0,
    });
    drop(handle);

    let renderer = task.await.unwrap();
    assert_eq!(renderer.items().len(), 3);
    assert_eq!(renderer.selected_id(), Some("profile"));
    assert!(!renderer.is_visible());
}
