//! Style resolution against platform defaults

use tabbar_core::{ColorKey, Platform, StylePayload};

use crate::Color;

/// Tint of the selected item when the style sets none
pub const DEFAULT_ACTIVE_COLOR: Color = Color::rgb(0x00, 0x7A, 0xFF);

/// Tint of unselected items when the style sets none
pub const DEFAULT_INACTIVE_COLOR: Color = Color::rgb(0x8E, 0x8E, 0x93);

/// Values a platform widget uses for keys the style leaves out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformDefaults {
    pub active: Color,
    pub inactive: Color,
    /// `None` when the platform has no translucency toggle
    pub translucent: Option<bool>,
    /// `None` when the platform has no elevation (dp)
    pub elevation: Option<f64>,
    pub supports_border: bool,
}

impl PlatformDefaults {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self {
                active: DEFAULT_ACTIVE_COLOR,
                inactive: DEFAULT_INACTIVE_COLOR,
                translucent: Some(true),
                elevation: None,
                supports_border: true,
            },
            Platform::Android => Self {
                active: DEFAULT_ACTIVE_COLOR,
                inactive: DEFAULT_INACTIVE_COLOR,
                translucent: None,
                elevation: Some(8.0),
                supports_border: false,
            },
            Platform::Headless => Self {
                active: DEFAULT_ACTIVE_COLOR,
                inactive: DEFAULT_INACTIVE_COLOR,
                translucent: Some(true),
                elevation: Some(8.0),
                supports_border: true,
            },
        }
    }
}

/// A style with every slot resolved for one appearance
///
/// Colors resolve dark override, then light value, then platform default.
/// Optional slots stay `None` when the widget should keep its own look.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub background: Option<Color>,
    pub active: Color,
    pub inactive: Color,
    pub badge: Option<Color>,
    pub badge_text: Option<Color>,
    pub border: Option<Color>,
    pub border_width: Option<f64>,
    pub translucent: Option<bool>,
    pub elevation: Option<f64>,
}

impl ResolvedStyle {
    pub fn resolve(style: &StylePayload, platform: Platform, dark_mode: bool) -> Self {
        let defaults = PlatformDefaults::for_platform(platform);
        let color = |key| style.resolve(key, dark_mode).and_then(Color::parse_hex);

        let (border, border_width) = if defaults.supports_border {
            (color(ColorKey::Border), style.border_width)
        } else {
            (None, None)
        };

        Self {
            background: color(ColorKey::Background),
            active: color(ColorKey::Active).unwrap_or(defaults.active),
            inactive: color(ColorKey::Inactive).unwrap_or(defaults.inactive),
            badge: color(ColorKey::Badge),
            badge_text: color(ColorKey::BadgeText),
            border,
            border_width,
            // A toggle only survives on platforms that have it
            translucent: defaults
                .translucent
                .map(|default| style.translucent.unwrap_or(default)),
            elevation: defaults
                .elevation
                .map(|default| style.elevation.unwrap_or(default)),
        }
    }
}
