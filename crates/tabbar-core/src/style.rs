//! Tab bar appearance

use serde::{Deserialize, Serialize};

use crate::payload::{StyleColors, StylePayload};

/// A color slot of the tab bar that may carry a dark-mode override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    Background,
    Active,
    Inactive,
    Badge,
    BadgeText,
    Border,
}

impl ColorKey {
    pub const ALL: [ColorKey; 6] = [
        ColorKey::Background,
        ColorKey::Active,
        ColorKey::Inactive,
        ColorKey::Badge,
        ColorKey::BadgeText,
        ColorKey::Border,
    ];

    /// Payload key for this slot
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Background => "background_color",
            ColorKey::Active => "active_color",
            ColorKey::Inactive => "inactive_color",
            ColorKey::Badge => "badge_color",
            ColorKey::BadgeText => "badge_text_color",
            ColorKey::Border => "border_color",
        }
    }
}

/// Appearance of the tab bar
///
/// Light-mode colors double as the fallback when no dark-mode override is
/// set. Anything left unset falls back to the platform default natively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabBarStyle {
    light: StyleColors,
    dark: StyleColors,
    border_width: Option<f64>,
    translucent: Option<bool>,
    elevation: Option<f64>,
}

impl TabBarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a light-mode color slot
    pub fn color(mut self, key: ColorKey, hex: impl Into<String>) -> Self {
        *self.light.slot_mut(key) = Some(hex.into());
        self
    }

    /// Set a dark-mode override for a color slot
    pub fn dark_color(mut self, key: ColorKey, hex: impl Into<String>) -> Self {
        *self.dark.slot_mut(key) = Some(hex.into());
        self
    }

    pub fn background_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::Background, hex)
    }

    pub fn active_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::Active, hex)
    }

    pub fn inactive_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::Inactive, hex)
    }

    pub fn badge_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::Badge, hex)
    }

    pub fn badge_text_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::BadgeText, hex)
    }

    pub fn border_color(self, hex: impl Into<String>) -> Self {
        self.color(ColorKey::Border, hex)
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn dark_background_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::Background, hex)
    }

    pub fn dark_active_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::Active, hex)
    }

    pub fn dark_inactive_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::Inactive, hex)
    }

    pub fn dark_badge_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::Badge, hex)
    }

    pub fn dark_badge_text_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::BadgeText, hex)
    }

    pub fn dark_border_color(self, hex: impl Into<String>) -> Self {
        self.dark_color(ColorKey::Border, hex)
    }

    /// Translucent background (iOS only)
    pub fn translucent(mut self, translucent: bool) -> Self {
        self.translucent = Some(translucent);
        self
    }

    /// Elevation shadow depth in dp (Android only)
    pub fn elevation(mut self, dp: f64) -> Self {
        self.elevation = Some(dp);
        self
    }

    /// Serialize for the bridge
    ///
    /// The `dark` object is emitted only when at least one override is set.
    pub fn to_payload(&self) -> StylePayload {
        StylePayload {
            colors: self.light.clone(),
            border_width: self.border_width,
            translucent: self.translucent,
            elevation: self.elevation,
            dark: (!self.dark.is_empty()).then(|| self.dark.clone()),
        }
    }
}
