use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::prefs::PreferenceStore;
use crate::surface::DisplaySurface;

/// Name of the persisted slot holding the theme
pub const THEME_SLOT: &str = "theme";

/// Light or dark. Dark unless told otherwise, because it's a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Only the exact strings `light` and `dark` count
    pub fn from_slot(value: Option<&str>) -> Option<Self> {
        match value {
            Some("light") => Some(ThemePreference::Light),
            Some("dark") => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Indicator glyph for the toggle
    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀",
            ThemePreference::Dark => "◐",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemePreference::Light => Palette::light(),
            ThemePreference::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads, applies and persists the theme
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The persisted theme, or dark when the slot is empty or holds junk
    pub fn preferred(&self) -> ThemePreference {
        ThemePreference::from_slot(self.store.get(THEME_SLOT).as_deref()).unwrap_or_default()
    }

    /// Set the mode attribute and icon, then persist. A failed write is logged
    /// and the theme still applies.
    pub fn apply(&mut self, theme: ThemePreference, surface: &mut DisplaySurface) {
        surface.theme_mode = Some(theme.as_str().to_string());
        surface.theme_icon = theme.icon().to_string();

        if let Err(e) = self.store.set(THEME_SLOT, theme.as_str()) {
            warn!("Failed to persist theme '{}': {}", theme, e);
        }
        debug!("Theme set to {}", theme);
    }

    /// The mode currently applied to the surface; anything but `light` is dark
    pub fn current(surface: &DisplaySurface) -> ThemePreference {
        match surface.theme_mode.as_deref() {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    /// Flip the applied mode and return the new one
    pub fn toggle(&mut self, surface: &mut DisplaySurface) -> ThemePreference {
        let next = Self::current(surface).opposite();
        self.apply(next, surface);
        next
    }

    /// Apply the preferred theme; done once at startup
    pub fn init(&mut self, surface: &mut DisplaySurface) {
        let preferred = self.preferred();
        self.apply(preferred, surface);
    }
}

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// Colors the TUI draws with in each mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub subtitle: Color,
    pub selected_bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub stars: Color,
    pub forks: Color,
    pub language: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0x1e1e2e),
            foreground: Color::rgb(0xcdd6f4),
            border: Color::rgb(0x45475a),
            border_focused: Color::rgb(0x89b4fa),
            title: Color::rgb(0xcba6f7),
            subtitle: Color::rgb(0xa6adc8),
            selected_bg: Color::rgb(0x313244),
            accent: Color::rgb(0xf9e2af),
            muted: Color::rgb(0x6c7086),
            error: Color::rgb(0xf38ba8),
            stars: Color::rgb(0xf9e2af),
            forks: Color::rgb(0x94e2d5),
            language: Color::rgb(0xcba6f7),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::rgb(0xeff1f5),
            foreground: Color::rgb(0x4c4f69),
            border: Color::rgb(0xbcc0cc),
            border_focused: Color::rgb(0x1e66f5),
            title: Color::rgb(0x8839ef),
            subtitle: Color::rgb(0x6c6f85),
            selected_bg: Color::rgb(0xdce0e8),
            accent: Color::rgb(0xdf8e1d),
            muted: Color::rgb(0x9ca0b0),
            error: Color::rgb(0xd20f39),
            stars: Color::rgb(0xdf8e1d),
            forks: Color::rgb(0x04a5e5),
            language: Color::rgb(0x8839ef),
        }
    }
}
