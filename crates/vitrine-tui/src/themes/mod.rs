//! Theme registry
//!
//! Built-in presets selectable by name from `[theme]` in the config,
//! with optional per-color hex overrides on top.

mod daylight;
mod gruvbox;
mod midnight;
mod nord;

pub use daylight::daylight;
pub use gruvbox::gruvbox_dark;
pub use midnight::midnight;
pub use nord::nord;

use ratatui::style::Color;
use vitrine_core::config::{ThemeColorOverrides, ThemeConfig};

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme from config; unknown names fall back to the default
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "midnight" => midnight(),
        "daylight" => daylight(),
        "nord" => nord(),
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        _ => midnight(),
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let mut set = |slot: &mut Color, hex: &Option<String>| {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    };

    set(&mut theme.bg, &overrides.bg);
    set(&mut theme.hero_deep, &overrides.hero_deep);
    set(&mut theme.hero_glow, &overrides.hero_glow);
    set(&mut theme.surface, &overrides.surface);
    set(&mut theme.fg, &overrides.fg);
    set(&mut theme.fg_muted, &overrides.fg_muted);
    set(&mut theme.ink, &overrides.ink);
    set(&mut theme.ink_muted, &overrides.ink_muted);
    set(&mut theme.nav_fg, &overrides.nav_fg);
    set(&mut theme.nav_fg_on_light, &overrides.nav_fg_on_light);
    set(&mut theme.accent, &overrides.accent);
    set(&mut theme.dot_active, &overrides.dot_active);
    set(&mut theme.dot_inactive, &overrides.dot_inactive);

    theme
}

/// Names accepted by `load_theme`
pub fn available_themes() -> Vec<&'static str> {
    vec!["midnight", "daylight", "nord", "gruvbox-dark"]
}
