//! Midnight: the default cinematic dark theme

use ratatui::style::Color;

use crate::theme::Theme;

pub fn midnight() -> Theme {
    Theme {
        bg: Color::Rgb(0x0d, 0x0f, 0x14),
        hero_deep: Color::Rgb(0x16, 0x1a, 0x24),
        hero_glow: Color::Rgb(0x3a, 0x46, 0x5e),
        surface: Color::Rgb(0xe9, 0xe4, 0xd8),
        fg: Color::Rgb(0xf2, 0xf0, 0xea),
        fg_muted: Color::Rgb(0x8a, 0x90, 0x9e),
        ink: Color::Rgb(0x22, 0x24, 0x28),
        ink_muted: Color::Rgb(0x5c, 0x5e, 0x62),
        nav_fg: Color::Rgb(0xff, 0xff, 0xff),
        nav_fg_on_light: Color::Rgb(0x33, 0x35, 0x39),
        accent: Color::Rgb(0xd8, 0xa6, 0x57),
        dot_active: Color::Rgb(0xf2, 0xf0, 0xea),
        dot_inactive: Color::Rgb(0x4a, 0x4f, 0x5a),
    }
}
