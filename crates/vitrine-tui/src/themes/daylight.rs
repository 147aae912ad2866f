//! Daylight: a light variant for bright terminals

use ratatui::style::Color;

use crate::theme::Theme;

pub fn daylight() -> Theme {
    Theme {
        bg: Color::Rgb(0xf6, 0xf3, 0xec),
        hero_deep: Color::Rgb(0xc9, 0xd2, 0xdd),
        hero_glow: Color::Rgb(0xf0, 0xe6, 0xd2),
        surface: Color::Rgb(0xff, 0xff, 0xff),
        fg: Color::Rgb(0x2c, 0x2e, 0x33),
        fg_muted: Color::Rgb(0x6e, 0x72, 0x7a),
        ink: Color::Rgb(0x1f, 0x21, 0x25),
        ink_muted: Color::Rgb(0x60, 0x63, 0x69),
        nav_fg: Color::Rgb(0x2c, 0x2e, 0x33),
        nav_fg_on_light: Color::Rgb(0x1a, 0x1b, 0x1e),
        accent: Color::Rgb(0xb5, 0x6a, 0x2c),
        dot_active: Color::Rgb(0x2c, 0x2e, 0x33),
        dot_inactive: Color::Rgb(0xb8, 0xbb, 0xc2),
    }
}
