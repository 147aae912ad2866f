//! Gruvbox Material dark

use ratatui::style::Color;

use crate::theme::Theme;

pub fn gruvbox_dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        hero_deep: Color::Rgb(0x32, 0x30, 0x2f),
        hero_glow: Color::Rgb(0x7c, 0x6f, 0x64),
        surface: Color::Rgb(0xd4, 0xbe, 0x98),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        fg_muted: Color::Rgb(0x92, 0x83, 0x74),
        ink: Color::Rgb(0x28, 0x28, 0x28),
        ink_muted: Color::Rgb(0x50, 0x49, 0x45),
        nav_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        nav_fg_on_light: Color::Rgb(0x32, 0x30, 0x2f),
        accent: Color::Rgb(0xd8, 0xa6, 0x57),
        dot_active: Color::Rgb(0xdd, 0xc7, 0xa1),
        dot_inactive: Color::Rgb(0x50, 0x49, 0x45),
    }
}
