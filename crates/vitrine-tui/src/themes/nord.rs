//! Nord
//! https://www.nordtheme.com/

use ratatui::style::Color;

use crate::theme::Theme;

pub fn nord() -> Theme {
    Theme {
        bg: Color::Rgb(0x2e, 0x34, 0x40),       // nord0
        hero_deep: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        hero_glow: Color::Rgb(0x5e, 0x81, 0xac), // nord10
        surface: Color::Rgb(0xec, 0xef, 0xf4),   // nord6
        fg: Color::Rgb(0xec, 0xef, 0xf4),        // nord6
        fg_muted: Color::Rgb(0xd8, 0xde, 0xe9),  // nord4
        ink: Color::Rgb(0x2e, 0x34, 0x40),
        ink_muted: Color::Rgb(0x4c, 0x56, 0x6a), // nord3
        nav_fg: Color::Rgb(0xec, 0xef, 0xf4),
        nav_fg_on_light: Color::Rgb(0x3b, 0x42, 0x52),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),    // nord8
        dot_active: Color::Rgb(0xec, 0xef, 0xf4),
        dot_inactive: Color::Rgb(0x4c, 0x56, 0x6a),
    }
}
