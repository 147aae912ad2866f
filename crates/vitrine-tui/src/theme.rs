use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub bg: Color,
    /// Hero backdrop shade (darkest band of the gradient)
    pub hero_deep: Color,
    /// Hero backdrop shade (lightest band of the gradient)
    pub hero_glow: Color,
    /// Light section surface
    pub surface: Color,

    /// Primary text on dark surfaces
    pub fg: Color,
    /// Secondary text on dark surfaces
    pub fg_muted: Color,
    /// Text on light surfaces
    pub ink: Color,
    /// Secondary text on light surfaces
    pub ink_muted: Color,

    /// Nav text over dark content (default)
    pub nav_fg: Color,
    /// Nav text over light content (the "on-light" variant)
    pub nav_fg_on_light: Color,

    pub accent: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::midnight()
    }
}
