use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            motion: MotionConfig::default(),
            carousel: CarouselConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (drives the animation frame cadence)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Disable all animated movement (parallax keeps a neutral transform)
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name (e.g. "midnight", "nord", "gruvbox-dark")
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Optional hex color overrides applied on top of the named theme
    #[serde(default)]
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

/// Per-color overrides, each a hex string ("#RRGGBB" or "#RGB")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg: Option<String>,
    /// Deepest hero backdrop shade
    pub hero_deep: Option<String>,
    /// Bright hero backdrop shade
    pub hero_glow: Option<String>,
    /// Background of light-toned sections
    pub surface: Option<String>,
    /// Body text on dark sections
    pub fg: Option<String>,
    /// Dimmed text on dark sections
    pub fg_muted: Option<String>,
    /// Body text on light sections
    pub ink: Option<String>,
    /// Dimmed text on light sections
    pub ink_muted: Option<String>,
    /// Top bar text over dark content
    pub nav_fg: Option<String>,
    /// Top bar text over light content
    pub nav_fg_on_light: Option<String>,
    /// Accent color (menu numerals, hover hints)
    pub accent: Option<String>,
    /// Active carousel dot
    pub dot_active: Option<String>,
    /// Inactive carousel dot
    pub dot_inactive: Option<String>,
}

/// Tuning for the hero parallax animator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Easing fraction applied per tick, in (0, 1)
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Maximum upward drift of the backdrop layer, logical pixels
    #[serde(default = "default_bg_drift")]
    pub bg_drift: f64,
    /// Maximum downward drift of the text layer, logical pixels
    #[serde(default = "default_text_drift")]
    pub text_drift: f64,
    /// Fixed scale applied to the backdrop layer
    #[serde(default = "default_bg_scale")]
    pub bg_scale: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            bg_drift: default_bg_drift(),
            text_drift: default_text_drift(),
            bg_scale: default_bg_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Minimum horizontal displacement for a drag to count as a swipe.
    /// Anything shorter is treated as a tap.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-g>" (Shift+g), "<CR>", "<Esc>", "<Tab>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll the page down one row
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll the page up one row
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half a screen down
    #[serde(default = "default_key_half_page_down")]
    pub half_page_down: String,
    /// Scroll half a screen up
    #[serde(default = "default_key_half_page_up")]
    pub half_page_up: String,
    /// Scroll a full screen down
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    /// Scroll a full screen up
    #[serde(default = "default_key_page_up")]
    pub page_up: String,
    /// Jump to the top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Advance the carousel one slide
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Step the carousel back one slide
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    /// Open/close the full-screen menu
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            half_page_down: default_key_half_page_down(),
            half_page_up: default_key_half_page_up(),
            page_down: default_key_page_down(),
            page_up: default_key_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            toggle_menu: default_key_toggle_menu(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_half_page_down() -> String { "<C-d>".to_string() }
fn default_key_half_page_up() -> String { "<C-u>".to_string() }
fn default_key_page_down() -> String { "<C-f>".to_string() }
fn default_key_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_slide() -> String { "l".to_string() }
fn default_key_prev_slide() -> String { "h".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    16 // ~60fps, matching a display refresh cadence
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_ease() -> f64 {
    0.09
}

fn default_bg_drift() -> f64 {
    18.0
}

fn default_text_drift() -> f64 {
    10.0
}

fn default_bg_scale() -> f64 {
    1.06
}

fn default_swipe_threshold() -> f64 {
    35.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert!(!config.ui.reduced_motion);
        assert!((config.motion.ease - 0.09).abs() < f64::EPSILON);
        assert!((config.carousel.swipe_threshold - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            reduced_motion = true
            "#,
        )
        .unwrap();
        assert!(config.ui.reduced_motion);
        assert_eq!(config.theme.name, "midnight");
        assert!((config.motion.bg_drift - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_theme_color_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [theme]
            name = "nord"

            [theme.colors]
            accent = "#ff5500"
            "##,
        )
        .unwrap();
        assert_eq!(config.theme.name, "nord");
        assert_eq!(config.theme.colors.accent.as_deref(), Some("#ff5500"));
        assert!(config.theme.colors.bg.is_none());
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.keymap.jump_to_top, "gg");
    }
}
