use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;
use vitrine_core::config::KeymapConfig;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action for the "gg" double-press sequence, when configured
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        let mut add_binding = |key_str: &str, action: Action| {
            // The "gg" sequence is resolved through the pending-key state
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding: '{}', using default", key_str),
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.half_page_down, Action::HalfPageDown);
        add_binding(&config.half_page_up, Action::HalfPageUp);
        add_binding(&config.page_down, Action::PageDown);
        add_binding(&config.page_up, Action::PageUp);
        add_binding(&config.jump_to_top, Action::JumpToTop);
        add_binding(&config.jump_to_bottom, Action::JumpToBottom);
        add_binding(&config.next_slide, Action::NextSlide);
        add_binding(&config.prev_slide, Action::PrevSlide);
        add_binding(&config.toggle_menu, Action::ToggleMenu);

        // Hardcoded bindings that shouldn't be configurable
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings
            .entry(KeyBinding::simple(KeyCode::Up))
            .or_insert(Action::ScrollUp);
        bindings
            .entry(KeyBinding::simple(KeyCode::Down))
            .or_insert(Action::ScrollDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::Left))
            .or_insert(Action::PrevSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::Right))
            .or_insert(Action::NextSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageDown))
            .or_insert(Action::PageDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageUp))
            .or_insert(Action::PageUp);

        Self {
            bindings,
            pending_g_action,
        }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    pub fn pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Whether a lone 'g' press should arm the pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into a KeyBinding.
/// Supported: single chars ("j", "/", uppercase as Shift), "<C-x>", "<S-x>",
/// and named keys ("<CR>", "<Esc>", "<Tab>", "<Space>", arrows, paging).
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
        if let Some(rest) = inner.strip_prefix("C-") {
            return parse_key_name(rest).map(KeyBinding::ctrl);
        }
        if let Some(rest) = inner.strip_prefix("S-") {
            return parse_key_name(rest).map(KeyBinding::shift);
        }
        return parse_key_name(inner).map(KeyBinding::simple);
    }

    if s.len() == 1 {
        let c = s.chars().next()?;
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    None
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            if name.len() == 1 {
                let c = name.chars().next()?;
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}
