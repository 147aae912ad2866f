use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    NextSlide,
    PrevSlide,
    ToggleMenu,
    CloseMenu,
    /// Activate the numbered nav link (closes the menu)
    ActivateLink(usize),
    /// First 'g' press, waiting for the second
    PendingG,
    None,
}

/// Resolve a key event to an action given the current app mode
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.menu.is_open() {
        return handle_menu_mode(key, keymap);
    }

    let binding = KeyBinding::from_event(&key);

    // Second half of an armed "gg" sequence
    if app.pending_key == Some('g') {
        if keymap.is_g_prefix(&binding) {
            return keymap.pending_g_action().copied().unwrap_or(Action::None);
        }
        // Any other key abandons the sequence and resolves normally
    } else if keymap.is_g_prefix(&binding) {
        return Action::PendingG;
    }

    if key.code == KeyCode::Esc && key.modifiers == KeyModifiers::NONE {
        // Escape always reaches the overlay, open or not
        return Action::CloseMenu;
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Key handling while the full-screen menu is open: Escape, Enter or the
/// toggle close it, a numbered link activates and closes it, quit still
/// works.
fn handle_menu_mode(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::from_event(&key);

    if let Some(&action) = keymap.get(&binding) {
        match action {
            Action::Quit => return Action::Quit,
            Action::ToggleMenu => return Action::CloseMenu,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::CloseMenu,
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Action::ActivateLink(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{AppConfig, Page};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let config = AppConfig::default();
        let theme = crate::themes::load_theme(&config.theme);
        let mut app = App::new(config, theme, Page::showcase());
        app.resize(80, 24);
        app
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l')), &app, &keymap),
            Action::NextSlide
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('m')), &app, &keymap),
            Action::ToggleMenu
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut app = app();
        let keymap = Keymap::default();
        app.menu.open();
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app, &keymap),
            Action::CloseMenu
        );
    }

    #[test]
    fn test_enter_closes_open_menu() {
        let mut app = app();
        let keymap = Keymap::default();
        app.menu.open();
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &app, &keymap),
            Action::CloseMenu
        );
    }

    #[test]
    fn test_digit_activates_link_in_menu() {
        let mut app = app();
        let keymap = Keymap::default();
        app.menu.open();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), &app, &keymap),
            Action::ActivateLink(1)
        );
        // Scrolling keys do nothing while the menu is open
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_quit_works_inside_menu() {
        let mut app = app();
        let keymap = Keymap::default();
        app.menu.open();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
    }
}
