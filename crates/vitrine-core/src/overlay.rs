//! Full-screen menu overlay state
//!
//! Opening locks page scrolling; closing restores it. The accessibility
//! attribute values are exposed as accessors so the presentation layer keeps
//! toggle and panel state in sync with a single source of truth.

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuOverlay {
    open: bool,
}

impl MenuOverlay {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// `aria-expanded` value for the toggle control
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// `aria-hidden` value for the panel
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// Page scrolling is suppressed while the overlay is open
    #[inline]
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_all_three_states() {
        let mut menu = MenuOverlay::default();
        menu.open();
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_hidden(), "false");
        assert!(menu.scroll_locked());
    }

    #[test]
    fn test_close_reverses_all_three() {
        let mut menu = MenuOverlay::default();
        menu.open();
        menu.close();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_hidden(), "true");
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_toggle() {
        let mut menu = MenuOverlay::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_when_closed_is_harmless() {
        let mut menu = MenuOverlay::default();
        menu.close();
        assert!(!menu.is_open());
    }
}
