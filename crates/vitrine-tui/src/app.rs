use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use vitrine_core::navbar::{probe_point, NavBar, NavTone, Region};
use vitrine_core::{
    AppConfig, Carousel, MenuOverlay, Page, ParallaxAnimator, RectF, RevealTracker,
};

use crate::theme::Theme;
use crate::widgets::carousel::dot_hit;

/// Height of the fixed nav bar overlaying the page
pub const TOPBAR_HEIGHT: u16 = 1;
/// Width of the clickable menu toggle at the right end of the nav bar
pub const TOPBAR_MENU_WIDTH: u16 = 8;
/// Rows occupied by the carousel block
pub const CAROUSEL_HEIGHT: u16 = 9;
/// Rows occupied by the footer
pub const FOOTER_HEIGHT: u16 = 3;

/// Wheel scroll step in rows
const WHEEL_STEP: i32 = 3;

/// What a layout span renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Hero,
    Section(usize),
    Carousel,
    Footer,
}

/// A vertical span of the page document, in content rows
#[derive(Debug, Clone, Copy)]
pub struct LayoutSpan {
    pub kind: ElementKind,
    pub top: u16,
    pub height: u16,
}

/// Pre-computed row spans for every page element at the current width,
/// so per-frame rendering and hit testing never re-measure text.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub spans: Vec<LayoutSpan>,
    pub total_height: u16,
}

impl PageLayout {
    pub fn compute(page: &Page, width: u16, height: u16) -> Self {
        let inner = width.saturating_sub(4);
        let mut spans = Vec::new();
        let mut y = 0u16;

        let mut push = |spans: &mut Vec<LayoutSpan>, kind, h: u16| {
            spans.push(LayoutSpan {
                kind,
                top: y,
                height: h,
            });
            y += h;
        };

        // Full-bleed hero
        push(&mut spans, ElementKind::Hero, height.max(8));

        let mut carousel_placed = false;
        for (i, section) in page.sections.iter().enumerate() {
            let body: u16 = section
                .body
                .iter()
                .map(|line| text_height(line, inner))
                .sum();
            // title + blank + body + bottom padding
            push(&mut spans, ElementKind::Section(i), body + 3);

            if section.id == "gallery" {
                push(&mut spans, ElementKind::Carousel, CAROUSEL_HEIGHT);
                carousel_placed = true;
            }
        }
        if !carousel_placed && !page.slides.is_empty() {
            push(&mut spans, ElementKind::Carousel, CAROUSEL_HEIGHT);
        }

        push(&mut spans, ElementKind::Footer, FOOTER_HEIGHT);

        Self {
            spans,
            total_height: y,
        }
    }

    pub fn span(&self, kind: ElementKind) -> Option<&LayoutSpan> {
        self.spans.iter().find(|s| s.kind == kind)
    }
}

/// Text height with word wrapping at the given width
fn text_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    ((text.chars().count() + width - 1) / width).max(1) as u16
}

/// Application state: the page plus one instance of every interaction
/// component. Each component checked its own anchors at construction and is
/// simply inert when they were missing; a disabled component never prevents
/// the others from running.
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub page: Page,
    pub layout: PageLayout,
    /// Terminal size (columns, rows)
    pub viewport: (u16, u16),
    /// Page scroll offset in content rows
    pub scroll: u16,
    pub parallax: ParallaxAnimator,
    pub carousel: Carousel,
    pub reveals: RevealTracker,
    pub navbar: NavBar,
    pub menu: MenuOverlay,
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g. 'gg')
    pub pending_key: Option<char>,
    /// Carousel-relative position of an in-flight left-button press
    press_origin: Option<(f64, f64)>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme, page: Page) -> Self {
        let parallax = ParallaxAnimator::new(config.motion.clone(), config.ui.reduced_motion);
        let carousel = Carousel::new(page.slides.len(), config.carousel.swipe_threshold);
        let reveals = RevealTracker::new([]);
        Self {
            config,
            theme,
            page,
            layout: PageLayout::default(),
            viewport: (0, 0),
            scroll: 0,
            parallax,
            carousel,
            reveals,
            navbar: NavBar::default(),
            menu: MenuOverlay::default(),
            should_quit: false,
            pending_key: None,
            press_origin: None,
        }
    }

    /// Recompute the layout for a new terminal size. Reveal state carries
    /// over by section index; everything else re-derives from the layout.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        let old = std::mem::take(&mut self.reveals);
        self.layout = PageLayout::compute(&self.page, width, height);

        let bounds: Vec<(f64, f64)> = self
            .page
            .sections
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let span = self
                    .layout
                    .span(ElementKind::Section(i))
                    .copied()
                    .unwrap_or(LayoutSpan {
                        kind: ElementKind::Section(i),
                        top: 0,
                        height: 0,
                    });
                (span.top as f64, span.height as f64)
            })
            .collect();
        self.reveals = RevealTracker::new(bounds);
        for (i, section) in self.page.sections.iter().enumerate() {
            if !section.reveal || old.is_visible(i) {
                self.reveals.mark_visible(i);
            }
        }

        self.scroll = self.scroll.min(self.max_scroll());
        self.sync();
    }

    #[inline]
    pub fn max_scroll(&self) -> u16 {
        self.layout.total_height.saturating_sub(self.viewport.1)
    }

    /// Re-derive everything scroll-dependent: parallax targets, reveals and
    /// the nav tone. Runs on scroll and resize, never per tick.
    fn sync(&mut self) {
        let (w, h) = self.viewport;

        match self.layout.span(ElementKind::Hero) {
            Some(span) => {
                let hero = RectF::new(
                    0.0,
                    span.top as f64 - self.scroll as f64,
                    w as f64,
                    span.height as f64,
                );
                self.parallax.retarget(hero, h as f64);
            }
            // No hero resolved: the animator must not run half-wired
            None => self.parallax.stop(),
        }

        self.reveals.update(self.scroll as f64, h as f64);

        let regions = self.nav_regions();
        self.navbar
            .sample(&regions, probe_point(h as f64, TOPBAR_HEIGHT as f64));
    }

    /// Tone-labeled regions currently on screen, in viewport coordinates
    fn nav_regions(&self) -> Vec<Region> {
        let (w, _) = self.viewport;
        self.layout
            .spans
            .iter()
            .filter_map(|span| {
                let tone = match span.kind {
                    ElementKind::Section(i) => self.page.sections.get(i)?.tone,
                    ElementKind::Footer => NavTone::Light,
                    _ => return None,
                };
                Some(Region {
                    bounds: RectF::new(
                        0.0,
                        span.top as f64 - self.scroll as f64,
                        w as f64,
                        span.height as f64,
                    ),
                    tone,
                })
            })
            .collect()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        // Scrolling is suppressed while the menu overlay is open
        if self.menu.scroll_locked() {
            return;
        }
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.set_scroll(target);
    }

    fn set_scroll(&mut self, to: u16) {
        let to = to.min(self.max_scroll());
        if to != self.scroll {
            self.scroll = to;
            self.sync();
        }
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        let half = (self.viewport.1 / 2).max(1) as i32;
        self.scroll_by(if down { half } else { -half });
    }

    pub fn scroll_full_page(&mut self, down: bool) {
        let page = self.viewport.1.max(1) as i32;
        self.scroll_by(if down { page } else { -page });
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_by(-(self.scroll as i32));
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_by(self.max_scroll() as i32);
    }

    /// Advance the animation one frame
    pub fn on_tick(&mut self) {
        self.parallax.tick();
    }

    /// Close the menu and bring the linked target into view. Link indices
    /// follow the page's nav links; anything past the last section (e.g.
    /// "Contact") lands on the footer.
    pub fn activate_link(&mut self, index: usize) {
        self.menu.close();
        match self.layout.span(ElementKind::Section(index)) {
            Some(span) => {
                let top = span.top.saturating_sub(TOPBAR_HEIGHT);
                self.set_scroll(top);
            }
            None => self.set_scroll(self.max_scroll()),
        }
    }

    /// Screen-space placement of the carousel, if any part is visible:
    /// `(screen_top, height)` in rows. `screen_top` may be negative when
    /// the block is partially scrolled off the top.
    fn carousel_on_screen(&self) -> Option<(i32, u16)> {
        let span = self.layout.span(ElementKind::Carousel)?;
        let top = span.top as i32 - self.scroll as i32;
        let (_, h) = self.viewport;
        if top + span.height as i32 <= 0 || top >= h as i32 {
            return None;
        }
        Some((top, span.height))
    }

    /// Map a terminal cell to carousel-root-relative coordinates
    pub fn carousel_rel(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let (top, height) = self.carousel_on_screen()?;
        let rel = row as i32 - top;
        if rel < 0 || rel >= height as i32 {
            return None;
        }
        Some((column as f64, rel as f64))
    }

    fn topbar_menu_hit(&self, column: u16, row: u16) -> bool {
        row < TOPBAR_HEIGHT && column >= self.viewport.0.saturating_sub(TOPBAR_MENU_WIDTH)
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                match self.carousel_rel(mouse.column, mouse.row) {
                    Some((x, y)) => self.carousel.pointer_move(x, y, self.viewport.0 as f64),
                    None => self.carousel.pointer_leave(),
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.menu.is_open() {
                    // Any activation inside the open panel closes it
                    self.menu.close();
                    return;
                }
                if self.topbar_menu_hit(mouse.column, mouse.row) {
                    self.menu.toggle();
                    return;
                }
                if let Some((x, y)) = self.carousel_rel(mouse.column, mouse.row) {
                    self.carousel.touch_start(x);
                    self.press_origin = Some((x, y));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.press_origin.take();
                if let Some((x, _)) = self.carousel_rel(mouse.column, mouse.row) {
                    let before = self.carousel.index();
                    self.carousel.touch_end(x);
                    if self.carousel.index() == before {
                        if let Some((_, py)) = pressed {
                            self.carousel_tap(x, py);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// A press-and-release that was not a swipe: a dot selects its slide,
    /// otherwise the left/right zones step the deck.
    fn carousel_tap(&mut self, x: f64, y: f64) {
        let (w, _) = self.viewport;
        let span_height = self
            .layout
            .span(ElementKind::Carousel)
            .map(|s| s.height)
            .unwrap_or(0);

        if y as u16 + 2 == span_height {
            if let Some(i) = dot_hit(self.carousel.len(), w, x as u16) {
                self.carousel.navigate_to(i as isize);
                return;
            }
        }
        if x < w as f64 / 2.0 {
            self.carousel.prev();
        } else {
            self.carousel.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::load_theme;

    fn app() -> App {
        let config = AppConfig::default();
        let theme = load_theme(&config.theme);
        let mut app = App::new(config, theme, Page::showcase());
        app.resize(80, 24);
        app
    }

    #[test]
    fn test_layout_covers_page() {
        let app = app();
        assert_eq!(app.layout.span(ElementKind::Hero).unwrap().height, 24);
        assert!(app.layout.span(ElementKind::Carousel).is_some());
        assert!(app.layout.span(ElementKind::Footer).is_some());
        let footer = app.layout.span(ElementKind::Footer).unwrap();
        assert_eq!(footer.top + footer.height, app.layout.total_height);
    }

    #[test]
    fn test_scroll_clamps_to_document() {
        let mut app = app();
        app.scroll_by(-10);
        assert_eq!(app.scroll, 0);
        app.scroll_by(10_000);
        assert_eq!(app.scroll, app.max_scroll());
    }

    #[test]
    fn test_menu_locks_scroll() {
        let mut app = app();
        app.menu.open();
        app.scroll_by(5);
        assert_eq!(app.scroll, 0);
        app.menu.close();
        app.scroll_by(5);
        assert_eq!(app.scroll, 5);
    }

    #[test]
    fn test_nav_tone_flips_over_light_section() {
        let mut app = app();
        assert!(!app.navbar.on_light(), "hero carries no tone label");

        // Put the first (light) section under the probe row
        let story = app.layout.span(ElementKind::Section(0)).unwrap().top;
        app.scroll_by(story as i32 - 6);
        assert!(app.navbar.on_light());

        app.jump_to_top();
        assert!(!app.navbar.on_light());
    }

    #[test]
    fn test_sections_reveal_while_scrolling() {
        let mut app = app();
        assert!(!app.reveals.is_visible(0), "below the fold at start");
        app.jump_to_bottom();
        assert!(app.reveals.is_visible(app.page.sections.len() - 1));
        // One-shot: scrolling back up keeps everything revealed
        app.jump_to_top();
        assert!(app.reveals.is_visible(0));
    }

    #[test]
    fn test_reveal_state_survives_resize() {
        let mut app = app();
        app.jump_to_bottom();
        assert!(app.reveals.is_visible(0));
        app.jump_to_top();
        app.resize(100, 30);
        assert!(app.reveals.is_visible(0));
    }

    #[test]
    fn test_activate_link_closes_menu_and_scrolls() {
        let mut app = app();
        app.menu.open();
        app.activate_link(1);
        assert!(!app.menu.is_open());
        let expected = app.layout.span(ElementKind::Section(1)).unwrap().top - TOPBAR_HEIGHT;
        assert_eq!(app.scroll, expected);

        // Past the last section: footer
        app.activate_link(99);
        assert_eq!(app.scroll, app.max_scroll());
    }

    #[test]
    fn test_carousel_rel_maps_rows() {
        let mut app = app();
        app.jump_to_bottom();
        let span = *app.layout.span(ElementKind::Carousel).unwrap();
        let top = span.top - app.scroll;
        assert_eq!(app.carousel_rel(10, top), Some((10.0, 0.0)));
        assert_eq!(app.carousel_rel(10, top + span.height), None);
    }

    #[test]
    fn test_parallax_retargets_on_scroll() {
        let mut app = app();
        app.scroll_by(app.max_scroll() as i32);
        for _ in 0..100 {
            app.on_tick();
        }
        assert!(app.parallax.bg_transform().translate_y < 0.0);
    }

    #[test]
    fn test_reduced_motion_app_never_moves_text_layer() {
        let mut config = AppConfig::default();
        config.ui.reduced_motion = true;
        let theme = load_theme(&config.theme);
        let mut app = App::new(config, theme, Page::showcase());
        app.resize(80, 24);
        app.jump_to_bottom();
        for _ in 0..100 {
            app.on_tick();
        }
        assert_eq!(
            app.parallax.text_transform(),
            vitrine_core::Transform::NEUTRAL
        );
    }
}
