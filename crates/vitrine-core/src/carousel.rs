//! Carousel controller
//!
//! Presents one of N slides at a time with looping navigation, synchronized
//! position dots, directional hover zones, and swipe gesture recognition.
//! Pure state machine: the presentation layer feeds it pointer/touch
//! coordinates and reads back the track offset, dot states and hover hints.

/// Which half of the carousel the pointer is hovering over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverSide {
    Left,
    Right,
    None,
}

/// Transient pointer-hover state, recomputed on every pointer move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub is_hovering: bool,
    pub side: HoverSide,
    /// Cursor-following position hint for the presentation layer
    pub cursor_x: f64,
    pub cursor_y: f64,
}

impl HoverState {
    fn cleared() -> Self {
        Self {
            is_hovering: false,
            side: HoverSide::None,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

/// Offset added to the raw pointer position for the cursor hint, so the
/// indicator trails just below and to the right of the pointer.
const CURSOR_HINT_OFFSET: f64 = 14.0;

/// Slide index state machine over a fixed, ordered slide deck
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    hover: HoverState,
    swipe_origin: Option<f64>,
    swipe_threshold: f64,
}

impl Carousel {
    /// Create a controller over `len` slides. A zero-slide carousel is inert:
    /// every operation is a no-op and no dot is ever active.
    pub fn new(len: usize, swipe_threshold: f64) -> Self {
        Self {
            len,
            index: 0,
            hover: HoverState::cleared(),
            swipe_origin: None,
            swipe_threshold,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Navigate to slide `i`, wrapping single-step over/underflow: below zero
    /// lands on the last slide, past the end lands on the first. This is a
    /// clamp-once wrap, not a modulo; out-of-range jumps of more than one
    /// step land on an edge, matching the original single-step behavior.
    pub fn navigate_to(&mut self, i: isize) {
        if self.len == 0 {
            return;
        }
        self.index = if i < 0 {
            self.len - 1
        } else if i as usize >= self.len {
            0
        } else {
            i as usize
        };
    }

    pub fn next(&mut self) {
        self.navigate_to(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.navigate_to(self.index as isize - 1);
    }

    /// Horizontal translation of the slide track, in percent of track width.
    /// The sliding transition itself is the presentation layer's concern.
    pub fn track_offset(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    /// One bool per slide; exactly one is true (the current slide) unless the
    /// carousel is empty.
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.index).collect()
    }

    /// Pointer moved to `(x, y)` in root-relative coordinates
    pub fn pointer_move(&mut self, x: f64, y: f64, width: f64) {
        if self.len == 0 {
            return;
        }
        self.hover = HoverState {
            is_hovering: true,
            side: if x < width / 2.0 {
                HoverSide::Left
            } else {
                HoverSide::Right
            },
            cursor_x: x + CURSOR_HINT_OFFSET,
            cursor_y: y + CURSOR_HINT_OFFSET,
        };
    }

    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::cleared();
    }

    /// Record the origin of an in-flight swipe. A second start before a
    /// matching end silently overwrites the first (single-pointer
    /// assumption).
    pub fn touch_start(&mut self, x: f64) {
        if self.len == 0 {
            return;
        }
        self.swipe_origin = Some(x);
    }

    /// Resolve a swipe. The pending origin is consumed regardless of
    /// outcome; displacement below the threshold is a tap, not a swipe.
    pub fn touch_end(&mut self, x: f64) {
        let Some(origin) = self.swipe_origin.take() else {
            return;
        };
        let dx = x - origin;
        if dx.abs() < self.swipe_threshold {
            return;
        }
        if dx < 0.0 {
            self.next();
        } else {
            self.prev();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(4, 35.0)
    }

    #[test]
    fn test_navigate_wraps_single_step() {
        let mut c = carousel();
        assert_eq!(c.index(), 0);

        c.prev();
        assert_eq!(c.index(), 3, "underflow wraps to last slide");

        c.next();
        assert_eq!(c.index(), 0, "overflow wraps to first slide");
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut c = carousel();
        for i in -3..10 {
            c.navigate_to(i);
            assert!(c.index() < c.len());
        }
    }

    #[test]
    fn test_multi_step_jump_lands_on_edge() {
        // Clamp-once semantics: a far out-of-range jump is not modulo-wrapped
        let mut c = carousel();
        c.navigate_to(99);
        assert_eq!(c.index(), 0);
        c.navigate_to(-99);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_exactly_one_active_dot() {
        let mut c = carousel();
        for i in 0..8 {
            c.navigate_to(i);
            let dots = c.dot_states();
            assert_eq!(dots.iter().filter(|&&d| d).count(), 1);
            assert!(dots[c.index()]);
        }
    }

    #[test]
    fn test_track_offset_tracks_index() {
        let mut c = carousel();
        c.navigate_to(2);
        assert!((c.track_offset() - -200.0).abs() < 0.001);
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut c = carousel();
        c.touch_start(100.0);
        c.touch_end(60.0); // dx = -40
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_swipe_right_steps_back() {
        let mut c = carousel();
        c.touch_start(100.0);
        c.touch_end(140.0); // dx = +40
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_short_drag_is_a_tap() {
        let mut c = carousel();
        c.touch_start(100.0);
        c.touch_end(120.0); // dx = +20, below the 35 threshold
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_touch_end_without_origin_is_noop() {
        let mut c = carousel();
        c.touch_end(500.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_origin_consumed_even_on_tap() {
        let mut c = carousel();
        c.touch_start(100.0);
        c.touch_end(110.0);
        // A later end with no new start must not navigate
        c.touch_end(0.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_second_touch_start_overwrites_first() {
        let mut c = carousel();
        c.touch_start(0.0);
        c.touch_start(100.0);
        c.touch_end(110.0); // dx from the second origin: tap
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_hover_sides_and_cursor_hint() {
        let mut c = carousel();
        c.pointer_move(10.0, 5.0, 100.0);
        let h = c.hover();
        assert!(h.is_hovering);
        assert_eq!(h.side, HoverSide::Left);
        assert!((h.cursor_x - 24.0).abs() < 0.001);
        assert!((h.cursor_y - 19.0).abs() < 0.001);

        c.pointer_move(50.0, 5.0, 100.0);
        assert_eq!(c.hover().side, HoverSide::Right, "midline counts as right");

        c.pointer_leave();
        let h = c.hover();
        assert!(!h.is_hovering);
        assert_eq!(h.side, HoverSide::None);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0, 35.0);
        c.next();
        c.prev();
        c.navigate_to(5);
        c.touch_start(0.0);
        c.touch_end(100.0);
        c.pointer_move(1.0, 1.0, 10.0);
        assert_eq!(c.index(), 0);
        assert!(c.dot_states().is_empty());
        assert!(!c.hover().is_hovering);
    }
}
