//! Scroll-triggered reveal tracker
//!
//! Each tracked element becomes permanently visible the first time at least
//! 12% of it enters the viewport. Visibility is add-only, so already-revealed
//! entries are skipped on later passes.

/// Fraction of an element that must intersect the viewport to reveal it
const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Debug, Clone)]
struct Entry {
    top: f64,
    height: f64,
    visible: bool,
}

/// One-shot visibility tracker over fixed element bounds
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    entries: Vec<Entry>,
}

impl RevealTracker {
    /// Track elements given as `(top, height)` in content coordinates
    pub fn new(bounds: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            entries: bounds
                .into_iter()
                .map(|(top, height)| Entry {
                    top,
                    height,
                    visible: false,
                })
                .collect(),
        }
    }

    /// Re-evaluate against the viewport `[scroll_top, scroll_top + height)`
    pub fn update(&mut self, scroll_top: f64, viewport_height: f64) {
        let view_bottom = scroll_top + viewport_height;
        for entry in self.entries.iter_mut().filter(|e| !e.visible) {
            if entry.height <= 0.0 {
                continue;
            }
            let overlap =
                (entry.top + entry.height).min(view_bottom) - entry.top.max(scroll_top);
            if overlap / entry.height >= REVEAL_THRESHOLD {
                entry.visible = true;
            }
        }
    }

    /// Force an entry visible. Used when an element had already revealed
    /// before a reflow rebuilt the tracker with new bounds; visibility is
    /// add-only for the page lifetime.
    pub fn mark_visible(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.visible = true;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.visible)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        // Element of height 100 at top 190; viewport [0, 200) overlaps 10 (10%)
        let mut tracker = RevealTracker::new([(190.0, 100.0)]);
        tracker.update(0.0, 200.0);
        assert!(!tracker.is_visible(0));

        // Scroll down 3: overlap 13 (13%) crosses the 12% threshold
        tracker.update(3.0, 200.0);
        assert!(tracker.is_visible(0));
    }

    #[test]
    fn test_visibility_sticks() {
        let mut tracker = RevealTracker::new([(0.0, 50.0)]);
        tracker.update(0.0, 100.0);
        assert!(tracker.is_visible(0));

        // Scrolling the element back out of view must not hide it again
        tracker.update(500.0, 100.0);
        assert!(tracker.is_visible(0));
    }

    #[test]
    fn test_offscreen_stays_hidden() {
        let mut tracker = RevealTracker::new([(1000.0, 80.0)]);
        tracker.update(0.0, 100.0);
        assert!(!tracker.is_visible(0));
    }

    #[test]
    fn test_mark_visible_survives_rebuild() {
        let mut old = RevealTracker::new([(0.0, 40.0)]);
        old.update(0.0, 100.0);

        let mut rebuilt = RevealTracker::new([(900.0, 40.0)]);
        rebuilt.mark_visible(0);
        rebuilt.update(0.0, 100.0);
        assert!(rebuilt.is_visible(0));
    }

    #[test]
    fn test_independent_entries() {
        let mut tracker = RevealTracker::new([(0.0, 40.0), (400.0, 40.0)]);
        tracker.update(0.0, 100.0);
        assert!(tracker.is_visible(0));
        assert!(!tracker.is_visible(1));
    }
}
