//! Smoothed hero parallax animator
//!
//! Two layers (backdrop and headline text) lag behind a target derived from
//! scroll progress through the hero. Targets are recomputed on scroll/resize;
//! the eased positions advance once per animation tick. Splitting the two
//! keeps geometry out of the per-frame path while the trajectory stays smooth
//! rather than stepped.
//!
//! The animator has an explicit start/stop contract so hosts (and tests) can
//! drive ticks manually instead of relying on a real display clock.

use crate::config::MotionConfig;
use crate::geometry::{clamp, lerp, RectF};

/// A per-layer visual transform: vertical translation plus uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    /// The identity transform (no movement, no scaling)
    pub const NEUTRAL: Transform = Transform {
        translate_y: 0.0,
        scale: 1.0,
    };
}

/// Scroll progress through the hero: 0 while the hero's top is still below
/// the viewport, 1 once the hero has fully scrolled past.
#[inline]
pub fn scroll_progress(hero: RectF, viewport_height: f64) -> f64 {
    clamp(
        (viewport_height - hero.top) / (viewport_height + hero.height),
        0.0,
        1.0,
    )
}

/// Eased two-layer parallax state
#[derive(Debug, Clone)]
pub struct ParallaxAnimator {
    current_bg: f64,
    current_text: f64,
    target_bg: f64,
    target_text: f64,
    config: MotionConfig,
    /// False when reduced motion was requested or the hero never resolved.
    /// A stopped animator holds both layers at the neutral transform.
    running: bool,
}

impl ParallaxAnimator {
    /// Create an animator. With `reduced_motion` set it never starts: users
    /// who opt out of motion must see zero animated movement, ever.
    pub fn new(config: MotionConfig, reduced_motion: bool) -> Self {
        Self {
            current_bg: 0.0,
            current_text: 0.0,
            target_bg: 0.0,
            target_text: 0.0,
            config,
            running: !reduced_motion,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop and snap both layers back to neutral
    pub fn stop(&mut self) {
        self.running = false;
        self.current_bg = 0.0;
        self.current_text = 0.0;
        self.target_bg = 0.0;
        self.target_text = 0.0;
    }

    /// Recompute targets from the hero's position in the viewport.
    /// Invoked on scroll and resize, not per frame.
    pub fn retarget(&mut self, hero: RectF, viewport_height: f64) {
        if !self.running {
            return;
        }
        let progress = scroll_progress(hero, viewport_height);
        self.target_bg = -progress * self.config.bg_drift;
        self.target_text = progress * self.config.text_drift;
    }

    /// Advance both layers one easing step toward their targets.
    /// With an easing fraction in (0, 1) the step is monotonic and bounded
    /// between current and target, so it can never overshoot.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.current_bg = lerp(self.current_bg, self.target_bg, self.config.ease);
        self.current_text = lerp(self.current_text, self.target_text, self.config.ease);
    }

    /// Transform for the backdrop layer (drifts up, slightly scaled)
    pub fn bg_transform(&self) -> Transform {
        if !self.running {
            return Transform::NEUTRAL;
        }
        Transform {
            translate_y: self.current_bg,
            scale: self.config.bg_scale,
        }
    }

    /// Transform for the text layer (drifts down, unscaled)
    pub fn text_transform(&self) -> Transform {
        if !self.running {
            return Transform::NEUTRAL;
        }
        Transform {
            translate_y: self.current_text,
            scale: 1.0,
        }
    }

    #[cfg(test)]
    fn targets(&self) -> (f64, f64) {
        (self.target_bg, self.target_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_at(top: f64) -> RectF {
        RectF::new(0.0, top, 120.0, 40.0)
    }

    fn animator() -> ParallaxAnimator {
        ParallaxAnimator::new(MotionConfig::default(), false)
    }

    #[test]
    fn test_progress_endpoints() {
        // Hero top at the bottom edge of a 100-unit viewport: not yet visible
        assert!((scroll_progress(hero_at(100.0), 100.0) - 0.0).abs() < 0.001);
        // Hero fully scrolled past: top == -height
        assert!((scroll_progress(hero_at(-40.0), 100.0) - 1.0).abs() < 0.001);
        // Beyond either end stays clamped
        assert_eq!(scroll_progress(hero_at(250.0), 100.0), 0.0);
        assert_eq!(scroll_progress(hero_at(-500.0), 100.0), 1.0);
    }

    #[test]
    fn test_targets_at_progress_extremes() {
        let mut anim = animator();
        anim.retarget(hero_at(100.0), 100.0);
        assert_eq!(anim.targets(), (0.0, 0.0));

        anim.retarget(hero_at(-40.0), 100.0);
        let (bg, text) = anim.targets();
        assert!((bg - -18.0).abs() < 0.001);
        assert!((text - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_ticks_converge_monotonically_without_overshoot() {
        let mut anim = animator();
        anim.retarget(hero_at(-40.0), 100.0);

        let mut prev_gap = (anim.bg_transform().translate_y - -18.0).abs();
        for _ in 0..200 {
            anim.tick();
            let pos = anim.bg_transform().translate_y;
            let gap = (pos - -18.0).abs();
            assert!(gap <= prev_gap, "distance to target must not grow");
            assert!(pos >= -18.0, "must not overshoot past target");
            prev_gap = gap;
        }
        assert!(prev_gap < 0.01, "should be within negligibility of target");
    }

    #[test]
    fn test_text_layer_follows_opposing_direction() {
        let mut anim = animator();
        anim.retarget(hero_at(-40.0), 100.0);
        for _ in 0..50 {
            anim.tick();
        }
        assert!(anim.bg_transform().translate_y < 0.0);
        assert!(anim.text_transform().translate_y > 0.0);
        assert!((anim.bg_transform().scale - 1.06).abs() < 0.001);
        assert!((anim.text_transform().scale - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_reduced_motion_stays_neutral_forever() {
        let mut anim = ParallaxAnimator::new(MotionConfig::default(), true);
        assert!(!anim.is_running());

        // Scroll events and ticks must leave the transforms untouched
        anim.retarget(hero_at(-40.0), 100.0);
        for _ in 0..100 {
            anim.tick();
        }
        assert_eq!(anim.text_transform(), Transform::NEUTRAL);
        assert_eq!(anim.bg_transform(), Transform::NEUTRAL);
    }

    #[test]
    fn test_stop_resets_to_neutral() {
        let mut anim = animator();
        anim.retarget(hero_at(-40.0), 100.0);
        anim.tick();
        anim.stop();
        assert_eq!(anim.bg_transform(), Transform::NEUTRAL);
        anim.tick();
        assert_eq!(anim.text_transform(), Transform::NEUTRAL);
    }
}
