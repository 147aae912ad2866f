//! Nav bar tone sampling
//!
//! The bar stays transparent; its text tone flips only when the region
//! directly beneath it declares a light surface. Abstractly: given labeled
//! regions in stacking order and a probe point, find the topmost region
//! containing the point. Pure over region bounds, independent of any live
//! rendering tree.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, RectF};

/// Surface tone a region declares for nav text rendered over it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTone {
    /// Light surface: nav text must switch to its dark variant
    Light,
    /// Dark surface: nav text keeps the default light variant
    Dark,
}

/// A labeled region of the page (section or footer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub bounds: RectF,
    pub tone: NavTone,
}

/// Topmost region containing the probe point. Regions are given in stacking
/// order (topmost first), so the first hit wins.
pub fn region_at(regions: &[Region], probe: Point) -> Option<&Region> {
    regions.iter().find(|r| r.bounds.contains(probe))
}

/// Probe point used by the sampler: a fixed inset from the left edge, just
/// below the bar, clamped inside the viewport.
pub fn probe_point(viewport_height: f64, nav_height: f64) -> Point {
    Point::new(24.0, (viewport_height - 1.0).min(nav_height + 8.0))
}

/// Two-state nav bar tone, driven by sampling
#[derive(Debug, Clone, Copy, Default)]
pub struct NavBar {
    on_light: bool,
}

impl NavBar {
    /// True when the bar should render its dark-text ("on-light") variant
    #[inline]
    pub fn on_light(&self) -> bool {
        self.on_light
    }

    /// Re-sample against the current region layout. An unmatched probe falls
    /// back to the default tone.
    pub fn sample(&mut self, regions: &[Region], probe: Point) {
        self.on_light = matches!(
            region_at(regions, probe),
            Some(Region {
                tone: NavTone::Light,
                ..
            })
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(top: f64, height: f64, tone: NavTone) -> Region {
        Region {
            bounds: RectF::new(0.0, top, 200.0, height),
            tone,
        }
    }

    #[test]
    fn test_topmost_region_wins() {
        let regions = [
            region(0.0, 100.0, NavTone::Light),
            region(0.0, 400.0, NavTone::Dark),
        ];
        let hit = region_at(&regions, Point::new(24.0, 50.0)).unwrap();
        assert_eq!(hit.tone, NavTone::Light);
    }

    #[test]
    fn test_no_region_under_probe() {
        let regions = [region(100.0, 50.0, NavTone::Light)];
        assert!(region_at(&regions, Point::new(24.0, 10.0)).is_none());
    }

    #[test]
    fn test_sample_flips_tone_both_ways() {
        let mut bar = NavBar::default();
        let probe = Point::new(24.0, 10.0);

        bar.sample(&[region(0.0, 100.0, NavTone::Light)], probe);
        assert!(bar.on_light());

        bar.sample(&[region(0.0, 100.0, NavTone::Dark)], probe);
        assert!(!bar.on_light());

        // Unmatched probe falls back to the default tone
        bar.sample(&[], probe);
        assert!(!bar.on_light());
    }

    #[test]
    fn test_probe_point_clamps_to_viewport() {
        let p = probe_point(100.0, 20.0);
        assert_eq!(p.y, 28.0);

        // Nav taller than the viewport allows: probe stays inside
        let p = probe_point(20.0, 40.0);
        assert_eq!(p.y, 19.0);
    }
}
