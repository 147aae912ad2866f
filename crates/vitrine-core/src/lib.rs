pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod navbar;
pub mod overlay;
pub mod page;
pub mod parallax;
pub mod reveal;

pub use carousel::{Carousel, HoverSide, HoverState};
pub use config::{
    AppConfig, CarouselConfig, KeymapConfig, MotionConfig, ThemeColorOverrides, ThemeConfig,
};
pub use error::{Error, Result};
pub use geometry::{Point, RectF};
pub use navbar::{NavBar, NavTone, Region};
pub use overlay::MenuOverlay;
pub use page::{Page, Section, Slide};
pub use parallax::{ParallaxAnimator, Transform};
pub use reveal::RevealTracker;
