pub mod carousel;
mod footer;
mod hero;
mod menu;
mod section;
mod topbar;

pub use carousel::CarouselWidget;
pub use footer::FooterWidget;
pub use hero::HeroWidget;
pub use menu::MenuWidget;
pub use section::SectionWidget;
pub use topbar::TopbarWidget;
