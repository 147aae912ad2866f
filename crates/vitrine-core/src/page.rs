//! The fixed page model
//!
//! The page is a small, immutable document: a hero, a run of content
//! sections, a slide deck, and a footer. The interaction components attach
//! to it at startup; nothing here changes after construction except the
//! states those components own.

use chrono::Datelike;

use crate::navbar::NavTone;

/// A content section of the page
#[derive(Debug, Clone)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// Surface tone this section declares for nav text rendered over it
    pub tone: NavTone,
    /// Whether the section participates in scroll-triggered reveal
    pub reveal: bool,
    pub body: Vec<&'static str>,
}

/// One slide of the carousel deck
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
}

/// The complete page
#[derive(Debug, Clone)]
pub struct Page {
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub sections: Vec<Section>,
    pub slides: Vec<Slide>,
    pub links: Vec<&'static str>,
    /// Current calendar year, computed once at load for the footer
    pub year: i32,
}

impl Page {
    /// Built-in showcase content
    pub fn showcase() -> Self {
        Self {
            hero_title: "V I T R I N E",
            hero_tagline: "A cinematic landing page, in your terminal",
            sections: vec![
                Section {
                    id: "story",
                    title: "The Story",
                    tone: NavTone::Light,
                    reveal: true,
                    body: vec![
                        "Every frame of this page is drawn by hand, cell by cell.",
                        "Scroll and the backdrop drifts away while the headline",
                        "leans in, the same depth trick the big screens use.",
                    ],
                },
                Section {
                    id: "craft",
                    title: "The Craft",
                    tone: NavTone::Dark,
                    reveal: true,
                    body: vec![
                        "No network, no cache, no build step. One binary,",
                        "one config file, and a page that answers every",
                        "keystroke before the next frame lands.",
                    ],
                },
                Section {
                    id: "gallery",
                    title: "The Gallery",
                    tone: NavTone::Dark,
                    reveal: true,
                    body: vec![
                        "Swipe through the collection below, or let the",
                        "hover zones carry you left and right.",
                    ],
                },
            ],
            slides: vec![
                Slide {
                    title: "Dusk over the bay",
                    caption: "01 · shot on a tripod of semicolons",
                },
                Slide {
                    title: "Neon arcade",
                    caption: "02 · sixteen colors were enough",
                },
                Slide {
                    title: "Paper lanterns",
                    caption: "03 · lit entirely by escape codes",
                },
                Slide {
                    title: "The long road home",
                    caption: "04 · renders at any width",
                },
            ],
            links: vec!["Story", "Craft", "Gallery", "Contact"],
            year: chrono::Local::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_shape() {
        let page = Page::showcase();
        assert!(!page.sections.is_empty());
        assert_eq!(page.slides.len(), 4);
        assert!(page.year >= 2024);
    }

    #[test]
    fn test_first_section_declares_light_surface() {
        // The tone switcher needs at least one of each tone to be observable
        let page = Page::showcase();
        assert_eq!(page.sections[0].tone, NavTone::Light);
        assert!(page.sections.iter().any(|s| s.tone == NavTone::Dark));
    }
}
