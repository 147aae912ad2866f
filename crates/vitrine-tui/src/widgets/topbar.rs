use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct TopbarWidget;

impl TopbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        // Tone switches only when the region under the bar declares a light
        // surface; the bar itself stays a thin strip over the content
        let (fg, bg) = if app.navbar.on_light() {
            (theme.nav_fg_on_light, theme.surface)
        } else {
            (theme.nav_fg, theme.bg)
        };

        let brand = " VITRINE";
        let links = app.page.links.join("  ");
        let toggle = if app.menu.is_open() {
            "✕ CLOSE "
        } else {
            "≡ MENU "
        };

        let used = brand.width() + links.width() + toggle.width() + 3;
        let pad = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                brand,
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(links, Style::default().fg(fg)),
            Span::raw("   "),
            Span::styled(
                toggle,
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
    }
}
