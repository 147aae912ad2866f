use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct MenuWidget;

impl MenuWidget {
    /// Full-screen navigation overlay. Rendered above everything else while
    /// open; the page underneath stays scroll-locked.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if !app.menu.is_open() {
            return;
        }
        let theme = &app.theme;

        frame.render_widget(Clear, area);

        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        lines.push(Line::from(vec![
            Span::styled(
                " VITRINE",
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat((area.width as usize).saturating_sub(22))),
            Span::styled("esc to close ", Style::default().fg(theme.fg_muted)),
        ]));

        let top_gap = (area.height as usize)
            .saturating_sub(app.page.links.len() * 2 + 1)
            / 2;
        for _ in 0..top_gap.saturating_sub(1) {
            lines.push(Line::default());
        }

        for (i, link) in app.page.links.iter().enumerate() {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("{}  ", i + 1),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(
                        *link,
                        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                    ),
                ])
                .alignment(Alignment::Center),
            );
            lines.push(Line::default());
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.hero_deep));
        frame.render_widget(paragraph, area);
    }
}
