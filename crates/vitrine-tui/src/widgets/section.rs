use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use vitrine_core::NavTone;

use crate::app::App;

pub struct SectionWidget;

impl SectionWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, index: usize) {
        let Some(section) = app.page.sections.get(index) else {
            return;
        };
        let theme = &app.theme;

        let (bg, fg, muted) = match section.tone {
            NavTone::Light => (theme.surface, theme.ink, theme.ink_muted),
            NavTone::Dark => (theme.bg, theme.fg, theme.fg_muted),
        };

        // Not yet revealed: hold the surface color with no content until the
        // element has scrolled far enough into view
        if !app.reveals.is_visible(index) {
            frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("· ", Style::default().fg(theme.accent)),
            Span::styled(
                section.title,
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());
        for body_line in &section.body {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(*body_line, Style::default().fg(muted)),
            ]));
        }

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(clip_top as usize)
            .take(area.height as usize)
            .collect();
        let paragraph = Paragraph::new(visible)
            .style(Style::default().bg(bg))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
