use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct FooterWidget;

impl FooterWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App) {
        let theme = &app.theme;

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("© {} Vitrine Studio · all rights reserved", app.page.year),
                Style::default().fg(theme.ink_muted),
            ))
            .alignment(Alignment::Center),
            Line::default(),
        ];

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(clip_top as usize)
            .take(area.height as usize)
            .collect();
        let paragraph = Paragraph::new(visible).style(Style::default().bg(theme.surface));
        frame.render_widget(paragraph, area);
    }
}
