use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Logical pixels of layer translation per terminal row
const PX_PER_ROW: f64 = 2.0;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App) {
        let theme = &app.theme;
        let span_height = (clip_top + area.height) as i64;

        let bg_t = app.parallax.bg_transform();
        let text_t = app.parallax.text_transform();
        let bg_shift = (bg_t.translate_y / PX_PER_ROW).round() as i64;
        let text_shift = (text_t.translate_y / PX_PER_ROW).round() as i64;
        // The fixed scale inflates the backdrop pattern past both edges,
        // so the drift never exposes a blank margin
        let inflate = ((bg_t.scale - 1.0) * area.width as f64 / 2.0).round() as i64;

        let title_row = span_height / 2 - 2 + text_shift;
        let tagline_row = span_height / 2 + text_shift;
        let hint_row = span_height - 2;

        let mut lines: Vec<Line> = Vec::with_capacity(span_height as usize);
        for row in 0..span_height {
            let line = if row == title_row {
                Line::from(Span::styled(
                    app.page.hero_title,
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
            } else if row == tagline_row {
                Line::from(Span::styled(
                    app.page.hero_tagline,
                    Style::default().fg(theme.fg_muted),
                ))
                .alignment(Alignment::Center)
            } else if row == hint_row {
                Line::from(Span::styled(
                    "scroll ▾",
                    Style::default().fg(theme.fg_muted),
                ))
                .alignment(Alignment::Center)
            } else {
                Self::backdrop_line(app, area.width, row - bg_shift, inflate)
            };
            lines.push(line);
        }

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(clip_top as usize)
            .take(area.height as usize)
            .collect();
        let paragraph = Paragraph::new(visible).style(Style::default().bg(theme.bg));
        frame.render_widget(paragraph, area);
    }

    /// One row of the drifting backdrop: soft diagonal bands built from
    /// shade glyphs, phase-shifted by the layer translation
    fn backdrop_line(app: &App, width: u16, source_row: i64, inflate: i64) -> Line<'static> {
        let theme = &app.theme;
        let mut text = String::with_capacity(width as usize);
        for col in 0..width as i64 {
            let phase = (source_row * 3 + (col + inflate) / 4).rem_euclid(12);
            text.push(match phase {
                0 | 1 => '▓',
                2..=4 => '▒',
                5..=8 => '░',
                _ => ' ',
            });
        }
        Line::from(Span::styled(
            text,
            Style::default().fg(theme.hero_glow).bg(theme.hero_deep),
        ))
    }
}
