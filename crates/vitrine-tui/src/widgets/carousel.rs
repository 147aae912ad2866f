use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use vitrine_core::HoverSide;

use crate::app::App;

/// Row of the dot strip, counted from the bottom of the carousel block
const DOTS_ROW_FROM_BOTTOM: u16 = 2;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App) {
        let theme = &app.theme;
        let carousel = &app.carousel;
        let span_height = clip_top + area.height;

        let mut lines: Vec<Line> = Vec::with_capacity(span_height as usize);
        for row in 0..span_height {
            let line = if carousel.is_empty() {
                Line::default()
            } else if row == 1 {
                // Slide counter, top right
                Line::from(Span::styled(
                    format!("{:02} / {:02}  ", carousel.index() + 1, carousel.len()),
                    Style::default().fg(theme.fg_muted),
                ))
                .alignment(Alignment::Right)
            } else if row == 3 {
                Self::title_line(app, area.width)
            } else if row == 4 {
                let slide = &app.page.slides[carousel.index()];
                Line::from(Span::styled(
                    slide.caption,
                    Style::default().fg(theme.fg_muted),
                ))
                .alignment(Alignment::Center)
            } else if row + DOTS_ROW_FROM_BOTTOM == span_height {
                Self::dots_line(app)
            } else {
                Line::default()
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

        Self::render_cursor_hint(frame, area, clip_top, app);
    }

    /// Slide title with the directional affordances at the edges; the hovered
    /// side lights up.
    fn title_line(app: &App, width: u16) -> Line<'static> {
        let theme = &app.theme;
        let carousel = &app.carousel;
        let slide = &app.page.slides[carousel.index()];
        let hover = carousel.hover();

        let zone = |glyph: &'static str, side: HoverSide| {
            let style = if hover.is_hovering && hover.side == side {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            Span::styled(glyph, style)
        };

        let title = Span::styled(
            slide.title,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        );
        let pad = (width as usize)
            .saturating_sub(slide.title.chars().count() + 6)
            / 2;
        Line::from(vec![
            Span::raw("  "),
            zone("‹", HoverSide::Left),
            Span::raw(" ".repeat(pad)),
            title,
            Span::raw(" ".repeat(pad)),
            zone("›", HoverSide::Right),
        ])
    }

    fn dots_line(app: &App) -> Line<'static> {
        let theme = &app.theme;
        let mut spans = Vec::new();
        for (i, active) in app.carousel.dot_states().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(if active {
                Span::styled("●", Style::default().fg(theme.dot_active))
            } else {
                Span::styled("○", Style::default().fg(theme.dot_inactive))
            });
        }
        Line::from(spans).alignment(Alignment::Center)
    }

    /// The cursor-following bubble, clamped inside the visible block
    fn render_cursor_hint(frame: &mut Frame, area: Rect, clip_top: u16, app: &App) {
        let hover = app.carousel.hover();
        if !hover.is_hovering || area.width < 2 || area.height == 0 {
            return;
        }
        let glyph = match hover.side {
            HoverSide::Left => "‹",
            HoverSide::Right => "›",
            HoverSide::None => return,
        };
        let col = (hover.cursor_x as u16).min(area.width - 1);
        let row = hover.cursor_y as i64 - clip_top as i64;
        let row = row.clamp(0, area.height as i64 - 1) as u16;

        let bubble = Rect::new(area.x + col, area.y + row, 1, 1);
        let style = Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(glyph).style(style), bubble);
    }
}

/// Which dot sits at column `x` of a `width`-wide centered dot strip, if any.
/// Dots are single cells separated by single spaces.
pub fn dot_hit(len: usize, width: u16, x: u16) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let strip = (len * 2 - 1) as u16;
    let start = width.saturating_sub(strip) / 2;
    if x < start || x >= start + strip {
        return None;
    }
    let offset = x - start;
    if offset % 2 == 0 {
        Some((offset / 2) as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_hit_centered_strip() {
        // 4 dots in 80 cols: strip of 7 starting at col 36
        assert_eq!(dot_hit(4, 80, 36), Some(0));
        assert_eq!(dot_hit(4, 80, 38), Some(1));
        assert_eq!(dot_hit(4, 80, 42), Some(3));
        assert_eq!(dot_hit(4, 80, 37), None, "gap between dots");
        assert_eq!(dot_hit(4, 80, 35), None, "left of the strip");
        assert_eq!(dot_hit(4, 80, 43), None, "right of the strip");
    }

    #[test]
    fn test_dot_hit_empty() {
        assert_eq!(dot_hit(0, 80, 40), None);
    }
}
