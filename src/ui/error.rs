//! Full-screen error page, shared by failed API requests and the
//! diagnostic shell.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::page::button;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::views::ErrorPage;

pub fn render_error_page(frame: &mut Frame, area: Rect, error: &ErrorPage, selected: usize) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", error.title),
            Style::default().fg(COLOR_ERROR).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_ERROR));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        error.message.clone(),
        Style::default().fg(COLOR_HEADER).bold(),
    ))];
    if let Some(hint) = &error.hint {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if let Some(detail) = &error.detail {
        lines.push(Line::default());
        for line in detail.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    let [text_area, buttons_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        text_area,
    );

    let mut spans = Vec::new();
    for (i, binding) in error.targets().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(button(&binding.label, i == selected));
    }
    spans.push(Span::styled("  r reload · q quit", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), buttons_area);
}
