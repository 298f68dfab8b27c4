//! Page rendering: sections, inline buttons, page buttons and the composer.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{spinner, wrap_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BADGE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_RECEIVED,
    COLOR_SELECTED, COLOR_SENT,
};
use crate::views::{Binding, ChatLine, Composer, Content, Direction, Entry, Page};

/// Lines of a page body plus the line holding the selected target.
struct Body {
    lines: Vec<Line<'static>>,
    selected_line: Option<usize>,
}

pub fn render_page(frame: &mut Frame, area: Rect, page: &Page, selected: usize, busy: Option<u64>) {
    let mut title = format!(" {} ", page.title);
    if let Some(tick) = busy {
        title = format!(" {} {} ", page.title, spinner(tick));
    }
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER).bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry_targets = page.targets().len() - page.actions.len();
    let action_height = if page.actions.is_empty() { 0 } else { 3 };
    let composer_height = if page.composer.is_some() { 3 } else { 0 };
    let [body_area, composer_area, actions_area, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(composer_height),
        Constraint::Length(action_height),
        Constraint::Length(1),
    ])
    .areas(inner);

    let body = build_body(page, selected, body_area.width as usize);
    let height = body_area.height as usize;
    let scroll = if page.composer.is_some() {
        // Conversations stick to the newest message.
        body.lines.len().saturating_sub(height)
    } else {
        match body.selected_line {
            Some(line) if line >= height => line + 1 - height,
            _ => 0,
        }
    };
    frame.render_widget(
        Paragraph::new(body.lines).scroll((scroll as u16, 0)),
        body_area,
    );

    if let Some(composer) = &page.composer {
        render_composer(frame, composer_area, composer);
    }
    if !page.actions.is_empty() {
        let selected_action = selected.checked_sub(entry_targets);
        render_buttons(frame, actions_area, &page.actions, selected_action);
    }

    let hint = if page.composer.is_some() {
        "type to write · Enter send · ↑↓ select · Esc back"
    } else {
        "↑↓ select · Enter open · Esc back · q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        hint_area,
    );
}

fn build_body(page: &Page, selected: usize, width: usize) -> Body {
    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut target = 0;

    for (i, section) in page.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        if let Some(heading) = &section.heading {
            lines.push(Line::from(Span::styled(
                heading.clone(),
                Style::default().fg(COLOR_HEADER).bold(),
            )));
        }
        match &section.content {
            Content::Text(text) => {
                for paragraph in text {
                    for line in wrap_to_width(paragraph, width) {
                        lines.push(Line::from(line));
                    }
                }
            }
            Content::Empty(placeholder) => {
                lines.push(Line::from(Span::styled(
                    placeholder.clone(),
                    Style::default().fg(COLOR_DIM).italic(),
                )));
            }
            Content::Entries(entries) => {
                for entry in entries {
                    let first = target;
                    target += entry_target_count(entry);
                    if (first..target).contains(&selected) {
                        selected_line = Some(lines.len());
                    }
                    push_entry(&mut lines, entry, first, selected);
                }
            }
            Content::Messages(messages) => {
                for message in messages {
                    push_message(&mut lines, message, width);
                }
            }
        }
    }

    Body {
        lines,
        selected_line,
    }
}

fn entry_target_count(entry: &Entry) -> usize {
    entry.actions.len() + usize::from(entry.open.is_some())
}

fn push_entry(lines: &mut Vec<Line<'static>>, entry: &Entry, first: usize, selected: usize) {
    let mut target = first;
    let mut spans = Vec::new();

    let title_selected = entry.open.is_some() && selected == target;
    if entry.open.is_some() {
        target += 1;
    }
    let (marker, title_style) = if title_selected {
        ("▸ ", Style::default().fg(COLOR_SELECTED).bold())
    } else {
        ("  ", Style::default().fg(COLOR_ACCENT))
    };
    spans.push(Span::styled(marker, title_style));
    spans.push(Span::styled(entry.title.clone(), title_style));
    if let Some(badge) = &entry.badge {
        spans.push(Span::styled(
            format!(" ({})", badge),
            Style::default().fg(COLOR_BADGE).bold(),
        ));
    }
    for binding in &entry.actions {
        spans.push(Span::raw(" "));
        spans.push(button(&binding.label, selected == target));
        target += 1;
    }
    lines.push(Line::from(spans));

    if let Some(subtitle) = &entry.subtitle {
        lines.push(Line::from(Span::styled(
            format!("    {}", subtitle),
            Style::default().fg(COLOR_DIM),
        )));
    }
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &ChatLine, width: usize) {
    let (color, alignment) = match message.direction {
        Direction::Sent => (COLOR_SENT, Alignment::Right),
        Direction::Received => (COLOR_RECEIVED, Alignment::Left),
    };
    let bubble_width = (width * 3 / 4).max(1);
    for text in wrap_to_width(&message.text, bubble_width) {
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))).alignment(alignment));
    }

    let mut meta = Vec::new();
    if let Some(timestamp) = &message.timestamp {
        meta.push(timestamp.clone());
    }
    if !message.reactions.is_empty() {
        meta.push(message.reactions.join(" "));
    }
    if !meta.is_empty() {
        lines.push(
            Line::from(Span::styled(meta.join("  "), Style::default().fg(COLOR_DIM)))
                .alignment(alignment),
        );
    }
}

fn render_composer(frame: &mut Frame, area: Rect, composer: &Composer) {
    let (title, text) = if composer.disabled {
        (" Sending… ", String::new())
    } else {
        (" Message ", format!("{}█", composer.draft))
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_buttons(frame: &mut Frame, area: Rect, buttons: &[Binding], selected: Option<usize>) {
    let mut spans = Vec::new();
    for (i, binding) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(button(&binding.label, selected == Some(i)));
    }
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub(super) fn button(label: &str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(Color::Black).bg(COLOR_SELECTED).bold(),
        )
    } else {
        Span::styled(format!("[{}]", label), Style::default().fg(COLOR_ACCENT))
    }
}
