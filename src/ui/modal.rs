//! Host modal overlays: alerts and prompts drawn over the current screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};
use crate::host::{Modal, PromptKind};

const DIALOG_WIDTH: u16 = 56;

pub fn render_modal(frame: &mut Frame, modal: &Modal) {
    let (title, mut lines, hint) = match modal {
        Modal::Alert { message } => (
            "Notice".to_string(),
            message.lines().map(|l| Line::from(l.to_string())).collect::<Vec<_>>(),
            "[Enter] OK",
        ),
        Modal::Prompt { prompt, input } => {
            let mut lines = vec![Line::from(prompt.message.clone())];
            let hint = match prompt.kind {
                PromptKind::Text { .. } => {
                    lines.push(Line::default());
                    lines.push(Line::from(vec![
                        Span::styled("> ", Style::default().fg(COLOR_DIM)),
                        Span::styled(format!("{}█", input), Style::default().fg(COLOR_ACCENT)),
                    ]));
                    "[Enter] OK  [Esc] Cancel"
                }
                PromptKind::Confirm => "[y] Yes  [n] No",
            };
            (prompt.title.clone(), lines, hint)
        }
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))));

    let height = (lines.len() as u16 + 4).max(6);
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());

    // Clear the background behind the dialog
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .padding(ratatui::widgets::Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
