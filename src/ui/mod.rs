//! UI rendering for the Pals client
//!
//! Draws whatever the app has on screen:
//! - A loading placeholder while a view fetches its data
//! - A page: sections, inline buttons, page buttons and (in a chat) the composer
//! - The full-screen error page
//!
//! The host's modal, if any, is drawn last over everything else.

mod error;
mod helpers;
mod modal;
mod page;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BADGE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_RECEIVED, COLOR_SELECTED, COLOR_SENT,
};

pub use helpers::{centered_rect, wrap_to_width};

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::views::{ErrorPage, Screen};
use error::render_error_page;
use helpers::spinner;
use modal::render_modal;
use page::render_page;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match &app.screen {
        Screen::Loading { title } => render_loading(frame, area, title, app.tick_count),
        Screen::Page(page) => {
            let busy = app.busy.then_some(app.tick_count);
            render_page(frame, area, page, app.selected, busy);
        }
        Screen::Error(error) => render_error_page(frame, area, error, app.selected),
    }

    if let Some(modal) = app.host().modal() {
        render_modal(frame, modal);
    }
}

/// Render the last-resort diagnostic page shown when a session crashed.
pub fn render_diagnostic(frame: &mut Frame, page: &ErrorPage, selected: usize) {
    render_error_page(frame, frame.area(), page, selected);
}

fn render_loading(frame: &mut Frame, area: Rect, title: &str, tick: u64) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line_area = centered_rect(inner.width, 1, inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} Loading...", spinner(tick)),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
        line_area,
    );
}
