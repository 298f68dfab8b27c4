//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for layout, width-aware wrapping, and the
//! loading spinner.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Spinner frames for loading animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick counter
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Split `text` into lines no wider than `width` terminal cells.
///
/// Breaks at the last space when one exists on the line, otherwise mid-word.
/// Existing newlines are kept.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for c in raw.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + w > width {
                if c == ' ' {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                    continue;
                }
                match current.rfind(' ') {
                    Some(space) if space > 0 => {
                        let rest = current[space + 1..].to_string();
                        current.truncate(space);
                        lines.push(std::mem::take(&mut current));
                        current_width = rest.chars().filter_map(UnicodeWidthChar::width).sum();
                        current = rest;
                    }
                    _ => {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                }
            }
            current.push(c);
            current_width += w;
        }
        lines.push(current);
    }
    lines
}
