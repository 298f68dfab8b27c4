//! Color theme constants for the Pals UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Page titles and section headings
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row or button
pub const COLOR_SELECTED: Color = Color::LightCyan;

/// Unread counters
pub const COLOR_BADGE: Color = Color::LightGreen;

// ============================================================================
// Chat Colors
// ============================================================================

/// Messages written by the session user
pub const COLOR_SENT: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Messages from the partner
pub const COLOR_RECEIVED: Color = Color::Gray;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for alerts and prompts
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Error page accents
pub const COLOR_ERROR: Color = Color::Red;
