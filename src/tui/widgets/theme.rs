//! Centralized theme and styling constants.

use ratatui::style::{Color, Modifier, Style};

/// Theme constants for the message header and its recipient row.
pub struct Theme;

impl Theme {
    // Row text
    pub const ADDRESS: Style = Style::new().fg(Color::White);
    pub const MARKER: Style = Style::new().fg(Color::DarkGray);
    pub const LABEL: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const DIM: Style = Style::new().fg(Color::DarkGray);

    // Count badge
    pub const BADGE: Style = Style::new()
        .bg(Color::Rgb(0x3a, 0x3a, 0x3a))
        .fg(Color::Rgb(0xf0, 0xf0, 0xf0))
        .add_modifier(Modifier::BOLD);

    // UI chrome colors
    pub const BORDER: Color = Color::Cyan;

    // Overlay: two-tone, anchored top-right of the screen
    pub const OVERLAY_BG: Color = Color::Rgb(0x66, 0x66, 0x66);
    pub const OVERLAY_FG: Color = Color::Rgb(0xf0, 0xf0, 0xf0);
    pub const OVERLAY_MARGIN: u16 = 1;
    pub const OVERLAY_PADDING_X: u16 = 2;
    pub const OVERLAY_PADDING_Y: u16 = 0;

    pub const fn overlay() -> Style {
        Style::new().bg(Self::OVERLAY_BG).fg(Self::OVERLAY_FG)
    }
}
