//! Overlay listing every recipient, shown while the count badge is hovered.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget, Wrap},
};

use super::{theme::Theme, width_probe::CellWidth};
use crate::fit::SEPARATOR;

/// Full recipient list, anchored to the top-right corner of the screen.
///
/// The list is wrapped rather than truncated; rows beyond the screen height
/// are the only thing that can be lost.
pub struct RecipientOverlay<'a> {
    recipients: &'a [String],
}

impl<'a> RecipientOverlay<'a> {
    pub const fn new(recipients: &'a [String]) -> Self {
        Self { recipients }
    }

    fn text(&self) -> String {
        self.recipients.join(SEPARATOR)
    }

    fn paragraph(text: String) -> Paragraph<'static> {
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .style(Theme::overlay())
    }

    /// Where the overlay lands inside `screen`.
    fn placement(&self, screen: Rect) -> Option<Rect> {
        let text = self.text();
        if text.is_empty() {
            return None;
        }

        let chrome_x = 2 + 2 * Theme::OVERLAY_PADDING_X;
        let chrome_y = 2 + 2 * Theme::OVERLAY_PADDING_Y;
        let max_width = screen.width.saturating_sub(2 * Theme::OVERLAY_MARGIN);
        let max_height = screen.height.saturating_sub(Theme::OVERLAY_MARGIN);
        if max_width <= chrome_x || max_height <= chrome_y {
            return None;
        }

        let text_width = u16::try_from(CellWidth::columns(&text)).unwrap_or(u16::MAX);
        let inner_width = text_width.min(max_width - chrome_x);
        let line_count = Self::paragraph(text).line_count(inner_width);
        let line_count = u16::try_from(line_count).unwrap_or(u16::MAX);

        let width = inner_width + chrome_x;
        let height = line_count.saturating_add(chrome_y).min(max_height);
        let x = screen.right() - Theme::OVERLAY_MARGIN - width;
        let y = screen.y + Theme::OVERLAY_MARGIN;
        Some(Rect::new(x, y, width, height))
    }
}

impl Widget for RecipientOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(popup_area) = self.placement(area) else {
            return;
        };

        Clear.render(popup_area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::new(
                Theme::OVERLAY_PADDING_X,
                Theme::OVERLAY_PADDING_X,
                Theme::OVERLAY_PADDING_Y,
                Theme::OVERLAY_PADDING_Y,
            ))
            .style(Theme::overlay());

        Self::paragraph(self.text())
            .block(block)
            .render(popup_area, buf);
    }
}
