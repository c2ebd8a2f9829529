//! Count indicator showing how many recipients are hidden.
//!
//! The badge only knows its count and reports pointer enter/leave through a
//! [`HoverHandler`]; what hovering means is up to the owner.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::{StatefulWidget, Widget},
};

use super::{theme::Theme, width_probe::CellWidth};
use crate::fit::indicator_label;

/// Receiver of the badge's hover callbacks.
pub trait HoverHandler {
    fn on_hover_start(&mut self);
    fn on_hover_end(&mut self);
}

/// Where the badge was last drawn and whether the pointer is over it.
#[derive(Debug, Default)]
pub struct BadgeState {
    area: Option<Rect>,
    pointer_inside: bool,
}

impl BadgeState {
    /// Screen area of the badge, if it is currently rendered.
    pub const fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Update hover tracking for a pointer at (column, row).
    ///
    /// Fires `on_hover_start` on entry and `on_hover_end` on exit. Returns true
    /// if either fired.
    pub fn track_pointer(
        &mut self,
        column: u16,
        row: u16,
        handler: &mut impl HoverHandler,
    ) -> bool {
        let inside = self
            .area
            .is_some_and(|area| area.contains(Position::new(column, row)));

        match (self.pointer_inside, inside) {
            (false, true) => {
                self.pointer_inside = true;
                handler.on_hover_start();
                true
            }
            (true, false) => {
                self.pointer_inside = false;
                handler.on_hover_end();
                true
            }
            _ => false,
        }
    }

    /// Forget the badge area, ending any hover in progress.
    pub fn detach(&mut self, handler: &mut impl HoverHandler) {
        self.area = None;
        if self.pointer_inside {
            self.pointer_inside = false;
            handler.on_hover_end();
        }
    }
}

/// Widget rendering `+count`.
pub struct CountBadge {
    count: usize,
}

impl CountBadge {
    pub const fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn label(&self) -> String {
        indicator_label(self.count)
    }

    /// Columns the badge occupies.
    pub fn width(&self) -> u16 {
        u16::try_from(CellWidth::columns(&self.label())).unwrap_or(u16::MAX)
    }
}

impl StatefulWidget for CountBadge {
    type State = BadgeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = Rect {
            width: area.width.min(self.width()),
            height: area.height.min(1),
            ..area
        };
        state.area = (!area.is_empty()).then_some(area);
        Span::styled(self.label(), Theme::BADGE).render(area, buf);
    }
}
