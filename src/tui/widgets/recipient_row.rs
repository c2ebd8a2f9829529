//! Single-line recipient row with truncation marker and count badge.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tracing::debug;

use super::{
    count_badge::{BadgeState, CountBadge, HoverHandler},
    theme::Theme,
    width_probe::{clip_with_ellipsis, CellWidth},
    InteractiveStatefulWidget,
};
use crate::fit::{fit, LayoutDecision, TextMetric, MARKER, SEPARATOR};

/// Why the row has to be fitted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefitTrigger {
    RecipientsChanged,
    WidthChanged,
}

/// Overlay visibility, driven by the badge's hover callbacks.
#[derive(Debug, Default)]
struct OverlayToggle {
    visible: bool,
}

impl HoverHandler for OverlayToggle {
    fn on_hover_start(&mut self) {
        self.visible = true;
    }

    fn on_hover_end(&mut self) {
        self.visible = false;
    }
}

/// Text shown in the row for `decision`, without the badge.
///
/// A lone recipient is returned whole; clipping it is up to the renderer.
pub fn compose_row<S: AsRef<str>>(recipients: &[S], decision: LayoutDecision) -> String {
    let mut row = decision
        .visible(recipients)
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(SEPARATOR);
    if decision.shows_marker() {
        row.push_str(MARKER);
    }
    row
}

/// State for the recipient row.
#[derive(Debug)]
pub struct RecipientRow {
    recipients: Vec<String>,
    decision: LayoutDecision,
    fitted_width: Option<u16>,
    recipients_changed: bool,
    badge: BadgeState,
    overlay: OverlayToggle,
}

impl Default for RecipientRow {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            decision: LayoutDecision::default(),
            fitted_width: None,
            recipients_changed: true,
            badge: BadgeState::default(),
            overlay: OverlayToggle::default(),
        }
    }
}

impl RecipientRow {
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub const fn decision(&self) -> LayoutDecision {
        self.decision
    }

    /// Width the current decision was computed for.
    pub const fn fitted_width(&self) -> Option<u16> {
        self.fitted_width
    }

    /// Screen area of the count badge, while it is rendered.
    pub const fn badge_area(&self) -> Option<Rect> {
        self.badge.area()
    }

    /// Whether the full-list overlay should be drawn.
    pub const fn overlay_visible(&self) -> bool {
        self.overlay.visible && self.decision.shows_indicator()
    }

    /// What, if anything, invalidates the decision for a row `width` wide.
    pub fn refit_trigger(&self, width: u16) -> Option<RefitTrigger> {
        if self.recipients_changed {
            Some(RefitTrigger::RecipientsChanged)
        } else if self.fitted_width != Some(width) {
            Some(RefitTrigger::WidthChanged)
        } else {
            None
        }
    }

    /// Recompute the layout decision for a row `width` wide.
    pub fn refit(&mut self, width: u16, metric: &impl TextMetric) {
        self.decision = fit(&self.recipients, f64::from(width), metric);
        self.fitted_width = Some(width);
        self.recipients_changed = false;

        // The badge may have moved or gone; hover restarts on the next pointer event.
        self.badge.detach(&mut self.overlay);
    }

    /// Forward a pointer position to the badge. Returns true if the overlay
    /// visibility changed.
    pub fn handle_pointer(&mut self, column: u16, row: u16) -> bool {
        if !self.decision.shows_indicator() {
            return false;
        }
        let Self { badge, overlay, .. } = self;
        badge.track_pointer(column, row, overlay)
    }

    fn text_line(&self, width: u16) -> Line<'static> {
        if self.decision.first_item_clipped {
            let clipped = clip_with_ellipsis(&self.recipients[0], usize::from(width));
            return Line::from(Span::styled(clipped, Theme::ADDRESS));
        }

        let prefix = self.decision.visible(&self.recipients).join(SEPARATOR);
        let mut spans = vec![Span::styled(prefix, Theme::ADDRESS)];
        if self.decision.shows_marker() {
            spans.push(Span::styled(MARKER, Theme::MARKER));
        }
        Line::from(spans)
    }
}

/// Widget for rendering the recipient row.
pub struct RecipientRowWidget;

impl StatefulWidget for RecipientRowWidget {
    type State = RecipientRow;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if let Some(trigger) = state.refit_trigger(area.width) {
            state.refit(area.width, &CellWidth);
            debug!(
                ?trigger,
                width = area.width,
                visible = state.decision.visible_prefix_len,
                hidden = state.decision.hidden_count,
                "Recipient row refitted"
            );
        }

        if state.recipients.is_empty() {
            return;
        }

        let text_area = if state.decision.shows_indicator() {
            let badge = CountBadge::new(state.decision.hidden_count);
            let [text_area, badge_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(badge.width())])
                    .areas(area);
            badge.render(badge_area, buf, &mut state.badge);
            text_area
        } else {
            area
        };

        Paragraph::new(state.text_line(text_area.width)).render(text_area, buf);
    }
}

impl InteractiveStatefulWidget for RecipientRowWidget {
    type Input = Vec<String>;
    type Event = MouseEvent;

    fn update_state(state: &mut Self::State, input: Self::Input) {
        if state.recipients == input {
            return;
        }
        state.recipients = input;
        state.recipients_changed = true;
        state.badge.detach(&mut state.overlay);
    }

    fn handle_event(state: &mut Self::State, event: Self::Event) -> bool {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                state.handle_pointer(event.column, event.row)
            }
            _ => false,
        }
    }
}
