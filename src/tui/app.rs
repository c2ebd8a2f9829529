//! Application state for the TUI.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use super::widgets::{
    recipient_overlay::RecipientOverlay,
    recipient_row::{RecipientRow, RecipientRowWidget},
    status_bar::{StatusBar, StatusBarInput, StatusBarWidget},
    theme::Theme,
    InteractiveStatefulWidget,
};

const TO_LABEL: &str = "To: ";

/// Application state.
#[derive(Default)]
pub struct App {
    /// Recipient row and its hover state.
    row: RecipientRow,
    /// Upper bound on the row width, if any.
    width_cap: Option<u16>,
    status_bar: StatusBar,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl App {
    pub fn new(recipients: Vec<String>, width_cap: Option<u16>) -> Self {
        let mut app = Self {
            width_cap,
            ..Self::default()
        };
        RecipientRowWidget::update_state(&mut app.row, recipients);
        app
    }

    pub const fn row(&self) -> &RecipientRow {
        &self.row
    }

    /// Handle a terminal event. Returns true if it changed anything.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_exit = true;
                    true
                }
                KeyCode::Char('-') => self.adjust_width_cap(-1),
                KeyCode::Char('+' | '=') => self.adjust_width_cap(1),
                KeyCode::Char('0') => {
                    self.width_cap = None;
                    true
                }
                _ => false,
            },
            Event::Mouse(mouse) => {
                let changed = RecipientRowWidget::handle_event(&mut self.row, *mouse);
                if changed {
                    debug!(
                        badge = ?self.row.badge_area(),
                        overlay = self.row.overlay_visible(),
                        "Badge hover changed"
                    );
                }
                changed
            }
            Event::Resize(columns, rows) => {
                debug!(columns, rows, "Terminal resized");
                true
            }
            _ => false,
        }
    }

    fn adjust_width_cap(&mut self, delta: i32) -> bool {
        let Some(current) = self.width_cap.or(self.row.fitted_width()) else {
            return false;
        };
        let next = i32::from(current) + delta;
        let Ok(next) = u16::try_from(next.max(1)) else {
            return false;
        };
        self.width_cap = Some(next);
        true
    }

    /// Render the UI.
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        self.render_body(frame, body_area);

        StatusBarWidget::update_state(
            &mut self.status_bar,
            StatusBarInput {
                decision: self.row.decision(),
                row_width: self.row.fitted_width(),
                width_cap: self.width_cap,
            },
        );
        frame.render_stateful_widget(StatusBarWidget, status_area, &mut self.status_bar);

        if self.row.overlay_visible() {
            frame.render_widget(RecipientOverlay::new(self.row.recipients()), frame.area());
        }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Theme::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_width = u16::try_from(TO_LABEL.len()).unwrap_or(u16::MAX);
        let [label_area, row_area] =
            Layout::horizontal([Constraint::Length(label_width), Constraint::Fill(1)])
                .areas(inner);
        let row_area = self.capped(row_area);

        frame.render_widget(Span::styled(TO_LABEL, Theme::LABEL), label_area);
        frame.render_stateful_widget(RecipientRowWidget, row_area, &mut self.row);
    }

    fn capped(&self, area: Rect) -> Rect {
        self.width_cap.map_or(area, |cap| Rect {
            width: area.width.min(cap),
            ..area
        })
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let count = self.row.recipients().len();
        let hint = if self.row.decision().shows_indicator() {
            "Hover the badge to see every recipient."
        } else {
            "All recipients are visible."
        };
        let lines = vec![
            Line::from(Span::styled(format!("{count} recipient(s)"), Theme::DIM)),
            Line::from(Span::styled(hint, Theme::DIM)),
        ];
        frame.render_widget(Paragraph::new(lines), area.inner(Margin::new(1, 1)));
    }
}
