//! Status bar with keybindings and the current fit summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::InteractiveStatefulWidget;
use crate::fit::LayoutDecision;

const KEYBINDINGS: &[(&str, &str)] = &[("-/+", "width"), ("0", "full width"), ("q", "quit")];

/// Input for updating status bar state.
pub struct StatusBarInput {
    pub decision: LayoutDecision,
    pub row_width: Option<u16>,
    pub width_cap: Option<u16>,
}

/// State for the status bar widget.
#[derive(Default)]
pub struct StatusBar {
    decision: LayoutDecision,
    row_width: Option<u16>,
    width_cap: Option<u16>,
}

impl StatusBar {
    fn summary(&self) -> String {
        let width = self
            .row_width
            .map_or_else(|| "?".to_string(), |w| w.to_string());
        let cap = self
            .width_cap
            .map_or_else(String::new, |c| format!(" (max {c})"));
        format!(
            "{} shown, {} hidden, {width} cols{cap}",
            self.decision.visible_prefix_len, self.decision.hidden_count
        )
    }
}

/// Widget for rendering the status bar.
pub struct StatusBarWidget;

impl StatefulWidget for StatusBarWidget {
    type State = StatusBar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let separator = Span::raw(" │ ");

        let key_spans = KEYBINDINGS
            .iter()
            .enumerate()
            .flat_map(|(i, (key, desc))| {
                let prefix = (i > 0).then(|| separator.clone());
                prefix.into_iter().chain([
                    Span::styled(*key, Style::new().fg(Color::Cyan)),
                    Span::raw(format!(": {desc}")),
                ])
            });

        let summary_spans = [
            separator.clone(),
            Span::styled(state.summary(), Style::new().fg(Color::Green)),
        ];

        let spans: Vec<Span> = key_spans.chain(summary_spans).collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl InteractiveStatefulWidget for StatusBarWidget {
    type Input = StatusBarInput;
    type Event = ();

    fn update_state(state: &mut Self::State, input: Self::Input) {
        state.decision = input.decision;
        state.row_width = input.row_width;
        state.width_cap = input.width_cap;
    }
}
