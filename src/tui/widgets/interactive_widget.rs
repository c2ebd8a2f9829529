//! Interactive widget trait extending ratatui's `StatefulWidget`.

use ratatui::widgets::StatefulWidget;

/// Extension trait for `StatefulWidget` that adds state updates and event
/// handling.
///
/// The owner pushes fresh input with [`update_state`](Self::update_state)
/// before drawing and forwards terminal events to
/// [`handle_event`](Self::handle_event); rendering stays a plain
/// `StatefulWidget::render`.
///
/// # Example
///
/// ```ignore
/// let mut row = RecipientRow::default();
/// RecipientRowWidget::update_state(&mut row, vec!["ann@x.io".into()]);
/// frame.render_stateful_widget(RecipientRowWidget, area, &mut row);
/// RecipientRowWidget::handle_event(&mut row, mouse_event);
/// ```
pub trait InteractiveStatefulWidget: StatefulWidget {
    /// Input data type for updating state.
    type Input;
    /// Event type for handling (use `()` for non-interactive widgets).
    type Event;

    /// Update the widget's state with new input data.
    fn update_state(state: &mut Self::State, input: Self::Input);

    /// Handle an event. Returns true if the event was consumed.
    fn handle_event(_state: &mut Self::State, _event: Self::Event) -> bool {
        false
    }
}
