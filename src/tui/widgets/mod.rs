//! Widgets making up the message header.

pub mod count_badge;
pub mod interactive_widget;
pub mod recipient_overlay;
pub mod recipient_row;
pub mod status_bar;
pub mod theme;
pub mod width_probe;

pub use interactive_widget::InteractiveStatefulWidget;
