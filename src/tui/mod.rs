//! TUI hosting the recipient row.

pub mod app;
mod widgets;

use std::io::{stdout, Stdout};

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tracing::info;

use crate::error::Result;

pub use widgets::{recipient_row::compose_row, width_probe::CellWidth};

pub async fn run(recipients: Vec<String>, width_cap: Option<u16>) -> Result<()> {
    info!(count = recipients.len(), ?width_cap, "Starting recipient view");

    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, App::new(recipients, width_cap)).await;

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut dirty = true;

    while !app.should_exit {
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
        }

        match event_stream.next().await {
            Some(Ok(event)) => dirty = app.handle_event(&event),
            Some(Err(e)) => return Err(e.into()),
            None => break,
        }
    }

    info!(
        shown = app.row().decision().visible_prefix_len,
        hidden = app.row().decision().hidden_count,
        "Leaving recipient view"
    );
    Ok(())
}
