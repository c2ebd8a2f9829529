//! Non-interactive fitting: one decision, printed as JSON.

use std::io::{self, Write};

use serde::Serialize;
use tracing::info;

use crate::{
    error::Result,
    fit::{fit, indicator_label, LayoutDecision},
    tui::{compose_row, CellWidth},
};

/// What a row of a given width would show.
#[derive(Debug, Serialize)]
pub struct FitReport<'a> {
    pub width: f64,
    pub decision: LayoutDecision,
    /// Row text before the badge.
    pub row: String,
    /// Badge label, when the badge is shown.
    pub indicator: Option<String>,
    /// Full list as the overlay shows it.
    pub recipients: &'a [String],
}

impl<'a> FitReport<'a> {
    pub fn new(recipients: &'a [String], width: f64) -> Self {
        let decision = fit(recipients, width, &CellWidth);
        Self {
            width,
            decision,
            row: compose_row(recipients, decision),
            indicator: decision
                .shows_indicator()
                .then(|| indicator_label(decision.hidden_count)),
            recipients,
        }
    }
}

pub fn print_fit(recipients: &[String], width: f64) -> Result<()> {
    let report = FitReport::new(recipients, width);
    info!(
        width,
        visible = report.decision.visible_prefix_len,
        hidden = report.decision.hidden_count,
        "Fit report"
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
