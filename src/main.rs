mod config;
mod error;
mod fit;
mod report;
mod tui;

use std::process;

use clap::Parser;
use config::{Cli, Commands, RecipientSource};

use crate::error::Result;

async fn show(source: &RecipientSource, max_width: Option<u16>) -> Result<()> {
    let width_cap = config::validate_width_cap(max_width)?;
    let recipients = source.load()?;
    tui::run(recipients, width_cap).await
}

fn fit_report(source: &RecipientSource, width: f64) -> Result<()> {
    let recipients = source.load()?;
    report::print_fit(&recipients, width)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Show { source, max_width } => show(&source, max_width).await,
        Commands::Fit { source, width } => fit_report(&source, width),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
