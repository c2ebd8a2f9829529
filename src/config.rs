//! Command line, recipient sources and log setup.

use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, Result};

#[derive(Parser)]
#[command(name = "recipients-tui")]
#[command(about = "Fit a list of email recipients into a single terminal row")]
pub struct Cli {
    /// Log file (defaults to the user cache directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the recipient row; hover the count badge to see everyone
    Show {
        #[command(flatten)]
        source: RecipientSource,
        /// Cap the row at this many columns
        #[arg(long)]
        max_width: Option<u16>,
    },
    /// Print the layout decision for a row of the given width as JSON
    Fit {
        #[command(flatten)]
        source: RecipientSource,
        /// Available row width in columns
        #[arg(long, short, allow_hyphen_values = true)]
        width: f64,
    },
}

#[derive(Args, Debug, Default)]
pub struct RecipientSource {
    /// Recipient addresses, in display order
    pub addresses: Vec<String>,
    /// Read recipients from a JSON array or a file with one address per line
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

impl RecipientSource {
    /// Positional addresses followed by the file's, order preserved.
    pub fn load(&self) -> Result<Vec<String>> {
        let mut recipients = self.addresses.clone();
        if let Some(path) = &self.file {
            recipients.extend(read_recipients(path)?);
        }
        Ok(recipients)
    }
}

fn read_recipients(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::UnreadableRecipients {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    parse_recipients(&contents)
}

/// Parse either a JSON array of strings or newline-separated addresses.
pub fn parse_recipients(contents: &str) -> Result<Vec<String>> {
    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(contents)?);
    }
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

pub fn validate_width_cap(max_width: Option<u16>) -> Result<Option<u16>> {
    match max_width {
        Some(0) => Err(ConfigError::InvalidWidthCap(0).into()),
        other => Ok(other),
    }
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("recipients-tui")
        .join("recipients-tui.log")
}

/// Send tracing output to a file; the terminal belongs to the TUI.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let path = log_file.map_or_else(default_log_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recipients_tui=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
