// ── Command-line configuration ────────────────────────────────────────────────

use std::path::PathBuf;

use clap::Parser;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "textbox";

/// Character and message counters with live text statistics.
///
/// Reads commands from standard input, one per line; type `help` for the list.
#[derive(Debug, Parser)]
#[command(name = "textbox", version)]
pub(crate) struct Config {
    /// Directory holding `store.json`.
    #[arg(long, env = "TEXTBOX_DATA_DIR", value_name = "PATH")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk.
    #[arg(long)]
    pub(crate) ephemeral: bool,

    /// Minimum log level written to stderr (`RUST_LOG` takes precedence).
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub(crate) log_level: String,

    /// Disable coloured output.
    #[arg(long)]
    pub(crate) no_colour: bool,
}

impl Config {
    /// The directory the store lives in.
    ///
    /// `--data-dir` / `TEXTBOX_DATA_DIR` first, then the platform data
    /// directory (`%APPDATA%`, `~/.local/share`, `~/Library/Application
    /// Support`), then `./.textbox`.
    pub(crate) fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match dirs::data_dir() {
            Some(base) => base.join(APP_DIR_NAME),
            None => PathBuf::from(format!(".{APP_DIR_NAME}")),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
