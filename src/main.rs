// ── Safety policy ────────────────────────────────────────────────────────────
// No unsafe code anywhere; the clipboard and terminal are reached through
// safe crate APIs only.
#![forbid(unsafe_code)]

mod app;
mod clipboard;
mod config;
mod error;
mod field;
mod logging;
mod stats;
mod store;
mod theme;
mod ui;

use std::io::{self, IsTerminal};

use clap::Parser;

use crate::{
    app::App,
    config::Config,
    store::{JsonFileStore, KeyValueStore, MemoryStore},
    ui::terminal::TerminalView,
};

fn main() {
    let config = Config::parse();
    logging::init(&config.log_level);

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "fatal");
        eprintln!("textbox: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> error::Result<()> {
    let store: Box<dyn KeyValueStore> = if config.ephemeral {
        tracing::info!("ephemeral session; nothing will be saved");
        Box::new(MemoryStore::default())
    } else {
        let store = JsonFileStore::open(&config.resolved_data_dir());
        tracing::info!(path = %store.path().display(), "using store");
        Box::new(store)
    };

    let mut app = App::new(store);
    let mut clipboard = clipboard::open();

    let stdout = io::stdout();
    let colour = !config.no_colour && stdout.is_terminal();
    let mut view = TerminalView::new(stdout.lock(), colour);

    ui::run(&mut app, clipboard.as_mut(), io::stdin().lock(), &mut view)
}
