mod app;
mod config;
mod error;
mod print;
mod sale_entry;
mod ui;

use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;

    // The terminal belongs to the UI; logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "comanda_tui={level},engine={level}",
            level = config.log_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let opener = Box::new(print::SystemOpener::new(&config.export_dir));
    let mut app = app::App::new(config, opener);
    app.run()?;
    Ok(())
}
