use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/comanda.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Restaurant name shown in the info bar and the report header.
    pub restaurant: String,
    /// Directory reports and CSV exports are written to.
    pub export_dir: String,
    /// Log file the tracing subscriber appends to (the terminal belongs to
    /// the UI).
    pub log_file: String,
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant: "Reserved Restaurant".to_string(),
            export_dir: "exports".to_string(),
            log_file: "comanda.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "comanda_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the restaurant name.
    #[arg(long)]
    restaurant: Option<String>,
    /// Override the export directory.
    #[arg(long)]
    export_dir: Option<String>,
    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("COMANDA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(restaurant) = args.restaurant {
        settings.restaurant = restaurant;
    }
    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
