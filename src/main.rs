//! Spokes - terminal inventory manager for a small fleet of rental bicycles.
//!
//! Without a subcommand the interactive menu starts; otherwise a single
//! operation runs against the backing file and the process exits.

mod app;
mod cli;
mod config;
mod constants;
mod event;
mod inventory;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing::info;

use crate::app::App;
use crate::cli::args::Args;
use crate::config::{Config, Settings};
use crate::inventory::InventoryStore;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let settings = Settings::resolve(Config::load(&config_path)?, &config_path, args.data_file);

    let log_file = logging::init(
        &config::data_dir().join(constants::LOGS_DIR_NAME),
        &settings.log_level,
    );
    info!(
        version = constants::APP_VERSION,
        data_file = %settings.data_file.display(),
        capacity = settings.capacity,
        "starting"
    );

    let mut store = InventoryStore::load(&settings.data_file, settings.capacity)?;

    match args.command {
        Some(command) => cli::commands::run(command, &mut store, &settings, log_file.as_deref()),
        None => {
            let mut app = App::new(store);
            tui::run(&mut app, settings.tick_rate_ms)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
