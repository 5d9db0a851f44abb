//! One-shot commands: run a single store operation and print the result.

use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use color_eyre::Result;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use serde::Serialize;

use crate::cli::args::Commands;
use crate::config::Settings;
use crate::constants;
use crate::inventory::{InventoryError, InventoryStore};
use crate::state::BicycleRecord;

/// A bicycle paired with its display number, as printed by `list --json`.
#[derive(Serialize)]
struct ListedBicycle<'a> {
    index: usize,
    #[serde(flatten)]
    bicycle: &'a BicycleRecord,
}

/// Execute `command` against the store.
///
/// Store rejections are printed to stderr and turn into a failing exit code.
///
/// # Errors
///
/// Returns an error only if `list --json` output cannot be serialized.
pub fn run(
    command: Commands,
    store: &mut InventoryStore,
    settings: &Settings,
    log_file: Option<&Path>,
) -> Result<ExitCode> {
    let color = io::stdout().is_tty();

    let outcome = match command {
        Commands::List { json: true } => Ok(format_json(store)?),
        Commands::List { json: false } => Ok(format_list(store, color)),
        Commands::Add { kind, location } => store
            .add(&kind, &location)
            .map(|index| format!("{}{index}", constants::MSG_ADDED)),
        Commands::Borrow { index } => store
            .borrow(index)
            .map(|bike| format_record(constants::MSG_BORROWED, index, &bike, color)),
        Commands::Return { index } => store
            .give_back(index)
            .map(|bike| format_record(constants::MSG_RETURNED, index, &bike, color)),
        Commands::Info => Ok(format_info(store, settings, log_file)),
    };

    match outcome {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_error(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_error(err: &InventoryError) {
    let mut message = format!("{}{err}", constants::CLI_MSG_ERROR);
    if err.is_unsaved_change() {
        message.push_str(constants::MSG_UNSAVED_SUFFIX);
    }
    if io::stderr().is_tty() {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{message}");
    }
}

/// One line per bicycle, green when available and red when borrowed.
fn format_list(store: &InventoryStore, color: bool) -> String {
    if store.is_empty() {
        return format!("{}\n", constants::MSG_EMPTY_FLEET);
    }
    let mut out = String::new();
    for (index, bike) in store.list() {
        let _ = writeln!(out, "{}", paint(&row(index, bike), bike.available, color));
    }
    out
}

fn format_json(store: &InventoryStore) -> serde_json::Result<String> {
    let listed: Vec<ListedBicycle> = store
        .list()
        .map(|(index, bicycle)| ListedBicycle { index, bicycle })
        .collect();
    let mut json = serde_json::to_string_pretty(&listed)?;
    json.push('\n');
    Ok(json)
}

fn format_record(verb: &str, index: usize, bike: &BicycleRecord, color: bool) -> String {
    format!(
        "{verb}{index}\n{}\n",
        paint(&row(index, bike), bike.available, color)
    )
}

fn format_info(store: &InventoryStore, settings: &Settings, log_file: Option<&Path>) -> String {
    let config_state = if settings.config_path.is_file() {
        "found"
    } else {
        "not found (using defaults)"
    };
    let mut out = String::new();
    let _ = writeln!(out, "{} v{}", constants::CLI_MSG_INFO_HEADER, constants::APP_VERSION);
    let _ = writeln!(
        out,
        "  Config:     {} ({config_state})",
        settings.config_path.display()
    );
    let _ = writeln!(out, "  Data file:  {}", store.path().display());
    let _ = writeln!(
        out,
        "  Log file:   {}",
        log_file.map_or_else(|| "disabled".to_string(), |p| p.display().to_string())
    );
    let _ = writeln!(
        out,
        "  Bicycles:   {}/{} ({} available, {} borrowed)",
        store.len(),
        store.capacity(),
        store.available_count(),
        store.borrowed_count()
    );
    out
}

fn row(index: usize, bike: &BicycleRecord) -> String {
    format!(
        "{index}. {} - {} - {}",
        bike.kind,
        bike.location,
        bike.status_label()
    )
}

fn paint(text: &str, available: bool, color: bool) -> String {
    match (color, available) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}
