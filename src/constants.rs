//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout Spokes, including
//! fleet limits, file names, timing intervals, and UI labels.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Fleet Limits ===

/// Maximum number of bicycles the store accepts unless configured otherwise.
pub const MAX_BICYCLES: usize = 100;
/// Longest location the add form accepts.
pub const MAX_LOCATION_LEN: usize = 49;

// === Path Configuration ===

/// Default name of the backing file.
pub const DATA_FILE_NAME: &str = "bicycles.txt";
/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the logs subdirectory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Name of the log file.
pub const LOG_FILE_NAME: &str = "spokes.log";

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// === Logging ===

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// === UI Labels & Titles ===

pub const TITLE_MAIN_MENU: &str = " Main Menu ";
pub const TITLE_BICYCLES: &str = " Bicycles ";
pub const TITLE_ADD_BICYCLE: &str = " Add Bicycle ";
pub const TITLE_BORROW_BICYCLE: &str = " Borrow Bicycle ";
pub const TITLE_RETURN_BICYCLE: &str = " Return Bicycle ";
pub const TITLE_FORM_FOOTER: &str = " [Enter] Confirm  [Esc] Cancel ";

pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("1", "View bicycles"),
    ("2", "Add bicycle"),
    ("3", "Borrow bicycle"),
    ("4", "Return bicycle"),
    ("5", "Exit"),
];

pub const LABEL_AVAILABLE: &str = "Available";
pub const LABEL_BORROWED: &str = "Borrowed";
pub const LABEL_TYPE: &str = "Type:     ";
pub const LABEL_LOCATION: &str = "Location: ";

pub const PROMPT_BORROW_INDEX: &str = "Bicycle number to borrow (0 to go back):";
pub const PROMPT_RETURN_INDEX: &str = "Bicycle number to return (0 to go back):";
pub const HINT_TYPE_CYCLE: &str = "[←/→] change type   [Tab] switch field";

// === Messages: General (Toast/CLI) ===

pub const MSG_EMPTY_FLEET: &str = "No bicycles in the system.";
pub const MSG_ADDED: &str = "Bicycle added as number ";
pub const MSG_BORROWED: &str = "Borrowed bicycle ";
pub const MSG_RETURNED: &str = "Returned bicycle ";
pub const MSG_NOTHING_SELECTED: &str = "Select a bicycle first";
pub const MSG_NOT_A_NUMBER: &str = "Please enter a bicycle number";
pub const MSG_INVALID_OPTION: &str = "Invalid option!";
pub const MSG_UNSAVED_SUFFIX: &str = " (change kept in memory only)";

// === Messages: CLI Output ===

pub const CLI_MSG_ERROR: &str = "Error: ";
pub const CLI_MSG_INFO_HEADER: &str = "Spokes";
