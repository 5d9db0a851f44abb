//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spokes - terminal inventory manager for rental bicycles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, env = "SPOKES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backing file holding the fleet (overrides the config file)
    #[arg(long, env = "SPOKES_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Subcommand to execute; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List every bicycle with its number and status
    List {
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add an available bicycle
    Add {
        /// One of: city, courier, mountain, flat
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Where the bicycle is parked (single word)
        location: String,
    },
    /// Mark a bicycle as borrowed
    Borrow {
        /// Bicycle number as shown by `list`
        index: usize,
    },
    /// Mark a borrowed bicycle as returned
    Return {
        /// Bicycle number as shown by `list`
        index: usize,
    },
    /// Show resolved paths and fleet counts
    Info,
}
