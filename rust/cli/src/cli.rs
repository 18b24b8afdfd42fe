//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "preflop",
    version,
    about = "Build preflop training scenarios one decision at a time"
)]
pub struct PreflopCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a fresh scenario with one node per seat
    Seed {
        /// Table format: six-max or nine-max
        #[arg(long)]
        format: Option<String>,
        /// Seat to mark as the hero
        #[arg(long)]
        hero: Option<String>,
        /// Write the scenario here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the actions a node may take
    Legal {
        #[arg(long)]
        input: String,
        #[arg(long)]
        node: u32,
    },
    /// Apply one action to a node
    Apply {
        #[arg(long)]
        input: String,
        #[arg(long)]
        node: u32,
        /// Action label, e.g. open, 3bet, call
        #[arg(long)]
        action: String,
        /// Size in big blinds, e.g. 2.5 or 2.5bb
        #[arg(long)]
        sizing: Option<String>,
        /// Write the new scenario here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the sizing presets for an action
    Sizes {
        #[arg(long)]
        action: String,
    },
    /// Print a scenario as a node table
    Show {
        #[arg(long)]
        input: String,
    },
    /// Display the resolved configuration
    Cfg,
}
