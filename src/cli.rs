//! Command-line interface for lesson_tictactoe.

use clap::{Parser, Subcommand};

/// Lesson Tic-Tac-Toe - N x N tic-tac-toe with a turn timer
#[derive(Parser, Debug)]
#[command(name = "lesson_tictactoe")]
#[command(about = "N x N tic-tac-toe with a per-turn countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play {
        /// Board size; prompts for one if omitted
        #[arg(short, long)]
        size: Option<usize>,

        /// Seconds per turn (overrides the config file)
        #[arg(short, long)]
        turn_seconds: Option<u32>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Classify a board given in text form, e.g. "XOX/XXO/OXO"
    Check {
        /// Board rows separated by '/', using X, O and '.'
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
