//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand};

/// Perfect Play - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Tic-tac-toe engine with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the engine
    Play {
        /// Let the engine move first (engine plays X instead of O)
        #[arg(long)]
        engine_first: bool,
    },

    /// Watch the engine play itself to completion
    Demo,
}
