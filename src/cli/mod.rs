//! CLI module - Command-line interface for courtside
//!
//! One subcommand per upstream feed, plus the daily box score job.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{GameDate, GameId, Season};

/// courtside - NBA stats to CSV
/// Fetches data.nba.net feeds, normalizes them and stores CSV objects
#[derive(Parser)]
#[command(name = "courtside")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ./config.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print CSV to stdout instead of writing to storage
    #[arg(long, global = true)]
    pub stdout: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a season's schedule
    Schedule {
        /// Season start year, e.g. 2018
        season: Season,
    },

    /// Fetch the scoreboard for a date
    Scoreboard {
        /// Game date as YYYYMMDD
        date: GameDate,
    },

    /// Fetch the box score of one game
    #[command(alias = "box")]
    Boxscore {
        /// Game date as YYYYMMDD
        date: GameDate,
        /// Game id, e.g. 0021800001
        game_id: GameId,
    },

    /// Fetch a season's player list
    Players {
        /// Season start year, e.g. 2018
        season: Season,
    },

    /// Fetch a season's franchises
    Teams {
        /// Season start year, e.g. 2018
        season: Season,
    },

    /// Fetch box scores for every game of a date into one file
    Daily {
        /// Game date as YYYYMMDD (default: yesterday)
        #[arg(long)]
        date: Option<GameDate>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
