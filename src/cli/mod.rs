//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{Season, Team};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service.
    Serve {
        /// Interface to bind (or set `HOST`).
        #[clap(long)]
        host: Option<String>,

        /// Port to listen on (or set `PORT`).
        #[clap(long, short)]
        port: Option<u16>,
    },

    /// Fetch a team's season stats from the provider and upsert its quarterbacks.
    Sync {
        /// Season identifier (e.g. 2023, 2023REG).
        #[clap(long, short)]
        season: Season,

        /// Team abbreviation (e.g. KC).
        #[clap(long, short)]
        team: Team,

        /// Output the summary as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Find a quarterback by name (case-insensitive substring), asking the
    /// provider when no local record matches.
    Search {
        name: String,

        /// Output the record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List stored quarterbacks.
    List {
        /// Only records for this team.
        #[clap(long, short)]
        team: Option<Team>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete every stored quarterback.
    Clear,
}

#[derive(Debug, Parser)]
#[clap(name = "qb-stats", about = "Quarterback stats service", version)]
pub struct QbStats {
    /// Database file (or set `QB_STATS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
