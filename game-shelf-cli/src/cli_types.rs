//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Curate a game catalog: visibility, categories, featured and related games", long_about = None)]
pub(crate) struct Cli {
    /// Catalog directory containing games/, labels.yaml and site.toml
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Site config file (defaults to <root>/site.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preview mode: show scheduled and undated entries
    #[arg(short, long, global = true)]
    pub preview: bool,

    /// Evaluate visibility at this instant (RFC 3339) instead of now
    #[arg(long, global = true, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List visible categories with labels and entry counts
    Categories,

    /// List visible games, newest first
    List {
        /// Only games in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show the featured (main) game, enforcing the featured-flag rules
    Featured,

    /// Show games related to the one with this slug
    Related {
        /// Slug of the game
        slug: String,

        /// Maximum number of related games (defaults to related_limit in site.toml)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the homepage sections: featured, recent, popular, new, categories
    Home,

    /// Validate the catalog and report data problems
    Check,

    /// Print the resolved site configuration
    Config,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
