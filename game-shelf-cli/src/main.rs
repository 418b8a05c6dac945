//! game-shelf CLI
//!
//! Command-line interface for curating a game catalog directory.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands};
use commands::Shelf;
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                return writeln!(
                    buf,
                    "{} {:<5} {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.args()
                );
            }
            match record.level() {
                log::Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                ),
                log::Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow()),
                    record.args()
                ),
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let shelf = Shelf::load(&cli)?;

    match cli.command {
        Commands::Categories => commands::categories::run_categories(&shelf),
        Commands::List { category, page } => {
            commands::list::run_list(&shelf, category.as_deref(), page)
        }
        Commands::Featured => commands::featured::run_featured(&shelf),
        Commands::Related { slug, limit } => commands::related::run_related(&shelf, &slug, limit),
        Commands::Home => commands::home::run_home(&shelf),
        Commands::Check => commands::check::run_check(&shelf),
        Commands::Config => commands::config::run_config(&shelf),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
