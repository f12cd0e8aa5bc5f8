//! Command-line interface for Unbind's reading coach.
//!
//! Two subcommands are exposed:
//!
//! - `coach` scores a single book against a JSON library and prints the
//!   resulting analysis.
//! - `insights` prints the dashboard aggregates for a JSON library.
//!
//! Both read their inputs through `ortho_config`, so every option can also
//! come from a configuration file or an `UNBIND_CMDS_*` environment variable.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod coach;
mod error;
mod insights;
mod library;

use coach::{CoachArgs, run_coach_with};
use insights::{InsightsArgs, run_insights_with};

pub use error::CliError;

pub(crate) const ARG_LIBRARY: &str = "library";
pub(crate) const ARG_TITLE: &str = "title";
pub(crate) const ARG_CANDIDATE: &str = "candidate";
pub(crate) const ARG_INCLUDE_CANDIDATE: &str = "include-candidate";
pub(crate) const ARG_GENRE_WEIGHT: &str = "genre-weight";
pub(crate) const ARG_POSITION_WEIGHT: &str = "position-weight";
pub(crate) const ARG_MOMENTUM_WEIGHT: &str = "momentum-weight";
pub(crate) const ENV_COACH_LIBRARY: &str = "UNBIND_CMDS_COACH_LIBRARY";
pub(crate) const ENV_INSIGHTS_LIBRARY: &str = "UNBIND_CMDS_INSIGHTS_LIBRARY";

/// Run the Unbind CLI with the current process arguments and environment.
///
/// Output is written to standard output as pretty-printed JSON.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Coach(args) => run_coach_with(args, writer),
        Command::Insights(args) => run_insights_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "unbind",
    about = "Decide whether to push on with a book or put it down",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a book against your reading history.
    Coach(CoachArgs),
    /// Summarise a reading library.
    Insights(InsightsArgs),
}

#[cfg(test)]
mod tests;
