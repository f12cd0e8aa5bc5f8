//! Insights command implementation for the Unbind CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use unbind_coach::{DASHBOARD_REASON_COUNT, LibraryInsights, ReasonCount};

use crate::library::{load_library, require_existing, write_json};
use crate::{ARG_LIBRARY, CliError, ENV_INSIGHTS_LIBRARY};

/// CLI arguments for the `insights` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "insights",
    about = "Summarise finish rates, genres and abandon reasons"
)]
#[ortho_config(prefix = "UNBIND")]
pub(crate) struct InsightsArgs {
    /// Path to a JSON file holding the reading library.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) library: Option<Utf8PathBuf>,
}

/// Dashboard payload printed by `insights`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsightsReport<'a> {
    #[serde(flatten)]
    pub(crate) insights: &'a LibraryInsights,
    pub(crate) has_enough_data: bool,
    pub(crate) books_needed: usize,
    pub(crate) top_abandon_reasons: &'a [ReasonCount],
}

impl<'a> InsightsReport<'a> {
    pub(crate) fn new(insights: &'a LibraryInsights) -> Self {
        Self {
            insights,
            has_enough_data: insights.has_enough_data(),
            books_needed: insights.books_needed(),
            top_abandon_reasons: insights.top_abandon_reasons(DASHBOARD_REASON_COUNT),
        }
    }
}

pub(crate) fn run_insights_with(
    args: InsightsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let library_path = merged.library.ok_or(CliError::MissingArgument {
        field: ARG_LIBRARY,
        env: ENV_INSIGHTS_LIBRARY,
    })?;
    require_existing(&library_path, ARG_LIBRARY)?;
    let library = load_library(&library_path)?;
    let insights = LibraryInsights::from_books(&library);
    write_json(writer, &InsightsReport::new(&insights))
}
