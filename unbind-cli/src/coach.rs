//! Coach command implementation for the Unbind CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use unbind_coach::{FactorWeights, PatternCoach};
use unbind_core::{Analysis, Book, Coach};

use crate::library::{find_by_title, load_book, load_library, require_existing, write_json};
use crate::{
    ARG_CANDIDATE, ARG_GENRE_WEIGHT, ARG_INCLUDE_CANDIDATE, ARG_LIBRARY, ARG_MOMENTUM_WEIGHT,
    ARG_POSITION_WEIGHT, ARG_TITLE, CliError, ENV_COACH_LIBRARY,
};

/// CLI arguments for the `coach` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "coach",
    long_about = "Score one book against a JSON reading library. Pick the \
                 book by title from the library itself, or pass a separate \
                 JSON book record. The analysis is printed as JSON.",
    about = "Decide whether to push on with a book"
)]
#[ortho_config(prefix = "UNBIND")]
pub(crate) struct CoachArgs {
    /// Path to a JSON file holding the reading library.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) library: Option<Utf8PathBuf>,
    /// Title of a library book to coach.
    #[arg(long = ARG_TITLE, value_name = "title")]
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Path to a JSON file holding a single book to coach.
    #[arg(long = ARG_CANDIDATE, value_name = "path")]
    #[serde(default)]
    pub(crate) candidate: Option<Utf8PathBuf>,
    /// Count the candidate file's book as part of the library.
    // An unset flag is left out of the CLI layer so files and env can set it.
    #[arg(long = ARG_INCLUDE_CANDIDATE)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) include_candidate: bool,
    /// Points for the genre factor.
    #[arg(long = ARG_GENRE_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) genre_weight: Option<u8>,
    /// Points for the position factor.
    #[arg(long = ARG_POSITION_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) position_weight: Option<u8>,
    /// Points for the momentum factor.
    #[arg(long = ARG_MOMENTUM_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) momentum_weight: Option<u8>,
}

impl CoachArgs {
    pub(crate) fn into_config(self) -> Result<CoachConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CoachConfig::try_from(merged)
    }
}

/// Where the book under assessment comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CandidateSource {
    /// A book already present in the library.
    Title(String),
    /// A standalone JSON book record.
    File {
        path: Utf8PathBuf,
        /// Append the book to the library before scoring.
        include: bool,
    },
}

/// Resolved `coach` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CoachConfig {
    pub(crate) library: Utf8PathBuf,
    pub(crate) candidate: CandidateSource,
    pub(crate) weights: FactorWeights,
}

impl CoachConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.library, ARG_LIBRARY)?;
        if let CandidateSource::File { path, .. } = &self.candidate {
            require_existing(path, ARG_CANDIDATE)?;
        }
        Ok(())
    }
}

impl TryFrom<CoachArgs> for CoachConfig {
    type Error = CliError;

    fn try_from(args: CoachArgs) -> Result<Self, Self::Error> {
        let library = args.library.ok_or(CliError::MissingArgument {
            field: ARG_LIBRARY,
            env: ENV_COACH_LIBRARY,
        })?;
        let candidate = match (args.title, args.candidate) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingCandidate),
            (None, None) => return Err(CliError::MissingCandidate),
            (Some(title), None) => {
                if args.include_candidate {
                    log::warn!("--{ARG_INCLUDE_CANDIDATE} has no effect with --{ARG_TITLE}");
                }
                CandidateSource::Title(title)
            }
            (None, Some(path)) => CandidateSource::File {
                path,
                include: args.include_candidate,
            },
        };
        let defaults = FactorWeights::DEFAULT;
        let weights = FactorWeights {
            genre: args.genre_weight.unwrap_or(defaults.genre),
            position: args.position_weight.unwrap_or(defaults.position),
            momentum: args.momentum_weight.unwrap_or(defaults.momentum),
        }
        .validate()?;
        Ok(Self {
            library,
            candidate,
            weights,
        })
    }
}

pub(crate) fn run_coach_with(args: CoachArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let analysis = execute_coach(&config)?;
    write_json(writer, &analysis)
}

/// Load the inputs named by `config` and score the candidate.
pub(crate) fn execute_coach(config: &CoachConfig) -> Result<Analysis, CliError> {
    let mut library = load_library(&config.library)?;
    let candidate = resolve_candidate(&config.candidate, &config.library, &mut library)?;
    let coach = PatternCoach::with_weights(config.weights)?;
    Ok(coach.analyse(&candidate, &library))
}

fn resolve_candidate(
    source: &CandidateSource,
    library_path: &Utf8Path,
    library: &mut Vec<Book>,
) -> Result<Book, CliError> {
    match source {
        CandidateSource::Title(title) => {
            find_by_title(library, title)
                .cloned()
                .ok_or_else(|| CliError::UnknownTitle {
                    title: title.clone(),
                    path: library_path.to_path_buf(),
                })
        }
        CandidateSource::File { path, include } => {
            let book = load_book(path)?;
            if *include {
                library.push(book.clone());
            }
            Ok(book)
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CoachConfig, CliError> {
    let merged = CoachArgs::merge_from_layers(layers).map_err(CliError::from)?;
    CoachConfig::try_from(merged)
}
