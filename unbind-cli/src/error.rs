//! Error types emitted by the Unbind CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use unbind_coach::CoachError;
use unbind_core::BookError;

/// Errors emitted by the Unbind CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Neither a title nor a candidate file named the book to coach.
    #[error("choose a book to coach with --title or --candidate")]
    MissingCandidate,
    /// Both a title and a candidate file were supplied.
    #[error("--title and --candidate are mutually exclusive")]
    ConflictingCandidate,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// An input file held malformed JSON.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseInput {
        /// File holding the malformed JSON.
        path: Utf8PathBuf,
        /// Parser error with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// A book record failed validation.
    #[error("book {position} in {path:?} is invalid: {source}")]
    InvalidBook {
        /// File holding the record.
        path: Utf8PathBuf,
        /// One-based position in a library file, or 1 for a single record.
        position: usize,
        /// Validation failure.
        #[source]
        source: BookError,
    },
    /// No library book carries the requested title.
    #[error("no book titled {title:?} in {path:?}")]
    UnknownTitle {
        /// Title as requested.
        title: String,
        /// Library that was searched.
        path: Utf8PathBuf,
    },
    /// The configured factor weights were rejected.
    #[error(transparent)]
    InvalidWeights(#[from] CoachError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
