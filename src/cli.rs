//! CLI command implementations for Genexpr.

pub(crate) mod evolve;
pub(crate) mod inspect;

mod output;

use clap::ValueEnum;
use genexpr::gp::{EvolutionError, GenotypeError};
use thiserror::Error;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One line per generation.
    #[default]
    Text,
    /// Full run report as JSON.
    Json,
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The search failed.
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    /// A genotype given on the command line was invalid.
    #[error(transparent)]
    Genotype(#[from] GenotypeError),
    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
