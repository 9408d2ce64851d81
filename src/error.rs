//! Crate-level error type.

use crate::gp::{EvolutionError, GenotypeError, SelectionError};
use thiserror::Error;

/// Any error raised by the search.
#[derive(Debug, Error)]
pub enum Error {
    /// A genotype was built from codes wider than 4 bits.
    #[error(transparent)]
    Genotype(#[from] GenotypeError),
    /// Selection was asked for something it cannot do.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The generation loop stopped early.
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
}

/// Result type for the search.
pub type Result<T> = std::result::Result<T, Error>;
