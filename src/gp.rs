//! Evolutionary search for arithmetic expressions.
//!
//! Candidates are genotypes of 4-bit codes. Each generation they are decoded
//! into alternating digit/operator tokens, evaluated strictly left to right,
//! scored against the target, and resampled by fitness-proportionate selection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Evolution Loop              │
//! ├─────────────────────────────────────┤
//! │     Roulette-Wheel Selection        │
//! ├─────────────────────────────────────┤
//! │         Fitness Scoring             │
//! ├─────────────────────────────────────┤
//! │  Genotype → Tokens → Objective      │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use genexpr::gp::{evolve, EvolutionConfig};
//!
//! let config = EvolutionConfig { seed: Some(7), ..EvolutionConfig::default() };
//! let stats = evolve(&config, |report| {
//!     assert!(report.best_fitness >= 0.0);
//! })?;
//! assert!(!stats.generations.is_empty());
//! # Ok::<(), genexpr::gp::EvolutionError>(())
//! ```

mod codec;
mod evolution;
mod fitness;
mod genome;
mod objective;
mod selection;

pub use codec::{Operator, Token, TokenSequence, decode, decode_codes};
pub use evolution::{
    Evolution, EvolutionConfig, EvolutionError, EvolutionStats, GenerationReport, Outcome, evolve,
};
pub use fitness::{
    ScoredGenotype, ScoredPopulation, fitness, is_solution, score_genotype, score_population,
};
pub use genome::{DEFAULT_GENOTYPE_LENGTH, Genotype, GenotypeError, MAX_CODE, random_population};
pub use objective::evaluate;
pub use selection::{SelectionError, SelectionStats, select};
