// Allow unwrap and float comparisons in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
//! Genexpr: a toy evolutionary search over digit/operator expressions.
//!
//! A genotype of 4-bit codes decodes to an expression such as `6 * 7`, which
//! is evaluated strictly left to right. The search looks for a genotype whose
//! expression equals a fixed target, using fitness-proportionate selection
//! and nothing else: no crossover and no mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI (config, output)           │
//! ├─────────────────────────────────────┤
//! │   gp: evolution → selection         │
//! ├─────────────────────────────────────┤
//! │   gp: codec → objective → fitness   │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod gp;

pub use error::{Error, Result};

// Re-export the pipeline at crate root for convenience
pub use gp::{
    Evolution, EvolutionConfig, Genotype, Operator, ScoredPopulation, Token, TokenSequence,
    decode, evaluate, evolve, fitness, select,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_pipeline_end_to_end() {
        let genotype = Genotype::new(vec![4, 10, 2]).unwrap();
        let tokens = decode(&genotype);
        assert_eq!(
            tokens.tokens(),
            &[Token::Digit(4), Token::Op(Operator::Add), Token::Digit(2)]
        );

        let value = evaluate(&tokens);
        assert_eq!(value, 6.0);
        assert_eq!(fitness(value, 6.0), f64::INFINITY);
    }

    #[test]
    fn test_errors_convert() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut run = || -> Result<Vec<Genotype>> {
            let genotype = Genotype::new(vec![1])?;
            let mut scored = ScoredPopulation::new();
            scored.insert_with_fitness(1.0, genotype);
            Ok(select(&scored, -3, &mut rng)?)
        };
        let err = run().unwrap_err();
        assert!(matches!(err, Error::Selection(_)));
        assert_eq!(
            err.to_string(),
            "invalid selection count -3: must not be negative"
        );
    }
}
