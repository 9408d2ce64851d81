//! Generation loop.
//!
//! The driver owns the population and the random generator. Each generation
//! it scores every genotype, stops if the best one is an exact solution, and
//! otherwise replaces the population by roulette-wheel selection. The loop
//! ends on a solution or when the generation budget runs out.

use crate::gp::codec::decode;
use crate::gp::fitness::{ScoredPopulation, is_solution, score_population};
use crate::gp::genome::{DEFAULT_GENOTYPE_LENGTH, Genotype, random_population};
use crate::gp::selection::{SelectionError, SelectionStats, select};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration for the evolution process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Value the search converges toward.
    pub target: f64,
    /// Number of random genotypes in the initial population.
    pub population_size: usize,
    /// Genes per genotype.
    pub genotype_length: usize,
    /// Maximum number of generations to run.
    pub generations: usize,
    /// Genotypes drawn into each next generation. `None` keeps the population size.
    pub selection_count: Option<i64>,
    /// RNG seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: 42.0,
            population_size: 100,
            genotype_length: DEFAULT_GENOTYPE_LENGTH,
            generations: 10,
            selection_count: None,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, EvolutionError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::InvalidConfig`] for a non-finite target or a
    /// zero population size or genotype length.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !self.target.is_finite() {
            return Err(EvolutionError::InvalidConfig(format!(
                "target must be finite, got {}",
                self.target
            )));
        }
        if self.population_size == 0 {
            return Err(EvolutionError::InvalidConfig(
                "population size must be positive".to_string(),
            ));
        }
        if self.genotype_length == 0 {
            return Err(EvolutionError::InvalidConfig(
                "genotype length must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of genotypes selected into each next generation.
    #[must_use]
    pub fn effective_selection_count(&self) -> i64 {
        self.selection_count
            .unwrap_or_else(|| i64::try_from(self.population_size).unwrap_or(i64::MAX))
    }

    /// Seeded generator for this configuration, with the seed it was built from.
    #[must_use]
    pub fn rng(&self) -> (SmallRng, u64) {
        let seed = self.seed.unwrap_or_else(rand::random);
        (SmallRng::seed_from_u64(seed), seed)
    }
}

/// Report for a single generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Generation number, starting at 0.
    pub generation: usize,
    /// Objective value of the best genotype.
    pub best_value: f64,
    /// Fitness of the best genotype.
    pub best_fitness: f64,
    /// Decoded expression of the best genotype.
    pub best_expression: String,
    /// The best genotype itself.
    pub best_genotype: Genotype,
    /// Number of genotypes scored this generation.
    pub population_size: usize,
    /// Fitness distribution of the scored population.
    pub stats: SelectionStats,
    /// Whether the best genotype hits the target exactly.
    pub solved: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// An exact solution was found.
    Solved {
        /// Generation in which it was found.
        generation: usize,
        /// Objective value of the solution.
        value: f64,
        /// Decoded expression of the solution.
        expression: String,
    },
    /// The generation budget ran out.
    Exhausted {
        /// Best objective value in the final generation.
        best_value: Option<f64>,
    },
}

/// Overall statistics from an evolution run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionStats {
    /// Seed the run's generator was built from, if known.
    pub seed: Option<u64>,
    /// Reports per generation.
    pub generations: Vec<GenerationReport>,
    /// How the run ended.
    pub outcome: Outcome,
}

/// Error during evolution.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Selection could not produce the next generation.
    #[error("selection failed: {0}")]
    Selection(#[from] SelectionError),
    /// A generation began with no genotypes to score.
    #[error("population is empty at generation {generation}")]
    PopulationExhausted {
        /// The generation that had nothing to score.
        generation: usize,
    },
    /// The configuration cannot be run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration file is not valid JSON.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generation-by-generation driver.
#[derive(Debug)]
pub struct Evolution<R: Rng> {
    config: EvolutionConfig,
    population: Vec<Genotype>,
    generation: usize,
    solved: bool,
    rng: R,
}

impl<R: Rng> Evolution<R> {
    /// Validate the configuration and draw the initial random population.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: EvolutionConfig, mut rng: R) -> Result<Self, EvolutionError> {
        config.validate()?;
        let population =
            random_population(&mut rng, config.population_size, config.genotype_length);
        Ok(Self::with_population(config, population, rng))
    }

    /// Start from an explicit population instead of a random one.
    #[must_use]
    pub fn with_population(config: EvolutionConfig, population: Vec<Genotype>, rng: R) -> Self {
        Self {
            config,
            population,
            generation: 0,
            solved: false,
            rng,
        }
    }

    /// The current population.
    #[must_use]
    pub fn population(&self) -> &[Genotype] {
        &self.population
    }

    /// Number of generations completed.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the run has stopped, by solution or by budget.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.solved || self.generation >= self.config.generations
    }

    /// Run one generation and return its report, or `None` once finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or selection fails.
    pub fn step(&mut self) -> Result<Option<GenerationReport>, EvolutionError> {
        if self.is_finished() {
            return Ok(None);
        }

        let generation = self.generation;
        let scored = score_population(&self.population, self.config.target);
        let report = Self::report(generation, &scored)
            .ok_or(EvolutionError::PopulationExhausted { generation })?;

        debug!(
            "Gen {:>3}: best={} ({}) fitness={:.4} mean={:.4} std={:.4}",
            generation,
            report.best_value,
            report.best_expression,
            report.best_fitness,
            report.stats.mean_fitness,
            report.stats.fitness_std
        );

        self.generation += 1;
        if report.solved {
            self.solved = true;
        } else {
            self.population = select(
                &scored,
                self.config.effective_selection_count(),
                &mut self.rng,
            )?;
        }

        Ok(Some(report))
    }

    fn report(generation: usize, scored: &ScoredPopulation) -> Option<GenerationReport> {
        let best = scored.best()?;
        Some(GenerationReport {
            generation,
            best_value: best.value,
            best_fitness: best.fitness,
            best_expression: decode(&best.genotype).to_string(),
            best_genotype: best.genotype.clone(),
            population_size: scored.len(),
            stats: SelectionStats::from_scored(scored),
            solved: is_solution(best.fitness),
        })
    }

    /// Run to completion, handing each generation's report to `on_generation`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Evolution::step`].
    pub fn run<F>(&mut self, mut on_generation: F) -> Result<EvolutionStats, EvolutionError>
    where
        F: FnMut(&GenerationReport),
    {
        let mut generations = Vec::new();
        while let Some(report) = self.step()? {
            on_generation(&report);
            generations.push(report);
        }

        let outcome = match generations.last() {
            Some(last) if last.solved => Outcome::Solved {
                generation: last.generation,
                value: last.best_value,
                expression: last.best_expression.clone(),
            },
            last => Outcome::Exhausted {
                best_value: last.map(|r| r.best_value),
            },
        };

        match &outcome {
            Outcome::Solved {
                generation,
                expression,
                ..
            } => info!("Solved in generation {generation}: {expression}"),
            Outcome::Exhausted { best_value } => {
                info!("Generation budget exhausted, best value {best_value:?}");
            }
        }

        Ok(EvolutionStats {
            seed: None,
            generations,
            outcome,
        })
    }
}

/// Run a full search with the configuration's own seeded generator.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a generation fails.
pub fn evolve<F>(config: &EvolutionConfig, on_generation: F) -> Result<EvolutionStats, EvolutionError>
where
    F: FnMut(&GenerationReport),
{
    let (rng, seed) = config.rng();
    info!(
        "Starting search for {} (population {}, length {}, {} generations, seed {seed})",
        config.target, config.population_size, config.genotype_length, config.generations
    );

    let mut evolution = Evolution::new(*config, rng)?;
    let mut stats = evolution.run(on_generation)?;
    stats.seed = Some(seed);
    Ok(stats)
}
