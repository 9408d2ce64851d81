//! Fitness-proportionate ("roulette wheel") selection.
//!
//! Each draw samples `u` uniformly from `[0, 1)` and picks the first entry whose
//! cumulative normalized fitness reaches `u`, scanning in ascending fitness
//! order. Draws are independent, so a genotype may be picked many times.

// Selection uses intentional casts for statistics
#![allow(clippy::cast_precision_loss)]

use crate::gp::fitness::{ScoredPopulation, is_solution};
use crate::gp::genome::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error during selection.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionError {
    /// A negative number of draws was requested.
    #[error("invalid selection count {0}: must not be negative")]
    NegativeCount(i64),
    /// Fitness scores do not form a usable distribution.
    #[error("cannot select from degenerate fitness distribution (total fitness {total})")]
    DegenerateDistribution {
        /// Sum of all fitness scores.
        total: f64,
    },
}

/// Cumulative distribution over a scored population.
#[derive(Debug, Clone)]
struct Wheel<'a> {
    slots: Vec<(f64, &'a Genotype)>,
    /// Highest-fitness genotype, taken when rounding leaves every slot below the draw.
    last: &'a Genotype,
}

impl<'a> Wheel<'a> {
    fn new(scored: &'a ScoredPopulation) -> Result<Self, SelectionError> {
        let total = scored.total_fitness();
        let Some(best) = scored.best() else {
            return Err(SelectionError::DegenerateDistribution { total });
        };
        if !total.is_finite() || total <= 0.0 {
            return Err(SelectionError::DegenerateDistribution { total });
        }

        let mut cumulative = 0.0;
        let slots = scored
            .iter()
            .map(|entry| {
                cumulative += entry.fitness / total;
                (cumulative, &entry.genotype)
            })
            .collect();

        Ok(Self {
            slots,
            last: &best.genotype,
        })
    }

    /// First slot whose cumulative weight reaches `u`.
    fn spin(&self, u: f64) -> &'a Genotype {
        self.slots
            .iter()
            .find(|(cumulative, _)| *cumulative >= u)
            .map_or(self.last, |(_, genotype)| *genotype)
    }
}

/// Draw `count` genotypes with probability proportional to fitness.
///
/// # Errors
///
/// Returns [`SelectionError::NegativeCount`] before any sampling if `count` is
/// negative, and [`SelectionError::DegenerateDistribution`] if `count > 0` and
/// the population is empty or its fitness total is zero, NaN or infinite.
pub fn select<R: Rng>(
    scored: &ScoredPopulation,
    count: i64,
    rng: &mut R,
) -> Result<Vec<Genotype>, SelectionError> {
    let count = usize::try_from(count).map_err(|_| SelectionError::NegativeCount(count))?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let wheel = Wheel::new(scored)?;
    let selected = (0..count)
        .map(|_| wheel.spin(rng.gen_range(0.0..1.0)).clone())
        .collect();

    Ok(selected)
}

/// Summary of a scored population's fitness.
///
/// An exact solution scores positive infinity, so mean and spread are taken
/// over the finite scores only and solutions are counted separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Mean of the finite fitness scores.
    pub mean_fitness: f64,
    /// Highest fitness, infinite when a solution is present.
    pub best_fitness: f64,
    /// Lowest fitness.
    pub worst_fitness: f64,
    /// Population standard deviation of the finite fitness scores.
    pub fitness_std: f64,
    /// Number of genotypes that hit the target exactly.
    pub solutions: usize,
}

impl SelectionStats {
    /// Summarize raw fitness scores. All fields are zero for an empty slice.
    #[must_use]
    pub fn from_fitness(fitness: &[f64]) -> Self {
        let mut stats = Self {
            mean_fitness: 0.0,
            best_fitness: 0.0,
            worst_fitness: 0.0,
            fitness_std: 0.0,
            solutions: 0,
        };
        let (Some(&first), Some(&last)) = (fitness.first(), fitness.last()) else {
            return stats;
        };
        stats.best_fitness = first;
        stats.worst_fitness = last;

        // Welford's running mean and sum of squared deviations
        let mut finite = 0usize;
        let mut m2 = 0.0;
        for &f in fitness {
            stats.best_fitness = stats.best_fitness.max(f);
            stats.worst_fitness = stats.worst_fitness.min(f);
            if is_solution(f) {
                stats.solutions += 1;
            } else if f.is_finite() {
                finite += 1;
                let delta = f - stats.mean_fitness;
                stats.mean_fitness += delta / finite as f64;
                m2 += delta * (f - stats.mean_fitness);
            }
        }
        if finite > 0 {
            stats.fitness_std = (m2 / finite as f64).sqrt();
        }

        stats
    }

    /// Summarize a scored population.
    #[must_use]
    pub fn from_scored(scored: &ScoredPopulation) -> Self {
        Self::from_fitness(&scored.fitness_values())
    }
}
