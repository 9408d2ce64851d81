//! Fitness scoring.
//!
//! Fitness rewards closeness to the target: `1 / |target - value|`. It is
//! unbounded, and an exact match divides by zero to give positive infinity,
//! which is the sentinel for a solved search. Zero and NaN values are treated
//! as carrying no signal and score `0.0`.

use crate::gp::codec::decode;
use crate::gp::genome::Genotype;
use crate::gp::objective::evaluate;
use serde::Serialize;
use std::cmp::Ordering;

/// Score an objective value against the target. Never negative.
#[must_use]
pub fn fitness(value: f64, target: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        return 0.0;
    }
    1.0 / (target - value).abs()
}

/// Whether a fitness score marks an exact solution.
#[must_use]
pub fn is_solution(fitness: f64) -> bool {
    fitness.is_infinite() && fitness.is_sign_positive()
}

/// A genotype together with its objective value and fitness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGenotype {
    /// Fitness against the target.
    pub fitness: f64,
    /// Objective value of the decoded expression.
    pub value: f64,
    /// The scored genotype.
    pub genotype: Genotype,
}

/// Scored genotypes ordered by ascending fitness.
///
/// Duplicate fitness values are allowed and keep insertion order, so the
/// collection behaves like an ordered multimap from fitness to genotype.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredPopulation {
    entries: Vec<ScoredGenotype>,
}

impl ScoredPopulation {
    /// Create an empty scored population.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry after every entry with fitness less than or equal to it.
    pub fn insert(&mut self, entry: ScoredGenotype) {
        let at = self
            .entries
            .partition_point(|e| e.fitness.total_cmp(&entry.fitness) != Ordering::Greater);
        self.entries.insert(at, entry);
    }

    /// Insert a genotype with a known fitness and no recorded objective value.
    pub fn insert_with_fitness(&mut self, fitness: f64, genotype: Genotype) {
        self.insert(ScoredGenotype {
            fitness,
            value: f64::NAN,
            genotype,
        });
    }

    /// Entries in ascending fitness order.
    #[must_use]
    pub fn entries(&self) -> &[ScoredGenotype] {
        &self.entries
    }

    /// Iterate in ascending fitness order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredGenotype> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest-fitness entry. Among equal maxima, the last inserted.
    #[must_use]
    pub fn best(&self) -> Option<&ScoredGenotype> {
        self.entries.last()
    }

    /// Sum of all fitness scores.
    #[must_use]
    pub fn total_fitness(&self) -> f64 {
        self.entries.iter().map(|e| e.fitness).sum()
    }

    /// Fitness scores in ascending order.
    #[must_use]
    pub fn fitness_values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.fitness).collect()
    }
}

impl FromIterator<ScoredGenotype> for ScoredPopulation {
    fn from_iter<I: IntoIterator<Item = ScoredGenotype>>(iter: I) -> Self {
        let mut scored = Self::new();
        for entry in iter {
            scored.insert(entry);
        }
        scored
    }
}

impl<'a> IntoIterator for &'a ScoredPopulation {
    type Item = &'a ScoredGenotype;
    type IntoIter = std::slice::Iter<'a, ScoredGenotype>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Decode, evaluate and score a single genotype.
#[must_use]
pub fn score_genotype(genotype: &Genotype, target: f64) -> ScoredGenotype {
    let value = evaluate(&decode(genotype));
    ScoredGenotype {
        fitness: fitness(value, target),
        value,
        genotype: genotype.clone(),
    }
}

/// Score every genotype of a population.
#[must_use]
pub fn score_population(population: &[Genotype], target: f64) -> ScoredPopulation {
    population
        .iter()
        .map(|genotype| score_genotype(genotype, target))
        .collect()
}
