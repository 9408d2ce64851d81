//! Genotype representation.
//!
//! A genotype is a fixed-length sequence of 4-bit symbolic codes. Codes 0-9
//! are digits, 10-13 are the operators `+ - * /`, and 14-15 carry no meaning.
//! Genotypes are immutable once built; each generation replaces them wholesale.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest value a symbolic code can take (codes are 4 bits wide).
pub const MAX_CODE: u8 = 0xF;

/// Genotype length used when nothing else is configured.
pub const DEFAULT_GENOTYPE_LENGTH: usize = 10;

/// Error building a genotype from raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenotypeError {
    /// A code did not fit in 4 bits.
    #[error("gene {index} has code {code}, expected a value in 0..={MAX_CODE}")]
    CodeOutOfRange {
        /// Position of the offending gene.
        index: usize,
        /// The rejected code.
        code: u8,
    },
}

/// A candidate expression, encoded as symbolic codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Genotype {
    codes: Vec<u8>,
}

impl Genotype {
    /// Build a genotype from raw codes.
    ///
    /// # Errors
    ///
    /// Returns [`GenotypeError::CodeOutOfRange`] if any code exceeds [`MAX_CODE`].
    pub fn new(codes: Vec<u8>) -> Result<Self, GenotypeError> {
        if let Some((index, &code)) = codes.iter().enumerate().find(|(_, c)| **c > MAX_CODE) {
            return Err(GenotypeError::CodeOutOfRange { index, code });
        }
        Ok(Self { codes })
    }

    /// Create a random genotype with every gene drawn uniformly from `0..=15`.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        let codes = (0..length).map(|_| rng.gen_range(0..=MAX_CODE)).collect();
        Self { codes }
    }

    /// The raw symbolic codes.
    #[must_use]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Number of genes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the genotype has no genes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Genotype {
    type Error = GenotypeError;

    fn try_from(codes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

impl From<Genotype> for Vec<u8> {
    fn from(genotype: Genotype) -> Self {
        genotype.codes
    }
}

/// Create a population of random genotypes.
#[must_use]
pub fn random_population<R: Rng>(rng: &mut R, size: usize, length: usize) -> Vec<Genotype> {
    (0..size).map(|_| Genotype::random(rng, length)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_random_genotype_codes_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let genotype = Genotype::random(&mut rng, DEFAULT_GENOTYPE_LENGTH);
            assert_eq!(genotype.len(), DEFAULT_GENOTYPE_LENGTH);
            assert!(genotype.codes().iter().all(|&c| c <= MAX_CODE));
        }
    }

    #[test]
    fn test_random_genotype_covers_all_codes() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 16];
        for _ in 0..200 {
            for &c in Genotype::random(&mut rng, 10).codes() {
                seen[usize::from(c)] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_new_rejects_wide_codes() {
        let err = Genotype::new(vec![1, 2, 16]).unwrap_err();
        assert_eq!(err, GenotypeError::CodeOutOfRange { index: 2, code: 16 });
    }

    #[test]
    fn test_serde_validates_codes() {
        let genotype = Genotype::new(vec![4, 10, 2]).unwrap();
        let json = serde_json::to_string(&genotype).unwrap();
        assert_eq!(json, "[4,10,2]");
        assert_eq!(serde_json::from_str::<Genotype>(&json).unwrap(), genotype);
        assert!(serde_json::from_str::<Genotype>("[99]").is_err());
    }

    #[test]
    fn test_random_population_size() {
        let mut rng = SmallRng::seed_from_u64(1);
        let population = random_population(&mut rng, 100, 10);
        assert_eq!(population.len(), 100);
    }
}
