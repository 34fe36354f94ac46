use super::Nucleotide;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of bases in every randomly generated P. aequor strand.
pub const STRAND_LEN: usize = 15;

/// Errors from strand construction and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrandError {
    /// Position-wise comparison requires equal lengths; mismatches are
    /// rejected rather than truncated.
    #[error("strand lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// A character outside the A/T/C/G alphabet.
    #[error("invalid character in strand: '{0}'")]
    InvalidChar(char),
}

/// A DNA strand owned by a single organism.
///
/// Strands are value types: inheritance at reproduction clones the parent's
/// strand, it never aliases it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strand {
    bases: Vec<Nucleotide>,
}

impl Strand {
    /// Create a strand from explicit bases.
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    /// Create a random strand of [`STRAND_LEN`] independent uniform draws.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bases = (0..STRAND_LEN).map(|_| Nucleotide::random(rng)).collect();
        Self { bases }
    }

    /// Create a uniform strand of `len` copies of `base`.
    pub fn uniform(base: Nucleotide, len: usize) -> Self {
        Self {
            bases: vec![base; len],
        }
    }

    /// Parse a strand from its character representation.
    pub fn from_str(s: &str) -> Result<Self, StrandError> {
        let bases: Result<Vec<Nucleotide>, _> = s
            .chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(StrandError::InvalidChar(c))
            })
            .collect();

        Ok(Self { bases: bases? })
    }

    /// Get length.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Check if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Get base at position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.bases.get(index).copied()
    }

    /// Get all bases as a slice.
    #[inline]
    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    /// Count of strong (C/G) bases.
    pub fn strong_count(&self) -> usize {
        self.bases.iter().filter(|b| b.is_strong()).count()
    }

    /// Fraction of strong (C/G) bases, 0.0 for an empty strand.
    pub fn gc_fraction(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        self.strong_count() as f64 / self.bases.len() as f64
    }

    /// Substitute one uniformly random position with a different uniformly
    /// random base. Returns the mutated position, or `None` for an empty
    /// strand.
    pub fn point_mutation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.bases.is_empty() {
            return None;
        }
        let pos = rng.random_range(0..self.bases.len());
        self.bases[pos] = Nucleotide::random_excluding(rng, self.bases[pos]);
        Some(pos)
    }

    /// Position-wise similarity with another strand: the fraction of
    /// positions holding equal bases.
    ///
    /// Symmetric, and `similarity(a, a) == 1.0` for any strand (two empty
    /// strands are trivially identical). Strands of different lengths are an
    /// error, never truncated.
    pub fn similarity(&self, other: &Self) -> Result<f64, StrandError> {
        if self.len() != other.len() {
            return Err(StrandError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if self.is_empty() {
            return Ok(1.0);
        }

        let matches = self
            .bases
            .iter()
            .zip(other.bases.iter())
            .filter(|(a, b)| a == b)
            .count();

        Ok(matches as f64 / self.len() as f64)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}
