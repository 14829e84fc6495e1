//! Core data types: genes, gene bounds, genomes, and the target.

use crate::error::{GaError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single character code.
pub type Gene = u8;

/// Inclusive range `[lower, upper]` every gene value is kept within.
///
/// # Examples
///
/// ```
/// use string_ga::ga::GeneBounds;
///
/// let bounds = GeneBounds::UPPERCASE;
/// assert!(bounds.contains(b'Q'));
/// assert!(!bounds.contains(b'q'));
/// assert_eq!(bounds.span(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneBounds {
    /// Smallest allowed gene value.
    pub lower: Gene,
    /// Largest allowed gene value.
    pub upper: Gene,
}

impl GeneBounds {
    /// Printable ASCII, space (32) through tilde (126).
    pub const PRINTABLE: GeneBounds = GeneBounds {
        lower: 32,
        upper: 126,
    };

    /// Uppercase ASCII letters, `A` (65) through `Z` (90).
    pub const UPPERCASE: GeneBounds = GeneBounds {
        lower: b'A',
        upper: b'Z',
    };

    /// Creates a new range, checking `lower < upper`.
    pub fn new(lower: Gene, upper: Gene) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Returns `true` if `gene` lies within the range.
    pub fn contains(&self, gene: Gene) -> bool {
        self.lower <= gene && gene <= self.upper
    }

    /// Number of distinct gene values in the range.
    pub fn span(&self) -> usize {
        usize::from(self.upper) - usize::from(self.lower) + 1
    }

    /// A degenerate or inverted range would let mutation escape it.
    pub fn validate(&self) -> Result<()> {
        if self.lower >= self.upper {
            return Err(GaError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

impl Default for GeneBounds {
    fn default() -> Self {
        Self::PRINTABLE
    }
}

/// The reference sequence the population evolves toward.
///
/// Borrowed from the caller and never modified by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    genes: &'a [Gene],
}

impl<'a> Target<'a> {
    /// Wraps `genes`, checking it is non-empty and inside `bounds`.
    pub fn new(genes: &'a [Gene], bounds: GeneBounds) -> Result<Self> {
        if genes.is_empty() {
            return Err(GaError::EmptyTarget);
        }
        if let Some((position, &value)) = genes
            .iter()
            .enumerate()
            .find(|(_, g)| !bounds.contains(**g))
        {
            return Err(GaError::TargetOutOfBounds {
                position,
                value,
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }
        Ok(Self { genes })
    }

    /// Gene values of the target.
    pub fn genes(&self) -> &'a [Gene] {
        self.genes
    }

    /// Number of genes; every genome in a population has this length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: empty targets are rejected by [`Target::new`].
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A candidate solution: fixed-length genes plus the cached error.
///
/// Error is the sum of squared differences from the target, so lower is
/// better and 0 is an exact match. A genome that has not been evaluated
/// yet carries [`Genome::UNEVALUATED`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genome {
    genes: Vec<Gene>,
    error: u64,
}

impl Genome {
    /// Error carried by genomes that have not been evaluated.
    pub const UNEVALUATED: u64 = u64::MAX;

    /// Creates an unevaluated genome from `genes`.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            error: Self::UNEVALUATED,
        }
    }

    /// Gene values.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Cached error from the last evaluation.
    pub fn error(&self) -> u64 {
        self.error
    }

    pub(crate) fn set_error(&mut self, error: u64) {
        self.error = error;
    }

    /// Returns `true` if this genome matched its target exactly.
    pub fn is_exact(&self) -> bool {
        self.error == 0
    }

    /// Overwrites this genome with the genes and error of `other`,
    /// reusing the existing allocation.
    pub(crate) fn copy_from(&mut self, other: &Genome) {
        self.genes.clear();
        self.genes.extend_from_slice(&other.genes);
        self.error = other.error;
    }

    /// One-line summary: `genome: [ TEXT ] error: N`.
    pub fn summary(&self) -> String {
        format!("genome: [ {} ] error: {}", self, self.error)
    }
}

/// Renders the genes as text, replacing invalid UTF-8 lossily.
impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.genes))
    }
}
