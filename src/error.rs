//! Error types.
//!
//! The engine has no runtime failure modes: every error is a configuration
//! problem detected when a [`Population`](crate::ga::Population) is created.

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("target must contain at least one gene")]
    EmptyTarget,

    #[error("gene count {gene_count} does not match target length {target_len}")]
    GeneCountMismatch { gene_count: usize, target_len: usize },

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("tournament_size must be at least 2, got {0}")]
    TournamentTooSmall(usize),

    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("gene bounds must satisfy lower < upper, got [{lower}, {upper}]")]
    InvalidBounds { lower: u8, upper: u8 },

    #[error("target gene {value} at position {position} lies outside [{lower}, {upper}]")]
    TargetOutOfBounds {
        position: usize,
        value: u8,
        lower: u8,
        upper: u8,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
