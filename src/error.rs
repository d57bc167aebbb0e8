//! Errors shared by every generator.

/// Why an argument was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// A bound was fractional or non-finite.
    NonIntegerBound(f64),
    /// A bound (or the span between two bounds) does not fit in `i64`.
    BoundOutOfRange,
    /// `max < min`.
    InvertedBounds { min: i64, max: i64 },
    /// Sample size below zero.
    NegativeSampleSize(i64),
    /// More distinct positions requested than the population has.
    SampleLargerThanPopulation { requested: usize, available: usize },
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerBound(v) => write!(f, "min and max should be integers (got {v})"),
            Self::BoundOutOfRange => write!(f, "bounds must fit in a 64-bit signed integer"),
            Self::InvertedBounds { min, max } => {
                write!(f, "max must be >= min (got min={min}, max={max})")
            }
            Self::NegativeSampleSize(k) => write!(f, "sample size must be >= 0 (got {k})"),
            Self::SampleLargerThanPopulation {
                requested,
                available,
            } => write!(
                f,
                "sample size {requested} exceeds population size {available}"
            ),
        }
    }
}

/// Errors returned by the generators.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument was out of its domain.
    InvalidArgument(ArgumentError),
    /// A pick (or a non-empty sample) was requested from an empty population.
    EmptyPopulation,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Self::EmptyPopulation => write!(f, "population is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::EmptyPopulation => None,
        }
    }
}

impl std::error::Error for ArgumentError {}

impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Self::InvalidArgument(e)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
