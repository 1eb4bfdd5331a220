use std::error;
use std::fmt;

/// Invalid-parameter conditions raised before any sampling starts.
///
/// Every precondition violation maps to one of these variants. Validation is
/// eager: a configuration that passes it cannot fail mid-chain, so no partial
/// simulation is ever started and nothing is silently clamped or corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A count parameter that must be at least 1 was zero.
    ZeroCount(&'static str),
    /// The initial allele count exceeds the population size.
    CountAboveCapacity { count: u64, capacity: u64 },
    /// A probability was outside [0, 1] or not finite.
    InvalidProbability { name: &'static str, value: f64 },
    /// A domain whose left bound is not below its right bound.
    DomainOrder { left: i64, right: i64 },
    /// A walk start position outside [left, right].
    StartOutsideDomain { start: i64, left: i64, right: i64 },
    /// Target weight vector length does not match the domain size.
    WeightLengthMismatch { expected: usize, actual: usize },
    /// A target weight that is zero, negative, or not finite.
    NonPositiveWeight { state: i64, weight: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount(name) => {
                write!(f, "Invalid parameter: {name} must be at least 1")
            }
            Self::CountAboveCapacity { count, capacity } => {
                write!(
                    f,
                    "Initial allele count {count} exceeds population size {capacity}"
                )
            }
            Self::InvalidProbability { name, value } => {
                write!(
                    f,
                    "Invalid probability for {name}: {value} (must be between 0.0 and 1.0)"
                )
            }
            Self::DomainOrder { left, right } => {
                write!(
                    f,
                    "Invalid domain [{left}, {right}]: left bound must be below right bound"
                )
            }
            Self::StartOutsideDomain { start, left, right } => {
                write!(f, "Start position {start} outside domain [{left}, {right}]")
            }
            Self::WeightLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Target weight length mismatch: domain has {expected} states, got {actual} weights"
                )
            }
            Self::NonPositiveWeight { state, weight } => {
                write!(
                    f,
                    "Target weight for state {state} is {weight} (must be positive and finite)"
                )
            }
        }
    }
}

impl error::Error for ParameterError {}
