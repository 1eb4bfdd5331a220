//! Simulation configuration.
//!
//! Parameter structures for the replicated drift simulator, with eager
//! validation and the stock defaults used throughout the crate.

use crate::errors::ParameterError;
use serde::{Deserialize, Serialize};

/// Configuration for the replicated Wright-Fisher simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Number of independent replicate chains
    pub replicates: usize,
    /// Haploid population size
    pub population_size: u64,
    /// Generations simulated per replicate
    pub generations: usize,
    /// Focal-allele count the chains start from (seeds the first draw,
    /// not itself emitted)
    pub initial_count: u64,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            replicates: 1000,
            population_size: 100,
            generations: 20,
            initial_count: 30,
            seed: None,
        }
    }
}

impl DriftConfig {
    /// Create a validated configuration with no seed.
    pub fn new(
        replicates: usize,
        population_size: u64,
        generations: usize,
        initial_count: u64,
    ) -> Result<Self, ParameterError> {
        let config = Self {
            replicates,
            population_size,
            generations,
            initial_count,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every precondition. Runs before any sampling starts.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.replicates < 1 {
            return Err(ParameterError::ZeroCount("replicates"));
        }
        if self.population_size < 1 {
            return Err(ParameterError::ZeroCount("population_size"));
        }
        if self.generations < 1 {
            return Err(ParameterError::ZeroCount("generations"));
        }
        if self.initial_count > self.population_size {
            return Err(ParameterError::CountAboveCapacity {
                count: self.initial_count,
                capacity: self.population_size,
            });
        }
        Ok(())
    }
}
