//! Builder pattern for the drift simulator.
//!
//! Provides a fluent API for configuring and creating simulations, with the
//! stock defaults filled in for anything left unset and validation at build
//! time.

use crate::errors::ParameterError;
use crate::simulation::{DriftConfig, DriftSimulation};

/// Builder for constructing [`DriftSimulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use driftmc::simulation::DriftSimulation;
///
/// let sim = DriftSimulation::builder()
///     .replicates(200)
///     .population_size(50)
///     .generations(10)
///     .initial_count(25)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(sim.config().replicates, 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriftBuilder {
    replicates: Option<usize>,
    population_size: Option<u64>,
    generations: Option<usize>,
    initial_count: Option<u64>,
    seed: Option<u64>,
}

impl DriftBuilder {
    /// Create a new builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of replicate chains (default: 1000).
    pub fn replicates(mut self, replicates: usize) -> Self {
        self.replicates = Some(replicates);
        self
    }

    /// Set the haploid population size (default: 100).
    pub fn population_size(mut self, population_size: u64) -> Self {
        self.population_size = Some(population_size);
        self
    }

    /// Set the number of generations per replicate (default: 20).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the initial focal-allele count (default: 30).
    pub fn initial_count(mut self, initial_count: u64) -> Self {
        self.initial_count = Some(initial_count);
        self
    }

    /// Set the RNG seed (default: seeded from entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the simulator, validating the assembled configuration.
    pub fn build(self) -> Result<DriftSimulation, ParameterError> {
        let defaults = DriftConfig::default();
        let config = DriftConfig {
            replicates: self.replicates.unwrap_or(defaults.replicates),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            initial_count: self.initial_count.unwrap_or(defaults.initial_count),
            seed: self.seed,
        };
        DriftSimulation::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParameterError;

    #[test]
    fn test_builder_applies_defaults() {
        let sim = DriftBuilder::new().seed(1).build().unwrap();
        let config = sim.config();
        assert_eq!(config.replicates, 1000);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 20);
        assert_eq!(config.initial_count, 30);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_builder_overrides() {
        let sim = DriftBuilder::new()
            .replicates(7)
            .population_size(11)
            .generations(3)
            .initial_count(5)
            .build()
            .unwrap();
        let config = sim.config();
        assert_eq!(config.replicates, 7);
        assert_eq!(config.population_size, 11);
        assert_eq!(config.generations, 3);
        assert_eq!(config.initial_count, 5);
    }

    #[test]
    fn test_builder_rejects_invalid_combination() {
        let err = DriftBuilder::new()
            .population_size(10)
            .initial_count(11)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::CountAboveCapacity {
                count: 11,
                capacity: 10,
            }
        );
    }

    #[test]
    fn test_builder_rejects_zero_replicates() {
        assert!(DriftBuilder::new().replicates(0).build().is_err());
    }
}
