//! Replicated Wright-Fisher simulation engine.
//!
//! Each replicate is an independent homogeneous Markov chain over
//! {0, ..., N}: the allele count at generation t is drawn as
//! Binomial(N, x_{t-1} / N), starting from the configured initial count.
//! The states 0 and N are absorbing: Binomial(N, 0) and Binomial(N, 1)
//! return them unchanged, so a chain that fixes stays fixed.

use crate::errors::ParameterError;
use crate::random::{RandomSource, XoshiroSource};
use crate::simulation::{DriftBuilder, DriftConfig, DriftDataset};
use rayon::prelude::*;

/// Replicated Wright-Fisher drift simulator.
///
/// Replicates are embarrassingly parallel: each runs on its own
/// non-overlapping random stream, and the joined output is identical
/// regardless of worker scheduling.
#[derive(Debug)]
pub struct DriftSimulation {
    config: DriftConfig,
    rng: XoshiroSource,
}

impl DriftSimulation {
    /// Create a simulator, validating the configuration eagerly.
    pub fn new(config: DriftConfig) -> Result<Self, ParameterError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => XoshiroSource::seed_from_u64(seed),
            None => XoshiroSource::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Start building a simulator with the stock defaults.
    pub fn builder() -> DriftBuilder {
        DriftBuilder::new()
    }

    /// Get the configuration.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Run every replicate and merge the trajectories into one dataset.
    pub fn run(&mut self) -> Result<DriftDataset, ParameterError> {
        let trajectories = self.sample_trajectories()?;
        Ok(DriftDataset::from_trajectories(&trajectories))
    }

    /// Sample all replicate trajectories in parallel, one random stream per
    /// replicate, joined in replicate order.
    pub fn sample_trajectories(&mut self) -> Result<Vec<Vec<u64>>, ParameterError> {
        let population_size = self.config.population_size;
        let generations = self.config.generations;
        let initial_count = self.config.initial_count;

        self.rng
            .streams(self.config.replicates)
            .into_par_iter()
            .map(|mut rng| Self::sample_chain(&mut rng, population_size, generations, initial_count))
            .collect()
    }

    /// Drive one chain for `generations` steps.
    ///
    /// The starting count seeds the first draw but is not part of the
    /// returned trajectory.
    fn sample_chain(
        rng: &mut dyn RandomSource,
        population_size: u64,
        generations: usize,
        initial_count: u64,
    ) -> Result<Vec<u64>, ParameterError> {
        let mut states = vec![0u64; generations];
        let mut x = initial_count;
        for state in states.iter_mut() {
            x = rng.binomial(population_size, x as f64 / population_size as f64)?;
            *state = x;
        }
        Ok(states)
    }
}
