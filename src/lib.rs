//! # driftmc
//!
//! Monte Carlo samplers for discrete-state allele-frequency dynamics.
//!
//! Two samplers make up the crate:
//!
//! - [`simulation::DriftSimulation`] runs replicated Wright-Fisher chains:
//!   independent Markov chains over {0, ..., N} whose per-generation allele
//!   count is a binomial resample of the previous one, merged into a single
//!   (replicate, generation, count) dataset.
//! - [`walk::MetropolisWalk`] runs a single biased random walk over a bounded
//!   integer domain, using the Metropolis acceptance rule to sample
//!   approximately in proportion to an arbitrary positive weight vector.
//!
//! All stochastic decisions route through [`random::RandomSource`], so runs
//! are reproducible from an explicit seed and replicates draw from
//! independent, non-overlapping streams.

pub mod errors;
pub mod prelude;
pub mod random;
pub mod simulation;
pub mod walk;

pub use random::{RandomSource, XoshiroSource};
