//! Replicated drift simulation.
//!
//! This module provides the Wright-Fisher simulation engine, its
//! configuration and builder, and the merged record collection the engine
//! produces:
//!
//! - [`DriftSimulation`]: the engine driving independent replicate chains.
//! - [`DriftConfig`] / [`DriftBuilder`]: validated configuration.
//! - [`DriftDataset`] / [`AlleleRecord`]: the joined per-generation output.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod records;

pub use builder::DriftBuilder;
pub use engine::DriftSimulation;
pub use parameters::DriftConfig;
pub use records::{AlleleRecord, DriftDataset};
