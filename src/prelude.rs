//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use driftmc::prelude::*;
//!
//! let mut sim = DriftSimulation::builder()
//!     .replicates(10)
//!     .generations(5)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let dataset = sim.run().unwrap();
//! assert_eq!(dataset.len(), 50);
//! ```

pub use crate::errors::ParameterError;
pub use crate::random::{RandomSource, XoshiroSource};
pub use crate::simulation::{AlleleRecord, DriftBuilder, DriftConfig, DriftDataset, DriftSimulation};
pub use crate::walk::{MetropolisWalk, TargetWeights};
