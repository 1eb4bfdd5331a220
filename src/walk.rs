//! Metropolis random-walk sampling over a bounded integer domain.
//!
//! The sampler draws states approximately in proportion to an arbitrary
//! positive weight vector: a symmetric +/-1 proposal followed by the
//! Metropolis acceptance rule. Out-of-range proposals are rejected in place,
//! so the boundary reflects rather than absorbs, and restricted to
//! [left, right] the chain's stationary distribution is proportional to the
//! target weights.

use crate::errors::ParameterError;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Unnormalized target weights over the integer domain [left, right].
///
/// `weights[s - left]` is the weight of state `s`. Weights need not sum to
/// one, but every state must carry a strictly positive, finite weight: under
/// +/-1 proposals the whole contiguous domain is reachable, and a zero or
/// negative weight would leave an acceptance ratio undefined or trap the
/// chain behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetWeights {
    left: i64,
    right: i64,
    weights: Vec<f64>,
}

impl TargetWeights {
    /// Create a validated weight vector for the domain [left, right].
    pub fn new(left: i64, right: i64, weights: Vec<f64>) -> Result<Self, ParameterError> {
        if left >= right {
            return Err(ParameterError::DomainOrder { left, right });
        }
        let expected = (right - left + 1) as usize;
        if weights.len() != expected {
            return Err(ParameterError::WeightLengthMismatch {
                expected,
                actual: weights.len(),
            });
        }
        for (i, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ParameterError::NonPositiveWeight {
                    state: left + i as i64,
                    weight,
                });
            }
        }
        Ok(Self {
            left,
            right,
            weights,
        })
    }

    /// Equal weight on every state of [left, right].
    pub fn uniform(left: i64, right: i64) -> Result<Self, ParameterError> {
        if left >= right {
            return Err(ParameterError::DomainOrder { left, right });
        }
        let len = (right - left + 1) as usize;
        Ok(Self {
            left,
            right,
            weights: vec![1.0; len],
        })
    }

    /// Left domain bound.
    pub fn left(&self) -> i64 {
        self.left
    }

    /// Right domain bound.
    pub fn right(&self) -> i64 {
        self.right
    }

    /// Number of states in the domain.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// A validated domain always holds at least two states.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Check whether `state` lies inside the domain.
    pub fn contains(&self, state: i64) -> bool {
        (self.left..=self.right).contains(&state)
    }

    /// Weight of `state`. Must only be called with a state inside the domain.
    pub fn weight(&self, state: i64) -> f64 {
        debug_assert!(self.contains(state));
        self.weights[(state - self.left) as usize]
    }
}

/// Single-chain Metropolis sampler targeting a [`TargetWeights`] vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetropolisWalk {
    target: TargetWeights,
    init: i64,
    steps: usize,
}

impl MetropolisWalk {
    /// Create a sampler, validating the start position and step count
    /// eagerly.
    pub fn new(target: TargetWeights, init: i64, steps: usize) -> Result<Self, ParameterError> {
        if steps < 1 {
            return Err(ParameterError::ZeroCount("steps"));
        }
        if !target.contains(init) {
            return Err(ParameterError::StartOutsideDomain {
                start: init,
                left: target.left(),
                right: target.right(),
            });
        }
        Ok(Self {
            target,
            init,
            steps,
        })
    }

    /// Get the target weights.
    pub fn target(&self) -> &TargetWeights {
        &self.target
    }

    /// Get the start position.
    pub fn init(&self) -> i64 {
        self.init
    }

    /// Get the configured number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sample the chain.
    ///
    /// The returned sequence has `steps + 1` states: the first is the start
    /// position, and every Metropolis step appends exactly one state. An
    /// in-range proposal consumes one acceptance variate and is taken iff
    /// `u < target[s'] / target[s]`, so moves that do not decrease the
    /// target weight are always accepted. An out-of-range proposal is
    /// rejected without consuming a variate and the chain stays put for
    /// that step.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        let mut chain = Vec::with_capacity(self.steps + 1);
        let mut state = self.init;
        chain.push(state);
        for _ in 0..self.steps {
            let proposal = state + rng.direction();
            if self.target.contains(proposal) {
                let ratio = self.target.weight(proposal) / self.target.weight(state);
                if rng.uniform() < ratio {
                    state = proposal;
                }
            }
            chain.push(state);
        }
        chain
    }
}
