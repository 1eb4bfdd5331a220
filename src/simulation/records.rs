//! Merged generation records across replicates.

use serde::{Deserialize, Serialize};

/// One sampled state: which replicate, which generation, which allele count.
///
/// Serialized field names follow the downstream tabular convention
/// (`rep`, `t`, `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlleleRecord {
    /// Replicate id, 1-based
    #[serde(rename = "rep")]
    pub replicate: u32,
    /// Generation index, 1-based
    #[serde(rename = "t")]
    pub generation: u32,
    /// Focal-allele count, in [0, N]
    #[serde(rename = "x")]
    pub count: u64,
}

/// The merged output of a replicated drift run.
///
/// Holds replicates x generations records in replicate-major order, every
/// (replicate, generation) pair present exactly once. The merge is purely
/// structural; nothing is filtered, deduplicated, or resampled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftDataset {
    replicates: usize,
    generations: usize,
    records: Vec<AlleleRecord>,
}

impl DriftDataset {
    /// Merge per-replicate trajectories into one ordered record collection.
    ///
    /// Trajectory `r` contributes records (r+1, 1..=T, x) in generation
    /// order. All trajectories are expected to have equal length.
    pub fn from_trajectories(trajectories: &[Vec<u64>]) -> Self {
        let replicates = trajectories.len();
        let generations = trajectories.first().map_or(0, Vec::len);
        let mut records = Vec::with_capacity(replicates * generations);
        for (r, trajectory) in trajectories.iter().enumerate() {
            for (t, &count) in trajectory.iter().enumerate() {
                records.push(AlleleRecord {
                    replicate: r as u32 + 1,
                    generation: t as u32 + 1,
                    count,
                });
            }
        }
        Self {
            replicates,
            generations,
            records,
        }
    }

    /// Get all records as a slice.
    pub fn records(&self) -> &[AlleleRecord] {
        &self.records
    }

    /// Total number of records (replicates x generations).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of replicates merged into this dataset.
    pub fn replicates(&self) -> usize {
        self.replicates
    }

    /// Number of generations per replicate.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Look up the count for a (replicate, generation) pair, both 1-based.
    pub fn count(&self, replicate: u32, generation: u32) -> Option<u64> {
        if replicate == 0 || generation == 0 {
            return None;
        }
        let r = replicate as usize - 1;
        let t = generation as usize - 1;
        if r >= self.replicates || t >= self.generations {
            return None;
        }
        Some(self.records[r * self.generations + t].count)
    }

    /// Iterate over the records in replicate-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlleleRecord> {
        self.records.iter()
    }
}
