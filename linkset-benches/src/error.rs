//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use linkset_core::DisjointSetError;

use crate::graph::SyntheticGraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation rejected its configuration.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// A core operation failed while preparing inputs.
    #[error("disjoint set operation failed: {0}")]
    Core(#[from] DisjointSetError),
}
