//! Benchmark support crate for linkset.
//!
//! Provides seeded synthetic graphs, union sequences and parameter types
//! used by the Criterion benchmarks for Kruskal and the disjoint set.

pub mod error;
pub mod graph;
pub mod params;
