//! Benchmark parameter types, displayed as Criterion benchmark ids.

use std::fmt;

use crate::graph::UnionPattern;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Debug)]
pub struct KruskalBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges generated per vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}

/// Parameters for a union-sequence benchmark run.
#[derive(Clone, Debug)]
pub struct UnionBenchParams {
    /// Number of elements in the set.
    pub element_count: usize,
    /// Order in which unions are issued.
    pub pattern: UnionPattern,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.element_count, self.pattern)
    }
}
