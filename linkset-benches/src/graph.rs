//! Seeded synthetic inputs for the Kruskal and disjoint-set benchmarks.

use std::fmt;

use linkset_core::{EdgeList, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Largest edge weight drawn by [`generate_graph`].
pub const MAX_WEIGHT: u32 = 10_000;

/// Errors raised by the synthetic generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntheticGraphError {
    /// A graph needs at least one vertex.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// `vertex_count * edges_per_vertex` does not fit in `usize`.
    #[error("{vertex_count} vertices with {edges_per_vertex} edges each overflows usize")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edges per vertex.
        edges_per_vertex: usize,
    },
}

/// Configuration for [`generate_graph`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning path.
    pub edges_per_vertex: usize,
    /// RNG seed; equal configurations produce equal graphs.
    pub seed: u64,
}

/// Generates a connected graph: a spanning path over a shuffled vertex
/// order, plus `vertex_count * edges_per_vertex` random edges. Weights are
/// uniform in `0..=MAX_WEIGHT`; the random edges may repeat pairs or be
/// self-loops.
///
/// # Errors
/// Returns [`SyntheticGraphError`] when the configuration is empty or the
/// edge count overflows.
///
/// # Examples
/// ```
/// use linkset_benches::graph::{SyntheticGraphConfig, generate_graph};
/// use linkset_core::WeightedGraph;
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     edges_per_vertex: 2,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edges().len(), 9 + 20);
/// # Ok::<(), linkset_benches::graph::SyntheticGraphError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<EdgeList<u32>, SyntheticGraphError> {
    let vertex_count = config.vertex_count;
    if vertex_count == 0 {
        return Err(SyntheticGraphError::ZeroVertices);
    }
    let extra_edges = vertex_count.checked_mul(config.edges_per_vertex).ok_or(
        SyntheticGraphError::EdgeCountOverflow {
            vertex_count,
            edges_per_vertex: config.edges_per_vertex,
        },
    )?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(extra_edges.saturating_add(vertex_count));
    for (&source, &target) in order.iter().zip(order.iter().skip(1)) {
        edges.push(WeightedEdge::new(source, target, rng.gen_range(0..=MAX_WEIGHT)));
    }
    for _ in 0..extra_edges {
        edges.push(WeightedEdge::new(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..=MAX_WEIGHT),
        ));
    }
    Ok(EdgeList::new(vertex_count, edges))
}

/// Order in which [`union_sequence`] issues unions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnionPattern {
    /// `(i, i + 1)`: every union absorbs a singleton into the growing set.
    Chain,
    /// `(0, i)`: the same absorbing root every time.
    Star,
    /// Pairs at doubling strides, so every union merges equal-sized sets and
    /// each element moves once per level.
    Balanced,
    /// `element_count` uniformly random pairs.
    Random,
}

impl fmt::Display for UnionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chain => "chain",
            Self::Star => "star",
            Self::Balanced => "balanced",
            Self::Random => "random",
        })
    }
}

/// Builds the `(left, right)` pairs for `pattern` over `element_count`
/// elements. `seed` only affects [`UnionPattern::Random`].
#[must_use]
pub fn union_sequence(pattern: UnionPattern, element_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let last = element_count.saturating_sub(1);
    match pattern {
        UnionPattern::Chain => (0..last).map(|id| (id, id + 1)).collect(),
        UnionPattern::Star => (1..element_count).map(|id| (0, id)).collect(),
        UnionPattern::Balanced => balanced_pairs(element_count),
        UnionPattern::Random => {
            if element_count == 0 {
                return Vec::new();
            }
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..element_count)
                .map(|_| (rng.gen_range(0..element_count), rng.gen_range(0..element_count)))
                .collect()
        }
    }
}

fn balanced_pairs(element_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(element_count);
    let mut stride = 1_usize;
    while stride < element_count {
        let Some(block) = stride.checked_mul(2) else {
            break;
        };
        pairs.extend(
            (0..element_count)
                .step_by(block)
                .filter_map(|left| left.checked_add(stride))
                .filter(|&right| right < element_count)
                .map(|right| (right - stride, right)),
        );
        stride = block;
    }
    pairs
}
