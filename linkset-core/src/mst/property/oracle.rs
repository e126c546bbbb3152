//! Prim's-algorithm oracle for MST property verification.
//!
//! Grows one tree per component from the lowest unvisited vertex using a
//! binary heap. It shares no code with the Kruskal builder, so agreement on
//! total weight is meaningful even though the chosen edges may differ when
//! weights tie.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{GraphEdge, WeightedEdge};

/// Summary of a minimum spanning forest computed by [`prim_forest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Sum of accepted edge weights.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of trees, counting isolated vertices.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// Endpoints outside `0..vertex_count` are skipped; the property suites
/// never generate them.
pub(super) fn prim_forest(vertex_count: usize, edges: &[WeightedEdge<u32>]) -> OracleForest {
    let mut adjacency: Vec<Vec<(usize, u32)>> = vec![Vec::new(); vertex_count];
    for edge in edges {
        let (source, target) = (edge.source(), edge.target());
        if source == target || source >= vertex_count || target >= vertex_count {
            continue;
        }
        adjacency[source].push((target, edge.weight()));
        adjacency[target].push((source, edge.weight()));
    }

    let mut visited = vec![false; vertex_count];
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }
        forest.component_count += 1;
        visited[start] = true;
        let mut frontier = BinaryHeap::new();
        push_neighbours(&mut frontier, &adjacency[start]);

        while let Some(Reverse((weight, vertex))) = frontier.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            forest.total_weight += u64::from(weight);
            forest.edge_count += 1;
            push_neighbours(&mut frontier, &adjacency[vertex]);
        }
    }

    forest
}

fn push_neighbours(frontier: &mut BinaryHeap<Reverse<(u32, usize)>>, neighbours: &[(usize, u32)]) {
    for &(vertex, weight) in neighbours {
        frontier.push(Reverse((weight, vertex)));
    }
}
