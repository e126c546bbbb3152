//! Structural invariants of every forest the builder returns:
//!
//! - **Acyclicity**: each accepted edge joins two separate trees.
//! - **Edge count**: `V - C` edges for `C` components.
//! - **Connectivity**: the forest has as many components as the input.
//! - **Order**: accepted weights never decrease.
//! - **Provenance**: every accepted edge is one of the input edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{GraphEdge, WeightedEdge};

use super::equivalence::build_forest;
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = build_forest(fixture)?;
    let edges = forest.edges();

    let forest_components = validate_acyclicity(fixture.vertex_count, edges)?;
    if forest_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "reported {} components but edges form {forest_components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }

    let expected_edges = fixture.vertex_count.saturating_sub(forest.component_count());
    if edges.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected_edges} ({})",
            edges.len(),
            fixture.describe(),
        )));
    }

    let input_components = count_components(fixture.vertex_count, &fixture.edges);
    if input_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "input has {input_components} components, forest has {} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }

    if let Some(index) = edges
        .windows(2)
        .position(|pair| pair[0].weight() > pair[1].weight())
    {
        return Err(TestCaseError::fail(format!(
            "edge {} is lighter than the edge accepted before it ({})",
            index + 1,
            fixture.describe(),
        )));
    }

    if let Some(stray) = edges.iter().find(|edge| !fixture.edges.contains(edge)) {
        return Err(TestCaseError::fail(format!(
            "accepted edge {stray:?} is not an input edge ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}

/// Replays `edges` through a plain parent array, failing on the first edge
/// that closes a cycle. Returns the resulting component count.
fn validate_acyclicity(vertex_count: usize, edges: &[WeightedEdge<u32>]) -> Result<usize, TestCaseError> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for (index, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[right] = left;
        components -= 1;
    }
    Ok(components)
}

fn count_components(vertex_count: usize, edges: &[WeightedEdge<u32>]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Finds the root of `node` with path halving.
fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}
