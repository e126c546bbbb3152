//! Determinism: repeated runs return identical forests, and shuffling the
//! input leaves the accepted edge sequence unchanged up to endpoint
//! orientation.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{GraphEdge, WeightedEdge, kruskal_from_edges};

use super::equivalence::build_forest;
use super::strategies::shuffle;
use super::types::MstFixture;

const REPETITIONS: usize = 3;

pub(super) fn run_determinism_property(fixture: &MstFixture, shuffle_seed: u64) -> TestCaseResult {
    let baseline = build_forest(fixture)?;

    for attempt in 0..REPETITIONS {
        let repeat = build_forest(fixture)?;
        if repeat != baseline {
            return Err(TestCaseError::fail(format!(
                "run {attempt} differs from the first run ({})",
                fixture.describe(),
            )));
        }
    }

    let mut shuffled = fixture.edges.clone();
    shuffle(&mut shuffled, &mut SmallRng::seed_from_u64(shuffle_seed));
    let reordered = kruskal_from_edges(fixture.vertex_count, &shuffled).map_err(|err| {
        TestCaseError::fail(format!("kruskal failed on shuffled input: {err}"))
    })?;

    let expected = canonical_sequence(baseline.edges());
    let actual = canonical_sequence(reordered.edges());
    if expected != actual {
        return Err(TestCaseError::fail(format!(
            "shuffled input changed the accepted edges: {expected:?} vs {actual:?} ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}

fn canonical_sequence(edges: &[WeightedEdge<u32>]) -> Vec<(u32, usize, usize)> {
    edges
        .iter()
        .map(|edge| {
            let (source, target) = (edge.source(), edge.target());
            (edge.weight(), source.min(target), source.max(target))
        })
        .collect()
}
