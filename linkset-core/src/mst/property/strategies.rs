//! Graph generators for MST property-based tests.
//!
//! Proptest picks a distribution and a seed; the graph itself is built from a
//! seeded [`SmallRng`] so rstest cases can replay a specific seed directly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GraphEdge, WeightedEdge};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Kept smaller than [`MAX_VERTICES`] to avoid quadratic edge counts.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WEIGHT: u32 = 1_000;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let edges = random_pairs(vertex_count, 0.2..=0.6, rng, |r| r.gen_range(0..=MAX_WEIGHT));
            (vertex_count, edges)
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let edges = random_pairs(vertex_count, 0.3..=0.7, rng, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (vertex_count, edges)
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let edges =
                random_pairs(vertex_count, 0.7..=0.95, rng, |r| r.gen_range(0..=MAX_WEIGHT));
            (vertex_count, edges)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    };

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Adds an edge between each vertex pair with a probability sampled from
/// `probability`.
fn random_pairs(
    vertex_count: usize,
    probability: std::ops::RangeInclusive<f64>,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<WeightedEdge<u32>> {
    let edge_probability = rng.gen_range(probability);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight(rng);
                edges.push(oriented(source, target, weight, rng));
            }
        }
    }
    edges
}

/// Builds a random spanning path over a shuffled vertex order, then adds a
/// few extra edges.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| WeightedEdge::new(pair[0], pair[1], rng.gen_range(0..=MAX_WEIGHT)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            edges.push(WeightedEdge::new(source, target, rng.gen_range(0..=MAX_WEIGHT)));
        }
    }
    (vertex_count, edges)
}

/// Generates two to five blocks of vertices with edges only inside each
/// block. Single-vertex blocks stay isolated.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for edge in random_pairs(size, 0.3..=0.8, rng, |r| r.gen_range(0..=MAX_WEIGHT)) {
            edges.push(WeightedEdge::new(
                edge.source() + offset,
                edge.target() + offset,
                edge.weight(),
            ));
        }
        offset += size;
    }
    (offset, edges)
}

/// Draws endpoints independently, so pairs repeat in both orientations and
/// self-loops appear.
fn generate_multigraph(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let vertex_count = rng.gen_range(1..=16);
    let edge_count = rng.gen_range(0..=vertex_count * 4);
    let edges = (0..edge_count)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..=5),
            )
        })
        .collect();
    (vertex_count, edges)
}

/// Flips the endpoints at random so generated inputs are not all canonical.
fn oriented(source: usize, target: usize, weight: u32, rng: &mut SmallRng) -> WeightedEdge<u32> {
    if rng.gen_bool(0.5) {
        WeightedEdge::new(source, target, weight)
    } else {
        WeightedEdge::new(target, source, weight)
    }
}

/// Fisher-Yates shuffle.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
