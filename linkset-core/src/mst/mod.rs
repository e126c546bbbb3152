//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are sorted by ascending weight and accepted greedily whenever their
//! endpoints still belong to different components of a [`DisjointSet`]. A
//! disconnected graph is not an error: the result is then a minimum spanning
//! forest with one tree per component.

use std::{cmp::Ordering, iter::Sum};

use tracing::{Span, debug, field, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, Result},
    graph::{EdgeWeight, GraphEdge, WeightedGraph},
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<E> {
    edges: Vec<E>,
    component_count: usize,
}

impl<E> SpanningForest<E> {
    /// Returns the accepted edges in the order Kruskal accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<E> { self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sums the weights of the accepted edges.
    ///
    /// # Examples
    /// ```
    /// use linkset_core::{EdgeList, kruskal};
    ///
    /// let graph = EdgeList::from_tuples(3, [(0, 1, 2_u32), (1, 2, 3), (0, 2, 9)]);
    /// let forest = kruskal(&graph)?;
    /// assert_eq!(forest.total_weight::<u32>(), 5);
    /// # Ok::<(), linkset_core::DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn total_weight<S>(&self) -> S
    where
        E: GraphEdge,
        S: Sum<E::Weight>,
    {
        self.edges.iter().map(GraphEdge::weight).sum()
    }
}

/// Computes a minimum spanning forest of `graph`.
///
/// # Errors
/// Returns [`DisjointSetError::InvalidId`] when an edge references a vertex
/// id outside `0..graph.vertex_count()`.
///
/// # Examples
/// ```
/// use linkset_core::{EdgeList, GraphEdge, kruskal};
///
/// let graph = EdgeList::from_tuples(
///     5,
///     [(0, 1, 1_u32), (1, 2, 2), (0, 2, 3), (2, 3, 4), (3, 4, 1)],
/// );
/// let forest = kruskal(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 4);
/// assert_eq!(forest.total_weight::<u32>(), 8);
/// # Ok::<(), linkset_core::DisjointSetError>(())
/// ```
pub fn kruskal<G>(graph: &G) -> Result<SpanningForest<G::Edge>>
where
    G: WeightedGraph,
    G::Edge: Clone,
{
    kruskal_from_edges(graph.vertex_count(), graph.edges())
}

/// Computes a minimum spanning forest over `vertex_count` vertices from an
/// edge enumeration.
///
/// Edges are ordered by weight, then by their smaller endpoint, then by their
/// larger endpoint; edges that still tie keep their input order, so the
/// result is deterministic. Self-edges never join two components and are
/// discarded like any other cycle-closing edge.
///
/// # Errors
/// Returns [`DisjointSetError::InvalidId`] when an edge references a vertex
/// id `>= vertex_count`. Every edge is checked before any is accepted.
#[instrument(name = "mst.kruskal", err, skip(edges), fields(edge_count = field::Empty))]
pub fn kruskal_from_edges<'a, E>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = &'a E>,
) -> Result<SpanningForest<E>>
where
    E: GraphEdge + Clone + 'a,
{
    let mut ordered: Vec<&E> = edges.into_iter().collect();
    Span::current().record("edge_count", ordered.len());
    validate_endpoints(&ordered, vertex_count)?;
    ordered.sort_by(|left, right| compare_edges(*left, *right));

    let mut components = DisjointSet::new(vertex_count);
    for _ in 0..vertex_count {
        components.make()?;
    }

    let tree_size = vertex_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(tree_size);
    let mut examined = 0_usize;
    for edge in ordered {
        if accepted.len() == tree_size {
            break;
        }
        examined += 1;
        let (source, target) = (edge.source(), edge.target());
        if components.find(source)? != components.find(target)? {
            components.union(source, target)?;
            accepted.push(edge.clone());
        }
    }

    debug!(
        accepted = accepted.len(),
        examined,
        components = components.component_count(),
        "kruskal completed"
    );
    record_accepted(accepted.len());

    Ok(SpanningForest {
        edges: accepted,
        component_count: components.component_count(),
    })
}

fn validate_endpoints<E: GraphEdge>(edges: &[&E], vertex_count: usize) -> Result<()> {
    for edge in edges {
        for id in [edge.source(), edge.target()] {
            if id >= vertex_count {
                return Err(DisjointSetError::InvalidId {
                    id,
                    len: vertex_count,
                });
            }
        }
    }
    Ok(())
}

fn compare_edges<E: GraphEdge>(left: &E, right: &E) -> Ordering {
    left.weight()
        .weight_cmp(&right.weight())
        .then_with(|| canonical_endpoints(left).cmp(&canonical_endpoints(right)))
}

/// Returns the endpoints as `(min, max)`.
fn canonical_endpoints<E: GraphEdge>(edge: &E) -> (usize, usize) {
    let (source, target) = (edge.source(), edge.target());
    if source <= target {
        (source, target)
    } else {
        (target, source)
    }
}

#[cfg(feature = "metrics")]
fn record_accepted(accepted: usize) {
    metrics::counter!("kruskal_edges_accepted_total")
        .increment(u64::try_from(accepted).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_accepted(_accepted: usize) {}

#[cfg(test)]
mod property;
