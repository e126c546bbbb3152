//! Weighted graph abstractions consumed by the Kruskal builder.
//!
//! The builder only needs a vertex count and an edge enumeration, so the
//! graph surface is a pair of small traits. [`EdgeList`] and
//! [`WeightedEdge`] are ready-made implementations for callers that do not
//! already own a graph type.

use std::cmp::Ordering;

/// A weight with a total order suitable for sorting edges.
///
/// Integers compare naturally. Floats use `total_cmp`, so `NaN` sorts after
/// every finite value and ordering never panics.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use linkset_core::EdgeWeight;
///
/// assert_eq!(1_u32.weight_cmp(&2), Ordering::Less);
/// assert_eq!(f64::NAN.weight_cmp(&1.0), Ordering::Greater);
/// ```
pub trait EdgeWeight: Copy {
    /// Compares two weights.
    fn weight_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_ord_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EdgeWeight for $ty {
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

impl_ord_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl EdgeWeight for f32 {
    fn weight_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl EdgeWeight for f64 {
    fn weight_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// An undirected edge between two vertex ids.
pub trait GraphEdge {
    /// Weight type carried by the edge.
    type Weight: EdgeWeight;

    /// Returns the first endpoint id.
    fn source(&self) -> usize;

    /// Returns the second endpoint id.
    fn target(&self) -> usize;

    /// Returns the edge weight.
    fn weight(&self) -> Self::Weight;
}

/// A graph exposing its vertex count and edge list.
pub trait WeightedGraph {
    /// Edge type stored by the graph.
    type Edge: GraphEdge;

    /// Returns the number of vertices. Vertex ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns every edge of the graph.
    fn edges(&self) -> &[Self::Edge];
}

/// A plain weighted edge.
///
/// # Examples
/// ```
/// use linkset_core::{GraphEdge, WeightedEdge};
///
/// let edge = WeightedEdge::new(3, 1, 2.5_f64);
/// assert_eq!((edge.source(), edge.target()), (3, 1));
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W> WeightedEdge<W> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<W: EdgeWeight> GraphEdge for WeightedEdge<W> {
    type Weight = W;

    #[rustfmt::skip]
    fn source(&self) -> usize { self.source }

    #[rustfmt::skip]
    fn target(&self) -> usize { self.target }

    #[rustfmt::skip]
    fn weight(&self) -> W { self.weight }
}

impl<W> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A graph stored as a vertex count plus an edge vector.
///
/// Edges are not validated on insertion; the Kruskal builder rejects
/// endpoints outside `0..vertex_count` when it runs.
///
/// # Examples
/// ```
/// use linkset_core::{EdgeList, WeightedGraph};
///
/// let graph = EdgeList::from_tuples(3, [(0, 1, 4_u32), (1, 2, 1)]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList<W> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
}

impl<W> EdgeList<W> {
    /// Creates a graph with `vertex_count` vertices and the given edges.
    #[must_use]
    pub const fn new(vertex_count: usize, edges: Vec<WeightedEdge<W>>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Creates a graph from `(source, target, weight)` tuples.
    #[must_use]
    pub fn from_tuples(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Self {
        Self::new(vertex_count, edges.into_iter().map(WeightedEdge::from).collect())
    }

    /// Appends an edge.
    pub fn push(&mut self, edge: WeightedEdge<W>) {
        self.edges.push(edge);
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W: EdgeWeight> WeightedGraph for EdgeList<W> {
    type Edge = WeightedEdge<W>;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }
}
