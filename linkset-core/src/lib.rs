//! Linkset core library.
//!
//! Provides a disjoint-set structure built from linked membership lists and a
//! flat representative table, plus a Kruskal minimum spanning forest builder
//! that uses it for cycle detection.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::{DisjointSet, Members},
    error::{DisjointSetError, DisjointSetErrorCode, Result},
    graph::{EdgeList, EdgeWeight, GraphEdge, WeightedEdge, WeightedGraph},
    mst::{SpanningForest, kruskal, kruskal_from_edges},
};
