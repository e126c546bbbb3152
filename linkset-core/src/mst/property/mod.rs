//! Property-based tests for the Kruskal MST builder.
//!
//! Checks the builder against a Prim's-algorithm oracle, validates the
//! structural invariants of every produced forest, and confirms that the
//! output does not depend on the order edges are supplied in.

mod determinism;
mod oracle;
mod strategies;
mod structural;
