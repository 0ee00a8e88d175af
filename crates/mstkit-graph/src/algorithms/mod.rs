//! Graph algorithms.
//!
//! This module provides:
//! - [`disjoint_set`]: Disjoint set forest with path compression and union by rank
//! - [`kruskal`]: Minimum spanning forest

pub mod disjoint_set;
pub mod kruskal;

pub use disjoint_set::{DisjointSets, ForestDisjointSets};
pub use kruskal::{kruskal_mst, KruskalMst, MstConfig, SpanningForest};
