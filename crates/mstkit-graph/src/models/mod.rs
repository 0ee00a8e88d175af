//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`GraphNode`], [`GraphEdge`]: Graph entity types
//! - [`SquareMatrix`]: Dense storage for adjacency matrices
//! - [`Graph`], [`NodeKey`]: Read contract and node addressing
//! - [`AdjacencyMatrixGraph`]: Undirected graph over a square matrix

pub mod edge;
pub mod graph;
pub mod matrix;
pub mod matrix_graph;
pub mod node;

pub use edge::GraphEdge;
pub use graph::{Graph, NodeKey};
pub use matrix::SquareMatrix;
pub use matrix_graph::AdjacencyMatrixGraph;
pub use node::GraphNode;
