//! In-memory graph primitives and minimum spanning forests.
//!
//! This crate provides three cooperating pieces:
//!
//! - **Adjacency-Matrix Graph**: an undirected, optionally weighted graph whose
//!   edges live in a dense `n × n` matrix of optional edge slots
//! - **Disjoint-Set Forest**: union-find with full path compression and union by rank
//! - **Kruskal**: minimum spanning forest built from the two above
//!
//! # Example
//!
//! ```
//! use mstkit_graph::{kruskal_mst, AdjacencyMatrixGraph, NodeKey};
//!
//! let mut graph: AdjacencyMatrixGraph<&str> = AdjacencyMatrixGraph::new();
//! for label in ["A", "B", "C"] {
//!     graph.add_node(label);
//! }
//! graph.add_weighted_edge_between(NodeKey::label(&"A"), NodeKey::label(&"B"), 1.0)?;
//! graph.add_weighted_edge_between(NodeKey::label(&"B"), NodeKey::label(&"C"), 2.0)?;
//! graph.add_weighted_edge_between(NodeKey::label(&"A"), NodeKey::label(&"C"), 3.0)?;
//!
//! let forest = kruskal_mst(&graph)?;
//! assert_eq!(forest.edge_count(), 2);
//! assert_eq!(forest.total_weight(), 3.0);
//! # Ok::<(), mstkit_graph::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::disjoint_set::{DisjointSets, ForestDisjointSets};
pub use algorithms::kruskal::{kruskal_mst, KruskalMst, MstConfig, SpanningForest};
pub use models::edge::GraphEdge;
pub use models::graph::{Graph, NodeKey};
pub use models::matrix_graph::AdjacencyMatrixGraph;
pub use models::node::GraphNode;

/// Graph and disjoint-set error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// No node with the given value or label is in the graph.
    #[error("Node not found in graph")]
    NodeNotFound,

    /// Node index outside `[0, count)`.
    #[error("Node index {index} out of range for {count} nodes")]
    IndexOutOfRange { index: usize, count: usize },

    /// No edge connects the given endpoints.
    #[error("Edge not found in graph")]
    EdgeNotFound,

    /// Both endpoints of an edge resolve to the same node.
    #[error("Self-loop on node {index} is not allowed")]
    SelfLoop { index: usize },

    /// A directed edge was offered to an undirected graph.
    #[error("Directed edge cannot be added to an undirected graph")]
    DirectedEdge,

    /// Operation only meaningful for directed graphs.
    #[error("Unsupported operation on an undirected graph: {0}")]
    Unsupported(&'static str),

    /// Element is already tracked by the disjoint-set forest.
    #[error("Element already present in disjoint sets")]
    ElementAlreadyPresent,

    /// Element is not tracked by the disjoint-set forest.
    #[error("Element not present in disjoint sets")]
    ElementNotFound,

    /// Spanning forests are only defined for undirected graphs.
    #[error("Minimum spanning forest requires an undirected graph")]
    DirectedGraph,

    /// An edge carries no weight.
    #[error("Minimum spanning forest requires every edge to be weighted")]
    UnweightedEdge,

    /// An edge weight is negative or NaN.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    /// Matrix and node index disagree.
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(String),
}

impl GraphError {
    /// Argument refers to something absent from the structure, or is out of range.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound
                | GraphError::IndexOutOfRange { .. }
                | GraphError::EdgeNotFound
                | GraphError::ElementAlreadyPresent
                | GraphError::ElementNotFound
        )
    }

    /// The operation is not defined for the shape of the input.
    pub fn is_structural(&self) -> bool {
        !self.is_precondition()
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
