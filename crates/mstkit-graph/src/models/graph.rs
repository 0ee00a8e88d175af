//! Graph read contract and node addressing.

use super::edge::GraphEdge;
use super::node::GraphNode;

/// Read-only view of a graph.
///
/// This is everything a consumer such as Kruskal needs: directedness, the node
/// set and the edge set.
pub trait Graph<L> {
    /// Check if edges of this graph are directed.
    fn is_directed(&self) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// All nodes, each exactly once.
    fn nodes(&self) -> Vec<&GraphNode<L>>;

    /// All edges, each exactly once.
    fn edges(&self) -> Vec<&GraphEdge<L>>;
}

/// Way of addressing a node: by value, by label or by index.
#[derive(Debug)]
pub enum NodeKey<'a, L> {
    /// A node value; matched by label equality.
    Node(&'a GraphNode<L>),
    /// A bare label.
    Label(&'a L),
    /// Position in insertion order, valid between structural mutations.
    Index(usize),
}

impl<'a, L> NodeKey<'a, L> {
    /// Address a node by label.
    pub fn label(label: &'a L) -> Self {
        NodeKey::Label(label)
    }
}

impl<L> Clone for NodeKey<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for NodeKey<'_, L> {}

impl<'a, L> From<&'a GraphNode<L>> for NodeKey<'a, L> {
    fn from(node: &'a GraphNode<L>) -> Self {
        NodeKey::Node(node)
    }
}

impl<L> From<usize> for NodeKey<'_, L> {
    fn from(index: usize) -> Self {
        NodeKey::Index(index)
    }
}
