//! Undirected graph backed by an adjacency matrix.
//!
//! Nodes are indexed `0..node_count()` in insertion order. Cell `(i, j)` of the
//! matrix is empty when nodes `i` and `j` are not connected, and holds the
//! [`GraphEdge`] joining them otherwise. Invariants kept by every mutation:
//!
//! - cells `(i, j)` and `(j, i)` hold equal edges, or are both empty
//! - the diagonal `(i, i)` is always empty
//! - the matrix side equals the node count
//!
//! Removing the node at index `k` removes row and column `k` and decrements
//! every index above `k` by one. Indices are therefore only stable between
//! structural mutations.

use std::hash::Hash;

use indexmap::IndexSet;
use tracing::debug;

use super::edge::GraphEdge;
use super::graph::{Graph, NodeKey};
use super::matrix::SquareMatrix;
use super::node::GraphNode;
use crate::{GraphError, Result};

/// Undirected, optionally weighted graph stored as an adjacency matrix.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<L> {
    /// Node set; position in the set is the node index.
    nodes: IndexSet<GraphNode<L>>,
    /// Edge slots, `nodes.len()` on each side.
    matrix: SquareMatrix<GraphEdge<L>>,
}

impl<L> Default for AdjacencyMatrixGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> AdjacencyMatrixGraph<L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexSet::new(),
            matrix: SquareMatrix::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexSet::with_capacity(capacity),
            matrix: SquareMatrix::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    ///
    /// Each undirected edge occupies two symmetric cells.
    pub fn edge_count(&self) -> usize {
        self.matrix.occupied() / 2
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Always `false`.
    pub fn is_directed(&self) -> bool {
        false
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count(),
            "clearing graph"
        );
        self.nodes.clear();
        self.matrix.clear();
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    /// Every edge exactly once, ordered by `(lower index, higher index)`.
    pub fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.matrix
            .iter_occupied()
            .filter(|&(i, j, _)| i < j)
            .map(|(_, _, edge)| edge)
            .collect()
    }
}

impl<L: Eq + Hash + Clone> AdjacencyMatrixGraph<L> {
    /// Resolve a key to a node index.
    fn resolve(&self, key: NodeKey<'_, L>) -> Result<usize> {
        match key {
            NodeKey::Node(node) => self.nodes.get_index_of(node).ok_or(GraphError::NodeNotFound),
            NodeKey::Label(label) => self
                .nodes
                .get_index_of(label)
                .ok_or(GraphError::NodeNotFound),
            NodeKey::Index(index) if index < self.nodes.len() => Ok(index),
            NodeKey::Index(index) => Err(GraphError::IndexOutOfRange {
                index,
                count: self.nodes.len(),
            }),
        }
    }

    fn resolve_pair<'k>(
        &self,
        a: impl Into<NodeKey<'k, L>>,
        b: impl Into<NodeKey<'k, L>>,
    ) -> Result<(usize, usize)>
    where
        L: 'k,
    {
        Ok((self.resolve(a.into())?, self.resolve(b.into())?))
    }

    fn node_at(&self, index: usize) -> &GraphNode<L> {
        &self.nodes[index]
    }

    /// Add a node, by value or by label.
    ///
    /// Returns `false` without touching the graph when an equal node is
    /// already present. Otherwise the node gets the next index and the
    /// matrix grows by one empty row and column.
    pub fn add_node(&mut self, node: impl Into<GraphNode<L>>) -> bool {
        let (index, inserted) = self.nodes.insert_full(node.into());
        if !inserted {
            return false;
        }
        self.matrix.push_vertex();
        debug!(index, nodes = self.nodes.len(), "added node");
        true
    }

    /// Remove a node together with every edge incident to it.
    ///
    /// Every node above the removed index moves down by one; relative order
    /// among survivors is kept.
    pub fn remove_node<'k>(&mut self, key: impl Into<NodeKey<'k, L>>) -> Result<GraphNode<L>>
    where
        L: 'k,
    {
        let index = self.resolve(key.into())?;
        let incident = self.matrix.row(index).flatten().count();
        // Matrix shrinks only once the node itself is gone
        let node = self
            .nodes
            .shift_remove_index(index)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                count: self.nodes.len(),
            })?;
        self.matrix.remove_vertex(index);
        debug!(index, incident, nodes = self.nodes.len(), "removed node");
        Ok(node)
    }

    /// Look up the stored node.
    pub fn get_node<'k>(&self, key: impl Into<NodeKey<'k, L>>) -> Result<&GraphNode<L>>
    where
        L: 'k,
    {
        let index = self.resolve(key.into())?;
        Ok(self.node_at(index))
    }

    /// Current index of a node.
    pub fn node_index_of<'k>(&self, key: impl Into<NodeKey<'k, L>>) -> Result<usize>
    where
        L: 'k,
    {
        self.resolve(key.into())
    }

    /// Check if a key resolves to a node.
    pub fn contains_node<'k>(&self, key: impl Into<NodeKey<'k, L>>) -> bool
    where
        L: 'k,
    {
        self.resolve(key.into()).is_ok()
    }

    /// Write `edge` into `(i, j)` and `(j, i)`.
    fn put_edge(&mut self, i: usize, j: usize, edge: GraphEdge<L>) -> Result<bool> {
        if i == j {
            return Err(GraphError::SelfLoop { index: i });
        }
        if self.matrix.get(i, j) == Some(&edge) {
            return Ok(false);
        }
        let weight = edge.weight();
        let replaced = self.matrix.replace(j, i, Some(edge.clone())).is_some();
        self.matrix.replace(i, j, Some(edge));
        debug!(i, j, ?weight, replaced, "added edge");
        Ok(true)
    }

    /// Add an undirected edge whose endpoints are already in the graph.
    ///
    /// Returns `false` if an equal edge (same endpoints and weight) is
    /// already present. An edge with a different weight on the same pair
    /// replaces the existing one.
    pub fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool> {
        let (i, j) = self.resolve_pair(edge.node1(), edge.node2())?;
        if edge.is_directed() {
            return Err(GraphError::DirectedEdge);
        }
        self.put_edge(i, j, edge)
    }

    /// Add an unweighted edge between two nodes.
    pub fn add_edge_between<'k>(
        &mut self,
        a: impl Into<NodeKey<'k, L>>,
        b: impl Into<NodeKey<'k, L>>,
    ) -> Result<bool>
    where
        L: 'k,
    {
        let (i, j) = self.resolve_pair(a, b)?;
        let edge = GraphEdge::new(self.node_at(i).clone(), self.node_at(j).clone(), false);
        self.put_edge(i, j, edge)
    }

    /// Add a weighted edge between two nodes.
    pub fn add_weighted_edge_between<'k>(
        &mut self,
        a: impl Into<NodeKey<'k, L>>,
        b: impl Into<NodeKey<'k, L>>,
        weight: f64,
    ) -> Result<bool>
    where
        L: 'k,
    {
        let (i, j) = self.resolve_pair(a, b)?;
        let edge = GraphEdge::with_weight(
            self.node_at(i).clone(),
            self.node_at(j).clone(),
            false,
            weight,
        );
        self.put_edge(i, j, edge)
    }

    /// Clear `(i, j)` and `(j, i)`.
    fn take_edge(&mut self, i: usize, j: usize) -> Result<GraphEdge<L>> {
        if self.matrix.get(i, j).is_none() {
            return Err(GraphError::EdgeNotFound);
        }
        self.matrix.replace(j, i, None);
        let edge = self
            .matrix
            .replace(i, j, None)
            .ok_or(GraphError::EdgeNotFound)?;
        debug!(i, j, "removed edge");
        Ok(edge)
    }

    /// Remove an edge equal to `edge`.
    pub fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<GraphEdge<L>> {
        let (i, j) = self.resolve_pair(edge.node1(), edge.node2())?;
        if self.matrix.get(i, j) != Some(edge) {
            return Err(GraphError::EdgeNotFound);
        }
        self.take_edge(i, j)
    }

    /// Remove whatever edge joins two nodes.
    pub fn remove_edge_between<'k>(
        &mut self,
        a: impl Into<NodeKey<'k, L>>,
        b: impl Into<NodeKey<'k, L>>,
    ) -> Result<GraphEdge<L>>
    where
        L: 'k,
    {
        let (i, j) = self.resolve_pair(a, b)?;
        self.take_edge(i, j)
    }

    /// Look up the stored edge equal to `edge`.
    ///
    /// Fails if an endpoint is not in the graph; `None` if the endpoints
    /// are not joined by an equal edge.
    pub fn get_edge(&self, edge: &GraphEdge<L>) -> Result<Option<&GraphEdge<L>>> {
        let (i, j) = self.resolve_pair(edge.node1(), edge.node2())?;
        Ok(self.matrix.get(i, j).filter(|stored| *stored == edge))
    }

    /// Look up the edge joining two nodes.
    pub fn get_edge_between<'k>(
        &self,
        a: impl Into<NodeKey<'k, L>>,
        b: impl Into<NodeKey<'k, L>>,
    ) -> Result<Option<&GraphEdge<L>>>
    where
        L: 'k,
    {
        let (i, j) = self.resolve_pair(a, b)?;
        Ok(self.matrix.get(i, j))
    }

    /// Nodes joined to `key` by an edge, in index order.
    pub fn adjacent_nodes_of<'k>(
        &self,
        key: impl Into<NodeKey<'k, L>>,
    ) -> Result<Vec<&GraphNode<L>>>
    where
        L: 'k,
    {
        let index = self.resolve(key.into())?;
        Ok(self
            .matrix
            .row(index)
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(j, _)| self.node_at(j))
            .collect())
    }

    /// Edges incident to `key`, ordered by the index of the other endpoint.
    pub fn edges_of<'k>(&self, key: impl Into<NodeKey<'k, L>>) -> Result<Vec<&GraphEdge<L>>>
    where
        L: 'k,
    {
        let index = self.resolve(key.into())?;
        Ok(self.matrix.row(index).flatten().collect())
    }

    /// Number of edges incident to `key`.
    pub fn degree_of<'k>(&self, key: impl Into<NodeKey<'k, L>>) -> Result<usize>
    where
        L: 'k,
    {
        let index = self.resolve(key.into())?;
        Ok(self.matrix.row(index).flatten().count())
    }

    /// Not defined for undirected graphs.
    pub fn predecessor_nodes_of<'k>(
        &self,
        _key: impl Into<NodeKey<'k, L>>,
    ) -> Result<Vec<&GraphNode<L>>>
    where
        L: 'k,
    {
        Err(GraphError::Unsupported("predecessor nodes"))
    }

    /// Not defined for undirected graphs.
    pub fn ingoing_edges_of<'k>(
        &self,
        _key: impl Into<NodeKey<'k, L>>,
    ) -> Result<Vec<&GraphEdge<L>>>
    where
        L: 'k,
    {
        Err(GraphError::Unsupported("ingoing edges"))
    }

    /// Validate the matrix against the node index.
    pub fn validate(&self) -> Result<()> {
        if self.matrix.dim() != self.nodes.len() {
            return Err(GraphError::InvalidMatrix(format!(
                "matrix side {} != node count {}",
                self.matrix.dim(),
                self.nodes.len()
            )));
        }

        if !self.matrix.is_symmetric_loopless() {
            return Err(GraphError::InvalidMatrix(
                "matrix is not symmetric or has a self-loop".to_string(),
            ));
        }

        for (i, j, edge) in self.matrix.iter_occupied() {
            if edge.is_directed() {
                return Err(GraphError::InvalidMatrix(format!(
                    "directed edge at ({}, {})",
                    i, j
                )));
            }
            if !edge.connects(self.node_at(i), self.node_at(j)) {
                return Err(GraphError::InvalidMatrix(format!(
                    "edge at ({}, {}) does not join nodes {} and {}",
                    i, j, i, j
                )));
            }
        }

        Ok(())
    }
}

impl<L: Eq + Hash + Clone> Graph<L> for AdjacencyMatrixGraph<L> {
    fn is_directed(&self) -> bool {
        AdjacencyMatrixGraph::is_directed(self)
    }

    fn node_count(&self) -> usize {
        AdjacencyMatrixGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        AdjacencyMatrixGraph::edge_count(self)
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        AdjacencyMatrixGraph::nodes(self)
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        AdjacencyMatrixGraph::edges(self)
    }
}
