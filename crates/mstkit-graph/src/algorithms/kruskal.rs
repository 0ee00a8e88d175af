//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edges are scanned in ascending weight order; an edge is kept when its
//! endpoints are still in different sets of a [`ForestDisjointSets`], and the
//! two sets are then merged. On a connected graph the result is a minimum
//! spanning tree, otherwise one minimum spanning tree per component.
//!
//! Each computation owns a fresh forest that is dropped on return, so
//! [`KruskalMst`] carries configuration only.

use std::hash::Hash;

use tracing::debug;

use super::disjoint_set::{DisjointSets, ForestDisjointSets};
use crate::models::{Graph, GraphEdge, GraphNode};
use crate::{GraphError, Result};

/// Kruskal configuration.
#[derive(Debug, Clone)]
pub struct MstConfig {
    /// Stop scanning once `node_count - 1` edges are selected.
    pub early_exit: bool,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

impl MstConfig {
    /// Create new Kruskal configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set early exit.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

/// Edges of a minimum spanning forest.
#[derive(Debug, Clone)]
pub struct SpanningForest<L> {
    /// Selected edges, in selection (ascending weight) order.
    edges: Vec<GraphEdge<L>>,
    /// Sum of selected edge weights.
    total_weight: f64,
    /// Node count of the input graph.
    node_count: usize,
}

impl<L> SpanningForest<L> {
    /// Selected edges.
    pub fn edges(&self) -> &[GraphEdge<L>] {
        &self.edges
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of selected edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of trees, which is the component count of the input graph.
    pub fn component_count(&self) -> usize {
        self.node_count - self.edges.len()
    }

    /// Iterate over selected edges.
    pub fn iter(&self) -> std::slice::Iter<'_, GraphEdge<L>> {
        self.edges.iter()
    }

    /// Take the selected edges.
    pub fn into_edges(self) -> Vec<GraphEdge<L>> {
        self.edges
    }
}

impl<L: PartialEq> SpanningForest<L> {
    /// Check if an edge equal to `edge` was selected.
    pub fn contains(&self, edge: &GraphEdge<L>) -> bool {
        self.edges.contains(edge)
    }
}

impl<'a, L> IntoIterator for &'a SpanningForest<L> {
    type Item = &'a GraphEdge<L>;
    type IntoIter = std::slice::Iter<'a, GraphEdge<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Kruskal minimum spanning forest calculator.
#[derive(Debug, Clone, Default)]
pub struct KruskalMst {
    config: MstConfig,
}

impl KruskalMst {
    /// Create a calculator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given configuration.
    pub fn with_config(config: MstConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &MstConfig {
        &self.config
    }

    /// Compute a minimum spanning forest of `graph`.
    ///
    /// Time: O(E log E) for sorting + O(E α(V)) for union-find.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DirectedGraph`] if the graph is directed
    /// - [`GraphError::UnweightedEdge`] if any edge has no weight
    /// - [`GraphError::InvalidWeight`] if any weight is negative or NaN
    pub fn compute<L, G>(&self, graph: &G) -> Result<SpanningForest<L>>
    where
        L: Eq + Hash + Clone,
        G: Graph<L> + ?Sized,
    {
        let mut sorted = weighted_edges(graph)?;
        let node_count = graph.node_count();
        debug!(
            nodes = node_count,
            edges = sorted.len(),
            "computing spanning forest"
        );

        let mut sets: ForestDisjointSets<GraphNode<L>> =
            ForestDisjointSets::with_capacity(node_count);
        for node in graph.nodes() {
            if !sets.is_present(node) {
                sets.make_set(node.clone())?;
            }
        }

        // Stable: equal weights keep graph order
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let target = node_count.saturating_sub(1);
        let mut edges = Vec::with_capacity(target);
        let mut total_weight = 0.0;

        for (weight, edge) in sorted {
            if self.config.early_exit && edges.len() >= target {
                break;
            }

            let root_u = sets
                .find_set(edge.node1())
                .cloned()
                .ok_or(GraphError::NodeNotFound)?;
            let root_v = sets
                .find_set(edge.node2())
                .cloned()
                .ok_or(GraphError::NodeNotFound)?;

            if root_u != root_v {
                sets.union(&root_u, &root_v)?;
                edges.push(edge.clone());
                total_weight += weight;
            }
        }

        debug!(
            selected = edges.len(),
            total_weight,
            trees = sets.set_count(),
            "spanning forest complete"
        );

        Ok(SpanningForest {
            edges,
            total_weight,
            node_count,
        })
    }
}

/// Compute a minimum spanning forest with default configuration.
pub fn kruskal_mst<L, G>(graph: &G) -> Result<SpanningForest<L>>
where
    L: Eq + Hash + Clone,
    G: Graph<L> + ?Sized,
{
    KruskalMst::new().compute(graph)
}

/// Check the graph is undirected with non-negative weights, pairing each
/// edge with its weight.
fn weighted_edges<L, G>(graph: &G) -> Result<Vec<(f64, &GraphEdge<L>)>>
where
    G: Graph<L> + ?Sized,
{
    if graph.is_directed() {
        return Err(GraphError::DirectedGraph);
    }

    graph
        .edges()
        .into_iter()
        .map(|edge| match edge.weight() {
            None => Err(GraphError::UnweightedEdge),
            Some(w) if w.is_nan() || w < 0.0 => Err(GraphError::InvalidWeight(w)),
            Some(w) => Ok((w, edge)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdjacencyMatrixGraph, NodeKey};

    type Label = &'static str;

    fn weighted(edges: &[(Label, Label, f64)]) -> AdjacencyMatrixGraph<Label> {
        let mut g = AdjacencyMatrixGraph::new();
        for &(a, b, _) in edges {
            g.add_node(a);
            g.add_node(b);
        }
        for &(a, b, w) in edges {
            g.add_weighted_edge_between(NodeKey::label(&a), NodeKey::label(&b), w)
                .unwrap();
        }
        g
    }

    fn edge(a: &'static str, b: &'static str, w: f64) -> GraphEdge<&'static str> {
        GraphEdge::with_weight(GraphNode::new(a), GraphNode::new(b), false, w)
    }

    /// Directed two-node graph; the matrix graph cannot express one.
    struct DirectedPair {
        nodes: Vec<GraphNode<&'static str>>,
        edges: Vec<GraphEdge<&'static str>>,
    }

    impl Graph<&'static str> for DirectedPair {
        fn is_directed(&self) -> bool {
            true
        }
        fn node_count(&self) -> usize {
            self.nodes.len()
        }
        fn edge_count(&self) -> usize {
            self.edges.len()
        }
        fn nodes(&self) -> Vec<&GraphNode<&'static str>> {
            self.nodes.iter().collect()
        }
        fn edges(&self) -> Vec<&GraphEdge<&'static str>> {
            self.edges.iter().collect()
        }
    }

    #[test]
    fn test_triangle() {
        let g = weighted(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)]);
        let mst = kruskal_mst(&g).unwrap();

        assert_eq!(mst.edge_count(), 2);
        assert_eq!(mst.total_weight(), 3.0);
        assert!(mst.contains(&edge("A", "B", 1.0)));
        assert!(mst.contains(&edge("B", "C", 2.0)));
        assert!(!mst.contains(&edge("A", "C", 3.0)));
        assert_eq!(mst.component_count(), 1);
    }

    #[test]
    fn test_textbook_graph() {
        let g = weighted(&[
            ("a", "b", 4.0),
            ("a", "h", 8.0),
            ("b", "c", 8.0),
            ("b", "h", 11.0),
            ("c", "d", 7.0),
            ("c", "f", 4.0),
            ("c", "i", 2.0),
            ("d", "e", 9.0),
            ("d", "f", 14.0),
            ("e", "f", 10.0),
            ("f", "g", 2.0),
            ("g", "h", 1.0),
            ("g", "i", 6.0),
            ("h", "i", 7.0),
        ]);
        let mst = kruskal_mst(&g).unwrap();

        assert_eq!(mst.edge_count(), 8);
        assert_eq!(mst.total_weight(), 37.0);
        assert!(!mst.contains(&edge("d", "f", 14.0)));
        assert!(!mst.contains(&edge("b", "h", 11.0)));
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let mut g = weighted(&[("A", "B", 1.0), ("B", "C", 5.0), ("X", "Y", 2.0)]);
        g.add_node("Lonely");

        let mst = kruskal_mst(&g).unwrap();
        assert_eq!(mst.component_count(), 3);
        assert_eq!(mst.edge_count(), g.node_count() - 3);
        assert_eq!(mst.total_weight(), 8.0);
    }

    #[test]
    fn test_selection_order_is_ascending() {
        let g = weighted(&[("A", "B", 5.0), ("B", "C", 1.0), ("C", "D", 3.0)]);
        let weights: Vec<_> = kruskal_mst(&g)
            .unwrap()
            .iter()
            .filter_map(|e| e.weight())
            .collect();
        assert_eq!(weights, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_early_exit_does_not_change_result() {
        let g = weighted(&[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "A", 1.0),
            ("C", "D", 2.0),
            ("D", "A", 9.0),
        ]);

        let eager = KruskalMst::new().compute(&g).unwrap();
        let full = KruskalMst::with_config(MstConfig::new().with_early_exit(false))
            .compute(&g)
            .unwrap();

        assert_eq!(eager.total_weight(), full.total_weight());
        assert_eq!(eager.edges(), full.edges());
    }

    #[test]
    fn test_empty_and_single_node() {
        let g: AdjacencyMatrixGraph<&str> = AdjacencyMatrixGraph::new();
        let mst = kruskal_mst(&g).unwrap();
        assert_eq!(mst.edge_count(), 0);
        assert_eq!(mst.total_weight(), 0.0);

        let mut g: AdjacencyMatrixGraph<&str> = AdjacencyMatrixGraph::new();
        g.add_node("A");
        let mst = kruskal_mst(&g).unwrap();
        assert_eq!(mst.edge_count(), 0);
        assert_eq!(mst.component_count(), 1);
    }

    #[test]
    fn test_zero_weights_allowed() {
        let g = weighted(&[("A", "B", 0.0), ("B", "C", 0.0)]);
        let mst = kruskal_mst(&g).unwrap();
        assert_eq!(mst.edge_count(), 2);
        assert_eq!(mst.total_weight(), 0.0);
    }

    #[test]
    fn test_rejects_directed_graph() {
        let a = GraphNode::new("A");
        let b = GraphNode::new("B");
        let g = DirectedPair {
            edges: vec![GraphEdge::with_weight(a.clone(), b.clone(), true, 1.0)],
            nodes: vec![a, b],
        };
        assert_eq!(kruskal_mst(&g).unwrap_err(), GraphError::DirectedGraph);
    }

    #[test]
    fn test_rejects_unweighted_edge() {
        let mut g = weighted(&[("A", "B", 1.0)]);
        g.add_node("C");
        g.add_edge_between(NodeKey::label(&"B"), NodeKey::label(&"C"))
            .unwrap();
        assert_eq!(kruskal_mst(&g).unwrap_err(), GraphError::UnweightedEdge);
    }

    #[test]
    fn test_rejects_negative_and_nan_weights() {
        let g = weighted(&[("A", "B", 1.0), ("B", "C", -0.5)]);
        assert_eq!(kruskal_mst(&g).unwrap_err(), GraphError::InvalidWeight(-0.5));

        let g = weighted(&[("A", "B", f64::NAN)]);
        assert!(matches!(
            kruskal_mst(&g),
            Err(GraphError::InvalidWeight(w)) if w.is_nan()
        ));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let calc = KruskalMst::new();
        let first = weighted(&[("A", "B", 1.0), ("B", "C", 2.0)]);
        let second = weighted(&[("A", "B", 4.0), ("A", "C", 1.0), ("B", "C", 1.0)]);

        assert_eq!(calc.compute(&first).unwrap().total_weight(), 3.0);
        assert_eq!(calc.compute(&second).unwrap().total_weight(), 2.0);
        assert_eq!(calc.compute(&first).unwrap().total_weight(), 3.0);
    }
}
