//! Edge type for graphs.
//!
//! A [`GraphEdge`] joins two [`GraphNode`]s, carries a directedness flag and an
//! optional weight. Identity rules:
//! - undirected edges compare endpoints as an unordered pair
//! - directed edges compare endpoints in order
//! - the directedness flag and the weight are part of identity
//!
//! Weights compare bitwise with `-0.0` folded into `0.0`, so `Eq` and `Hash`
//! stay lawful even for NaN.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::node::GraphNode;

/// Connection between two nodes.
#[derive(Debug, Clone)]
pub struct GraphEdge<L> {
    node1: GraphNode<L>,
    node2: GraphNode<L>,
    directed: bool,
    weight: Option<f64>,
}

impl<L> GraphEdge<L> {
    /// Create an unweighted edge.
    pub fn new(node1: GraphNode<L>, node2: GraphNode<L>, directed: bool) -> Self {
        Self {
            node1,
            node2,
            directed,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn with_weight(
        node1: GraphNode<L>,
        node2: GraphNode<L>,
        directed: bool,
        weight: f64,
    ) -> Self {
        Self {
            node1,
            node2,
            directed,
            weight: Some(weight),
        }
    }

    /// First endpoint (the source, for directed edges).
    pub fn node1(&self) -> &GraphNode<L> {
        &self.node1
    }

    /// Second endpoint (the target, for directed edges).
    pub fn node2(&self) -> &GraphNode<L> {
        &self.node2
    }

    /// Both endpoints in stored order.
    pub fn endpoints(&self) -> (&GraphNode<L>, &GraphNode<L>) {
        (&self.node1, &self.node2)
    }

    /// Check if the edge is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Check if the edge carries a weight.
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Get the weight, if any.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    fn weight_key(&self) -> Option<u64> {
        self.weight
            .map(|w| if w == 0.0 { 0.0f64.to_bits() } else { w.to_bits() })
    }
}

impl<L: PartialEq> GraphEdge<L> {
    /// Check whether this edge joins `a` and `b`, honouring directedness.
    pub fn connects(&self, a: &GraphNode<L>, b: &GraphNode<L>) -> bool {
        (self.node1 == *a && self.node2 == *b)
            || (!self.directed && self.node1 == *b && self.node2 == *a)
    }
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && other.connects(&self.node1, &self.node2)
            && self.weight_key() == other.weight_key()
    }
}

impl<L: Eq> Eq for GraphEdge<L> {}

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            // Order-independent so (a, b) and (b, a) hash alike
            let h1 = node_hash(&self.node1);
            let h2 = node_hash(&self.node2);
            h1.wrapping_add(h2).hash(state);
            (h1 ^ h2).hash(state);
        }
        self.weight_key().hash(state);
    }
}

fn node_hash<L: Hash>(node: &GraphNode<L>) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

impl<L: fmt::Display> fmt::Display for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        match self.weight {
            Some(w) => write!(f, "({} {} {}, {})", self.node1, arrow, self.node2, w),
            None => write!(f, "({} {} {})", self.node1, arrow, self.node2),
        }
    }
}
