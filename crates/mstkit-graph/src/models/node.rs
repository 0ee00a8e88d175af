//! Node type for graphs.
//!
//! [`GraphNode`] is a strongly-typed wrapper around a vertex label. Identity is
//! the label: two nodes are equal exactly when their labels are equal.

use std::borrow::Borrow;
use std::fmt;

/// Graph vertex identified by its label.
///
/// Immutable after construction; the label is only reachable by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GraphNode<L> {
    label: L,
}

impl<L> GraphNode<L> {
    /// Create a new node.
    pub const fn new(label: L) -> Self {
        GraphNode { label }
    }

    /// Get the label.
    pub const fn label(&self) -> &L {
        &self.label
    }

    /// Consume the node, returning its label.
    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L> From<L> for GraphNode<L> {
    fn from(label: L) -> Self {
        GraphNode::new(label)
    }
}

// Lets label-keyed lookups hit collections of nodes directly.
impl<L> Borrow<L> for GraphNode<L> {
    fn borrow(&self) -> &L {
        &self.label
    }
}

impl<L: fmt::Display> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
