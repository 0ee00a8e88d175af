//! Fuzz target for adjacency-matrix graph operations.
//!
//! Drives the graph with random operation sequences and checks the matrix
//! invariants after every step, then runs Kruskal on the result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mstkit_graph::{kruskal_mst, AdjacencyMatrixGraph, NodeKey};

/// Operations that can be performed on the graph.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    /// Add a node by label.
    AddNode(u8),
    /// Remove a node by label.
    RemoveNode(u8),
    /// Remove a node by index.
    RemoveIndex(u8),
    /// Add a weighted edge between two labels.
    AddEdge { a: u8, b: u8, weight: u8 },
    /// Remove the edge between two indices.
    RemoveEdge { i: u8, j: u8 },
    /// Query neighbours of a label.
    Adjacent(u8),
    /// Drop everything.
    Clear,
}

fuzz_target!(|ops: Vec<GraphOp>| {
    // Limit operations to prevent timeout
    if ops.len() > 500 {
        return;
    }

    let mut graph: AdjacencyMatrixGraph<u8> = AdjacencyMatrixGraph::new();

    for op in &ops {
        match *op {
            GraphOp::AddNode(label) => {
                graph.add_node(label % 32);
            }
            GraphOp::RemoveNode(label) => {
                let _ = graph.remove_node(NodeKey::label(&(label % 32)));
            }
            GraphOp::RemoveIndex(i) => {
                let _ = graph.remove_node(i as usize);
            }
            GraphOp::AddEdge { a, b, weight } => {
                let (a, b) = (a % 32, b % 32);
                let _ = graph.add_weighted_edge_between(
                    NodeKey::label(&a),
                    NodeKey::label(&b),
                    f64::from(weight),
                );
            }
            GraphOp::RemoveEdge { i, j } => {
                let _ = graph.remove_edge_between(i as usize, j as usize);
            }
            GraphOp::Adjacent(label) => {
                let _ = graph.adjacent_nodes_of(NodeKey::label(&label));
            }
            GraphOp::Clear => graph.clear(),
        }

        assert!(graph.validate().is_ok(), "{:?}", graph.validate());
        assert_eq!(graph.edges().len(), graph.edge_count());
    }

    let mst = kruskal_mst(&graph).expect("weights are non-negative");
    assert!(mst.edge_count() < graph.node_count().max(1));
});
