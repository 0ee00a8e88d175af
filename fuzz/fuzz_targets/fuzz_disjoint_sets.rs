//! Fuzz target for the disjoint-set forest.
//!
//! Random make-set / union / find sequences must keep the set count in step
//! with the number of representatives.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mstkit_graph::{DisjointSets, ForestDisjointSets};

/// Operations that can be performed on the forest.
#[derive(Debug, Arbitrary)]
enum SetOp {
    MakeSet(u8),
    Union(u8, u8),
    Find(u8),
    Members(u8),
    Clear,
}

fuzz_target!(|ops: Vec<SetOp>| {
    if ops.len() > 1000 {
        return;
    }

    let mut sets: ForestDisjointSets<u8> = ForestDisjointSets::new();

    for op in &ops {
        match *op {
            SetOp::MakeSet(e) => {
                let present = sets.is_present(&e);
                assert_eq!(sets.make_set(e).is_err(), present);
            }
            SetOp::Union(a, b) => {
                if sets.union(&a, &b).is_ok() {
                    assert!(sets.connected(&a, &b).unwrap_or(false));
                }
            }
            SetOp::Find(e) => {
                let present = sets.is_present(&e);
                assert_eq!(sets.find_set(&e).is_some(), present);
            }
            SetOp::Members(e) => {
                let _ = sets.current_elements_of_set_containing(&e);
            }
            SetOp::Clear => sets.clear(),
        }

        assert_eq!(sets.current_representatives().len(), sets.set_count());
    }
});
