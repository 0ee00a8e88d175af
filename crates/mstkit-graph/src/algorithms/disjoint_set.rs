//! Disjoint-Set (Union-Find) forest.
//!
//! Tracks a partition of arbitrary elements into disjoint sets. Supports:
//! - `make_set(e)`: Start a singleton set
//! - `find_set(e)`: Find the representative of e's set
//! - `union(e1, e2)`: Merge the sets containing e1 and e2
//!
//! Uses full path compression and union by rank for near O(1) amortized
//! operations. Trees live in a flat arena: slot `i` holds the i-th inserted
//! element and a root is a slot whose parent is itself.
//!
//! Membership is value equality (`Eq + Hash`) on the element.

use std::hash::Hash;

use indexmap::IndexSet;
use tracing::trace;

use crate::{GraphError, Result};

/// Operations of a disjoint-set structure.
pub trait DisjointSets<E> {
    /// Check if `e` is tracked.
    fn is_present(&self, e: &E) -> bool;

    /// Start a new singleton set holding `e`.
    ///
    /// Fails with [`GraphError::ElementAlreadyPresent`] if `e` is tracked.
    fn make_set(&mut self, e: E) -> Result<()>;

    /// Representative of the set containing `e`, or `None` if `e` is untracked.
    ///
    /// Compresses the path from `e` to its root on every call.
    fn find_set(&mut self, e: &E) -> Option<&E>;

    /// Merge the sets containing `e1` and `e2`.
    ///
    /// Returns `true` if a merge occurred. When both roots have the same rank
    /// the representative of `e2` represents the union.
    fn union(&mut self, e1: &E, e2: &E) -> Result<bool>;

    /// One representative per set.
    fn current_representatives(&self) -> Vec<&E>;

    /// Every element in the set containing `e`.
    fn current_elements_of_set_containing(&self, e: &E) -> Result<Vec<&E>>;

    /// Forget every element.
    fn clear(&mut self);
}

/// Tree node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TreeNode {
    /// Parent slot (own slot if root).
    parent: usize,
    /// Upper bound on subtree height; only meaningful at a root.
    rank: u32,
}

/// Disjoint sets represented as a forest of rooted trees.
#[derive(Debug, Clone)]
pub struct ForestDisjointSets<E> {
    /// Tracked elements; the position of an element is its slot.
    elements: IndexSet<E>,
    /// Tree nodes, parallel to `elements`.
    nodes: Vec<TreeNode>,
    /// Number of disjoint sets.
    num_sets: usize,
}

impl<E> Default for ForestDisjointSets<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ForestDisjointSets<E> {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self {
            elements: IndexSet::new(),
            nodes: Vec::new(),
            num_sets: 0,
        }
    }

    /// Create an empty forest with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: IndexSet::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            num_sets: 0,
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.num_sets
    }

    /// Root slot of `x`, re-pointing every slot on the walked path at it.
    fn find_root(&mut self, x: usize) -> usize {
        let root = self.root_of(x);
        let mut cur = x;
        while cur != root {
            cur = std::mem::replace(&mut self.nodes[cur].parent, root);
        }
        root
    }

    /// Find root slot without touching the forest.
    fn root_of(&self, x: usize) -> usize {
        let mut root = x;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }
        root
    }
}

impl<E: Eq + Hash> ForestDisjointSets<E> {
    fn slot(&self, e: &E) -> Result<usize> {
        self.elements
            .get_index_of(e)
            .ok_or(GraphError::ElementNotFound)
    }

    /// Check if two elements are in the same set.
    pub fn connected(&mut self, e1: &E, e2: &E) -> Result<bool> {
        let (x, y) = (self.slot(e1)?, self.slot(e2)?);
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Rank stored on `e`'s tree node.
    pub fn rank_of(&self, e: &E) -> Option<u32> {
        self.elements.get_index_of(e).map(|x| self.nodes[x].rank)
    }

    /// Size of the set containing `e`.
    pub fn set_size(&mut self, e: &E) -> Result<usize> {
        let root = self.slot(e).map(|x| self.find_root(x))?;
        Ok((0..self.nodes.len())
            .filter(|&i| self.root_of(i) == root)
            .count())
    }
}

impl<E: Eq + Hash> DisjointSets<E> for ForestDisjointSets<E> {
    fn is_present(&self, e: &E) -> bool {
        self.elements.contains(e)
    }

    fn make_set(&mut self, e: E) -> Result<()> {
        let (slot, inserted) = self.elements.insert_full(e);
        if !inserted {
            return Err(GraphError::ElementAlreadyPresent);
        }
        self.nodes.push(TreeNode {
            parent: slot,
            rank: 0,
        });
        self.num_sets += 1;
        Ok(())
    }

    fn find_set(&mut self, e: &E) -> Option<&E> {
        let x = self.elements.get_index_of(e)?;
        let root = self.find_root(x);
        self.elements.get_index(root)
    }

    fn union(&mut self, e1: &E, e2: &E) -> Result<bool> {
        let (x, y) = (self.slot(e1)?, self.slot(e2)?);
        let root1 = self.find_root(x);
        let root2 = self.find_root(y);

        if root1 == root2 {
            return Ok(false); // Already in same set
        }

        // Union by rank; ties go to e2's root
        let r1 = self.nodes[root1].rank;
        let r2 = self.nodes[root2].rank;

        if r1 > r2 {
            self.nodes[root2].parent = root1;
        } else {
            if r1 == r2 {
                self.nodes[root2].rank += 1;
            }
            self.nodes[root1].parent = root2;
        }

        self.num_sets -= 1;
        trace!(root1, root2, r1, r2, sets = self.num_sets, "union");
        Ok(true)
    }

    fn current_representatives(&self) -> Vec<&E> {
        self.elements
            .iter()
            .zip(&self.nodes)
            .enumerate()
            .filter(|(i, (_, node))| node.parent == *i)
            .map(|(_, (e, _))| e)
            .collect()
    }

    fn current_elements_of_set_containing(&self, e: &E) -> Result<Vec<&E>> {
        let root = self.root_of(self.slot(e)?);
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.root_of(i) == root)
            .map(|(_, e)| e)
            .collect())
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.nodes.clear();
        self.num_sets = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest(elements: &[&'static str]) -> ForestDisjointSets<&'static str> {
        let mut sets: ForestDisjointSets<&'static str> = ForestDisjointSets::new();
        for &e in elements {
            sets.make_set(e).unwrap();
        }
        sets
    }

    /// Distance from slot to its root.
    fn depth<E>(sets: &ForestDisjointSets<E>, mut x: usize) -> usize {
        let mut depth = 0;
        while sets.nodes[x].parent != x {
            x = sets.nodes[x].parent;
            depth += 1;
        }
        depth
    }

    #[test]
    fn test_singleton_sets() {
        let mut sets = forest(&["a", "b", "c"]);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.set_count(), 3);

        // Each element is its own representative
        for e in ["a", "b", "c"] {
            assert_eq!(sets.find_set(&e), Some(&e));
            assert_eq!(sets.rank_of(&e), Some(0));
        }
    }

    #[test]
    fn test_make_set_twice_fails() {
        let mut sets = forest(&["a"]);
        assert_eq!(sets.make_set("a"), Err(GraphError::ElementAlreadyPresent));
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn test_find_set_miss() {
        let mut sets = forest(&["a"]);
        assert_eq!(sets.find_set(&"z"), None);
        assert!(!sets.is_present(&"z"));
        assert!(sets.is_present(&"a"));
    }

    #[test]
    fn test_union_tie_goes_to_second() {
        let mut sets = forest(&["e1", "e2"]);

        assert!(sets.union(&"e1", &"e2").unwrap());
        assert_eq!(sets.find_set(&"e1"), Some(&"e2"));
        assert_eq!(sets.find_set(&"e2"), Some(&"e2"));
        assert_eq!(sets.rank_of(&"e2"), Some(1));
        assert_eq!(sets.rank_of(&"e1"), Some(0));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_union_higher_rank_wins() {
        let mut sets = forest(&["a", "b", "c"]);

        // {a, b} rooted at b with rank 1
        sets.union(&"a", &"b").unwrap();

        // c has rank 0; b's root stays the representative either way
        sets.union(&"b", &"c").unwrap();
        assert_eq!(sets.find_set(&"c"), Some(&"b"));
        assert_eq!(sets.rank_of(&"b"), Some(1));

        let mut sets = forest(&["a", "b", "c"]);
        sets.union(&"a", &"b").unwrap();
        sets.union(&"c", &"a").unwrap();
        assert_eq!(sets.find_set(&"c"), Some(&"b"));
        assert_eq!(sets.rank_of(&"b"), Some(1));
    }

    #[test]
    fn test_rank_kept_after_attach() {
        let mut sets = forest(&["a", "b", "c", "d", "e", "f"]);
        sets.union(&"a", &"b").unwrap();
        sets.union(&"c", &"d").unwrap();
        assert_eq!(sets.rank_of(&"b"), Some(1));

        // b goes under d; its rank is not touched
        sets.union(&"b", &"d").unwrap();
        assert_eq!(sets.find_set(&"b"), Some(&"d"));
        assert_eq!(sets.rank_of(&"b"), Some(1));
        assert_eq!(sets.rank_of(&"d"), Some(2));

        sets.union(&"e", &"f").unwrap();
        sets.union(&"f", &"a").unwrap();
        assert_eq!(sets.find_set(&"f"), Some(&"d"));
        assert_eq!(sets.rank_of(&"f"), Some(1));
        assert_eq!(sets.rank_of(&"d"), Some(2));

        // compression re-points parents but leaves ranks alone
        sets.find_set(&"a");
        sets.find_set(&"e");
        assert_eq!(sets.rank_of(&"b"), Some(1));
        assert_eq!(sets.rank_of(&"f"), Some(1));
        assert_eq!(sets.set_size(&"e").unwrap(), 6);
    }

    #[test]
    fn test_union_same_set() {
        let mut sets = forest(&["a", "b", "c"]);

        sets.union(&"a", &"b").unwrap();
        sets.union(&"b", &"c").unwrap();

        // Union within same set returns false
        assert!(!sets.union(&"a", &"c").unwrap());
        assert!(sets.connected(&"a", &"c").unwrap());
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_union_unknown_element() {
        let mut sets = forest(&["a"]);
        assert_eq!(sets.union(&"a", &"z"), Err(GraphError::ElementNotFound));
        assert_eq!(sets.union(&"z", &"a"), Err(GraphError::ElementNotFound));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut sets: ForestDisjointSets<u32> = ForestDisjointSets::new();
        for i in 0..8 {
            sets.make_set(i).unwrap();
        }

        // Build a chain 0 -> 1 -> 2 -> 3 by hand, bypassing union by rank
        for i in 0..3 {
            sets.nodes[i].parent = i + 1;
        }
        sets.num_sets -= 3;
        assert_eq!(depth(&sets, 0), 3);

        assert_eq!(sets.find_set(&0), Some(&3));

        // Every node on the path now points directly at the root
        for i in 0..3 {
            assert_eq!(sets.nodes[i].parent, 3);
        }
    }

    #[test]
    fn test_depth_stays_logarithmic() {
        let n = 64u32;
        let mut sets: ForestDisjointSets<u32> = ForestDisjointSets::with_capacity(n as usize);
        for i in 0..n {
            sets.make_set(i).unwrap();
        }

        // Pairwise merges build the tallest trees union by rank allows
        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(2 * step as usize) {
                sets.union(&i, &(i + step)).unwrap();
            }
            step *= 2;
        }

        assert_eq!(sets.set_count(), 1);
        for x in 0..n as usize {
            assert!(depth(&sets, x) <= 6, "slot {} too deep", x);
        }
    }

    #[test]
    fn test_representatives_and_members() {
        let mut sets = forest(&["a", "b", "c", "d", "e"]);

        sets.union(&"a", &"b").unwrap();
        sets.union(&"c", &"d").unwrap();
        sets.union(&"d", &"e").unwrap();

        let reps = sets.current_representatives();
        assert_eq!(reps, vec![&"b", &"d"]);

        let mut members = sets.current_elements_of_set_containing(&"e").unwrap();
        members.sort();
        assert_eq!(members, vec![&"c", &"d", &"e"]);

        assert_eq!(sets.set_size(&"a").unwrap(), 2);
        assert_eq!(
            sets.current_elements_of_set_containing(&"z"),
            Err(GraphError::ElementNotFound)
        );
    }

    #[test]
    fn test_clear() {
        let mut sets = forest(&["a", "b"]);
        sets.union(&"a", &"b").unwrap();
        sets.clear();

        assert!(sets.is_empty());
        assert_eq!(sets.set_count(), 0);
        assert!(sets.current_representatives().is_empty());
        sets.make_set("a").unwrap();
        assert_eq!(sets.find_set(&"a"), Some(&"a"));
    }

    #[test]
    fn test_value_equality_membership() {
        let mut sets: ForestDisjointSets<String> = ForestDisjointSets::new();
        sets.make_set(String::from("x")).unwrap();

        // A distinct but equal String is the same element
        let probe = String::from("x");
        assert!(sets.is_present(&probe));
        assert_eq!(sets.find_set(&probe).map(String::as_str), Some("x"));
    }
}
