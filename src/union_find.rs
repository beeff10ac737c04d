//! Disjoint-set forest over document IDs.
//!
//! Supports near-constant amortized merge and root queries via full path
//! compression and union by rank. The forest is rebuilt from scratch for
//! each clustering query; it is never persisted.

use std::collections::HashMap;

/// Union-Find structure keyed by document ID.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: HashMap<usize, usize>,
    rank: HashMap<usize, u32>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insertion: a new element becomes its own root at rank 0.
    pub fn add(&mut self, x: usize) {
        self.parent.entry(x).or_insert(x);
        self.rank.entry(x).or_insert(0);
    }

    /// True if the element has been added.
    pub fn contains(&self, x: usize) -> bool {
        self.parent.contains_key(&x)
    }

    /// All elements ever added, in arbitrary order.
    pub fn elements(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent.keys().copied()
    }

    fn parent_of(&self, x: usize) -> usize {
        *self
            .parent
            .get(&x)
            .unwrap_or_else(|| panic!("union-find: find({x}) before add({x}), caller bug"))
    }

    /// Root of `x`, with full path compression: every node on the walk is
    /// re-pointed directly at the root. Panics if `x` was never added.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        loop {
            let parent = self.parent_of(root);
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = x;
        while node != root {
            let parent = self.parent_of(node);
            self.parent.insert(node, root);
            node = parent;
        }

        root
    }

    /// Merge the sets containing `x` and `y`. The lower-rank root attaches
    /// under the higher-rank root; on a tie, `x`'s root wins and its rank
    /// increments.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];
        if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else {
            self.parent.insert(root_y, root_x);
            self.rank.insert(root_x, rank_x + 1);
        }
    }

    /// True iff both elements have been added and share a root.
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.contains(x) && self.contains(y) && self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut uf = UnionFind::new();
        uf.add(7);
        uf.union(7, 7);
        uf.add(7);
        assert_eq!(uf.find(7), 7);
    }

    #[test]
    fn test_fresh_elements_are_own_roots() {
        let mut uf = UnionFind::new();
        for i in 0..5 {
            uf.add(i);
        }
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_connects_transitively() {
        let mut uf = UnionFind::new();
        for i in 1..=5 {
            uf.add(i);
        }
        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(2, 3);

        let root = uf.find(1);
        for i in 2..=4 {
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.find(5), 5);
    }

    #[test]
    fn test_path_compression_flattens_chains() {
        let mut uf = UnionFind::new();
        for i in 0..4 {
            uf.add(i);
        }
        // Two rank-1 trees merged on a tie leave 3 -> 2 -> 0.
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        assert_eq!(uf.parent[&3], 2);

        // find() re-points every node on the walk at the root.
        let root = uf.find(3);
        assert_eq!(root, 0);
        assert_eq!(uf.parent[&3], root);
        assert_eq!(uf.parent[&2], root);
    }

    #[test]
    fn test_rank_tie_increments_winner() {
        let mut uf = UnionFind::new();
        uf.add(1);
        uf.add(2);
        uf.union(1, 2);
        let root = uf.find(1);
        assert_eq!(uf.rank[&root], 1);
        assert_eq!(uf.find(2), root);
    }

    #[test]
    fn test_same_set() {
        let mut uf = UnionFind::new();
        uf.add(1);
        uf.add(2);
        uf.add(3);
        uf.union(1, 2);
        assert!(uf.same_set(1, 2));
        assert!(!uf.same_set(1, 3));
        assert!(!uf.same_set(1, 99));
    }

    #[test]
    #[should_panic(expected = "before add")]
    fn test_find_before_add_panics() {
        let mut uf = UnionFind::new();
        uf.find(42);
    }
}
