//! Disjoint-set (union-find) forest over dense indices.
//!
//! [`DisjointSet`] tracks a partition of `0..n` into groups. It backs Kruskal's
//! spanning tree construction, where an edge is accepted only if its endpoints are
//! still in different groups.
//!
//! Both classic optimizations are applied: [`find`](DisjointSet::find) compresses
//! the path it walks so that every visited element points directly at its root,
//! and [`union`](DisjointSet::union) hangs the shallower tree under the deeper one
//! (union by rank). Together they keep every operation at O(α(n)) amortized.

/// A union-find forest over the indices `0..len`.
///
/// # Examples
///
/// ```rust
/// use graphcore::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0)); // already joined
///
/// assert!(sets.connected(0, 1));
/// assert!(!sets.connected(1, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, one per index.
    #[must_use]
    pub fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the root of the set containing `x`.
    ///
    /// Walks the parent links iteratively, then points every element on the walked
    /// path directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root of the lower-ranked tree is attached under the other root; on equal
    /// ranks the root of `a` is attached under the root of `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `a` and `b` were
    /// already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Equal => {
                self.parent[root_a] = root_b;
                self.rank[root_b] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
