use std::collections::HashMap;

/// Union-find over `0..n` with path halving and union by size.
///
/// Only the roots have an entry in `sizes`, so the number of entries always equals
/// `num_sets`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parents: Vec<usize>,
    sizes: HashMap<usize, usize>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `num_elements` singleton sets.
    pub fn new(num_elements: usize) -> Self {
        DisjointSet {
            parents: (0..num_elements).collect(),
            sizes: (0..num_elements).map(|i| (i, 1)).collect(),
            num_sets: num_elements,
        }
    }

    pub fn num_elements(&self) -> usize {
        self.parents.len()
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative of the set containing `index`.
    ///
    /// Every node visited on the way up is relinked to its grandparent.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn find(&mut self, mut index: usize) -> usize {
        loop {
            let parent = self.parents[index];
            if parent == index {
                return index;
            }
            let grandparent = self.parents[parent];
            if grandparent == parent {
                return parent;
            }
            self.parents[index] = grandparent;
            index = grandparent;
        }
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in the set containing `index`.
    pub fn set_size(&mut self, index: usize) -> usize {
        let root = self.find(index);
        self.sizes.get(&root).copied().unwrap_or(1)
    }

    /// Merges the sets containing `a` and `b`, hanging the smaller root under the larger.
    ///
    /// The caller must check [`DisjointSet::same_set`] first. Merging a set with itself
    /// is rejected: it trips a debug assertion and otherwise returns `false` untouched.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        debug_assert_ne!(root_a, root_b, "union of {a} and {b}, which share a set");
        if root_a == root_b {
            return false;
        }

        let size_a = self.sizes.get(&root_a).copied().unwrap_or(1);
        let size_b = self.sizes.get(&root_b).copied().unwrap_or(1);
        if size_a < size_b {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parents[root_b] = root_a;
        self.sizes.remove(&root_b);
        self.sizes.insert(root_a, size_a + size_b);
        self.num_sets -= 1;
        true
    }

    #[cfg(test)]
    fn roots(&self) -> Vec<usize> {
        (0..self.parents.len())
            .filter(|&i| self.parents[i] == i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_singletons() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.num_sets(), 4);
        assert_eq!(set.num_elements(), 4);
        assert!(!set.same_set(0, 1));
        assert_eq!(set.find(3), 3);
    }

    #[test]
    fn test_union_merges_and_counts() {
        let mut set = DisjointSet::new(6);
        assert!(set.union(0, 1));
        assert!(set.same_set(0, 1));
        assert_eq!(set.num_sets(), 5);

        set.union(2, 3);
        set.union(3, 4);
        assert_eq!(set.num_sets(), 3);
        assert_eq!(set.set_size(4), 3);

        set.union(1, 4);
        assert_eq!(set.num_sets(), 2);
        assert!(set.same_set(0, 2));
        assert!(!set.same_set(0, 5));
        assert_eq!(set.set_size(0), 5);
    }

    #[test]
    fn test_smaller_set_joins_larger() {
        let mut set = DisjointSet::new(5);
        set.union(0, 1);
        set.union(0, 2);
        let big_root = set.find(0);
        // singleton 3 is smaller, so the big root stays a root
        set.union(3, 0);
        assert_eq!(set.find(3), big_root);
    }

    #[test]
    fn test_sizes_track_roots() {
        let mut set = DisjointSet::new(8);
        for (a, b) in [(0, 1), (2, 3), (1, 3), (4, 5), (6, 7), (5, 7)] {
            set.union(a, b);
            let mut roots = set.roots();
            let mut keys = set.sizes.keys().copied().collect::<Vec<_>>();
            roots.sort_unstable();
            keys.sort_unstable();
            assert_eq!(roots, keys);
            assert_eq!(roots.len(), set.num_sets());
        }
        assert_eq!(set.sizes.values().sum::<usize>(), 8);
    }

    #[test]
    fn test_find_halves_paths() {
        let mut set = DisjointSet::new(5);
        // Build a chain 0 -> 1 -> 2 -> 3 -> 4 by hand
        set.parents = vec![1, 2, 3, 4, 4];
        assert_eq!(set.find(0), 4);
        assert_eq!(set.parents[0], 2);
        assert_eq!(set.parents[2], 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_union_same_set_is_rejected() {
        let mut set = DisjointSet::new(2);
        set.union(0, 1);
        set.union(1, 0);
    }
}
