use std::cell::Cell;

enum UnionFindEntry {
    RootOfSet {
        // For weighted union-find
        weight: usize,
    },
    OwnedBy {
        owned_by: Cell<usize>,
    },
}

/// A data structure tracking disjoint sets of the numbers `0..item_count`.
///
/// The piece model uses it to group orderings of stickers into physical pieces.
pub struct UnionFind {
    sets: Box<[UnionFindEntry]>,
}

impl UnionFind {
    /// Create a new `UnionFind` where every element is in its own set
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        UnionFind {
            sets: (0..item_count)
                .map(|_| UnionFindEntry::RootOfSet { weight: 1 })
                .collect(),
        }
    }

    /// The root of the set containing `item`.
    ///
    /// Panics if the item is outside the range of numbers in the union-find.
    #[must_use]
    pub fn find(&self, item: usize) -> usize {
        match &self.sets[item] {
            UnionFindEntry::RootOfSet { weight: _ } => item,
            UnionFindEntry::OwnedBy { owned_by } => {
                let root = self.find(owned_by.get());
                owned_by.set(root);
                root
            }
        }
    }

    /// The number of elements in the set containing `item`
    #[must_use]
    pub fn set_size(&self, item: usize) -> usize {
        match &self.sets[self.find(item)] {
            UnionFindEntry::RootOfSet { weight } => *weight,
            UnionFindEntry::OwnedBy { owned_by: _ } => unreachable!(),
        }
    }

    /// Union the sets containing `a` and `b`. The heavier root becomes the parent.
    pub fn union(&mut self, a: usize, b: usize) {
        let mut a_root = self.find(a);
        let mut b_root = self.find(b);

        if a_root == b_root {
            return;
        }

        if self.set_size(a_root) < self.set_size(b_root) {
            std::mem::swap(&mut a_root, &mut b_root);
        }

        let b_size = self.set_size(b_root);

        self.sets[b_root] = UnionFindEntry::OwnedBy {
            owned_by: Cell::new(a_root),
        };

        match &mut self.sets[a_root] {
            UnionFindEntry::RootOfSet { weight } => *weight += b_size,
            UnionFindEntry::OwnedBy { owned_by: _ } => unreachable!(),
        }
    }

    /// All of the sets, each sorted, ordered by their smallest element
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![vec![]; self.sets.len()];

        for item in 0..self.sets.len() {
            by_root[self.find(item)].push(item);
        }

        let mut sets = by_root
            .into_iter()
            .filter(|set| !set.is_empty())
            .collect::<Vec<_>>();
        sets.sort_by_key(|set| set[0]);
        sets
    }
}
