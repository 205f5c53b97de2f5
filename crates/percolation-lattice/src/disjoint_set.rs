//! Weighted disjoint sets (union-find) over `0..len`.
//!
//! Unions attach the smaller tree under the root of the larger one, and
//! `find` halves the path it walks. Together these keep both operations at
//! amortized inverse-Ackermann cost, which matters because a trial performs
//! up to four unions per opened site across n² sites.
//!
//! Elements outside `0..len` behave as isolated singletons: `find` returns
//! them unchanged and `union` refuses to merge them. Callers are expected to
//! validate indices before reaching this layer.

/// Disjoint-set forest with union by size and path halving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    /// Parent pointer for each element; roots point to themselves.
    parent: Vec<usize>,
    /// Number of elements in the tree rooted at each index (only meaningful for roots).
    size: Vec<usize>,
    /// Number of distinct components.
    count: usize,
}

impl DisjointSet {
    /// Create `len` singleton components `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Return `true` if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the number of distinct components.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Return the root of the component containing `element`.
    ///
    /// Every visited node is re-pointed at its grandparent on the way up.
    pub fn find(&mut self, element: usize) -> usize {
        let mut current = element;
        while let Some(&parent) = self.parent.get(current) {
            if parent == current {
                break;
            }
            let grandparent = self.parent.get(parent).copied().unwrap_or(parent);
            if let Some(slot) = self.parent.get_mut(current) {
                *slot = grandparent;
            }
            current = grandparent;
        }
        current
    }

    /// Return `true` if `a` and `b` belong to the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// Returns `true` if two distinct components were merged, `false` if
    /// they were already joined or either element is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }

        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let size_a = self.size.get(root_a).copied().unwrap_or(1);
        let size_b = self.size.get(root_b).copied().unwrap_or(1);
        let (small, large) = if size_a < size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(slot) = self.parent.get_mut(small) {
            *slot = large;
        }
        if let Some(slot) = self.size.get_mut(large) {
            *slot = size_a.saturating_add(size_b);
        }
        self.count = self.count.saturating_sub(1);
        true
    }
}
