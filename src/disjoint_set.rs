use crate::element::{ids, Element};
use crate::error::DisjointSetError;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node<I> {
    parent: I,
    // Only meaningful while the node is a root
    size: I,
}

/// A partition of the elements `0..n` into disjoint classes, supporting union and find.
///
/// Unions attach the root of the smaller class under the root of the larger one. Root lookup
/// walks the parent chain without compressing it, so queries never mutate the structure and
/// take `&self`.
///
/// The unchecked operations ([`parent`](Self::parent), [`root`](Self::root),
/// [`is_united`](Self::is_united), [`unite`](Self::unite)) panic when given an element outside
/// `0..size()`, in the same way slice indexing does. Each has a `try_` counterpart that returns
/// a [`DisjointSetError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet<I = usize> {
    nodes: Vec<Node<I>>,
    len: I,
    classes: I,
}

impl<I: Element> DisjointSet<I> {
    /// Creates a disjoint set of `n` elements, each in a class of its own.
    ///
    /// # Examples
    /// ```
    ///use ural::DisjointSet;
    ///
    ///let set = DisjointSet::new(17_u32);
    ///assert_eq!(set.size(), 17);
    ///assert!((0..17).all(|i| set.root(i) == i && set.parent(i) == i));
    /// ```
    pub fn new(n: I) -> Self {
        let nodes = ids(n)
            .map(|id| Node { parent: id, size: I::one() })
            .collect();
        DisjointSet { nodes, len: n, classes: n }
    }

    /// The number of elements. Fixed at construction.
    pub fn size(&self) -> I {
        self.len
    }

    /// Whether the universe has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.len.is_zero()
    }

    /// The number of disjoint classes currently in the partition.
    pub fn class_count(&self) -> I {
        self.classes
    }

    /// Returns the parent pointer stored for `p`. Roots are their own parents.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](Self::size).
    pub fn parent(&self, p: I) -> I {
        self.nodes[self.slot(p)].parent
    }

    /// Returns whether `p` is the representative of its class.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](Self::size).
    pub fn is_root(&self, p: I) -> bool {
        self.parent(p) == p
    }

    /// Finds the representative of the class containing `p` by following parent pointers until
    /// reaching an element that is its own parent.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](Self::size).
    pub fn root(&self, p: I) -> I {
        self.walk(p).0
    }

    /// The number of parent hops from `p` to its root. Zero for roots.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](Self::size).
    pub fn depth(&self, p: I) -> usize {
        self.walk(p).1
    }

    /// The number of elements in the class containing `p`.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](Self::size).
    pub fn class_size(&self, p: I) -> I {
        self.nodes[self.slot(self.root(p))].size
    }

    /// Returns whether `p` and `q` belong to the same class.
    ///
    /// # Panics
    /// If either element is not less than [`size`](Self::size).
    pub fn is_united(&self, p: I, q: I) -> bool {
        self.root(p) == self.root(q)
    }

    /// Merges the classes containing `p` and `q`.
    ///
    /// The root of the class with the smaller recorded size is attached under the other root;
    /// on a tie, the root of `q` goes under the root of `p`.
    ///
    /// # Returns
    /// * `true` if two distinct classes were merged, `false` if `p` and `q` were already united.
    ///
    /// # Panics
    /// If either element is not less than [`size`](Self::size).
    ///
    /// # Examples
    /// ```
    ///use ural::DisjointSet;
    ///
    ///let mut set = DisjointSet::new(4_usize);
    ///assert!(set.unite(0, 1));
    ///assert!(set.unite(3, 1));
    ///assert!(!set.unite(0, 3));
    ///assert!(set.is_united(0, 3));
    ///assert!(!set.is_united(0, 2));
    ///assert_eq!(set.class_size(3), 3);
    /// ```
    pub fn unite(&mut self, p: I, q: I) -> bool {
        let p_root = self.root(p);
        let q_root = self.root(q);
        if p_root == q_root {
            return false;
        }
        let p_slot = self.slot(p_root);
        let q_slot = self.slot(q_root);
        let p_size = self.nodes[p_slot].size;
        let q_size = self.nodes[q_slot].size;

        let (new_root, root_slot, child_slot) = if p_size < q_size {
            (q_root, q_slot, p_slot)
        } else {
            (p_root, p_slot, q_slot)
        };
        let merged_size = p_size + q_size;
        self.nodes[child_slot].parent = new_root;
        self.nodes[root_slot].size = merged_size;
        self.classes = self.classes - I::one();

        trace!(root = %new_root, size = %merged_size, "united classes");
        true
    }

    /// Checked version of [`parent`](Self::parent).
    pub fn try_parent(&self, p: I) -> Result<I, DisjointSetError> {
        let slot = self.checked_slot(p)?;
        Ok(self.nodes[slot].parent)
    }

    /// Checked version of [`root`](Self::root).
    pub fn try_root(&self, p: I) -> Result<I, DisjointSetError> {
        self.checked_slot(p)?;
        Ok(self.root(p))
    }

    /// Checked version of [`is_united`](Self::is_united).
    pub fn try_is_united(&self, p: I, q: I) -> Result<bool, DisjointSetError> {
        self.checked_slot(p)?;
        self.checked_slot(q)?;
        Ok(self.is_united(p, q))
    }

    /// Checked version of [`unite`](Self::unite). Both elements are validated before anything
    /// is modified, so an error leaves the set untouched.
    pub fn try_unite(&mut self, p: I, q: I) -> Result<bool, DisjointSetError> {
        self.checked_slot(p)?;
        self.checked_slot(q)?;
        Ok(self.unite(p, q))
    }

    // Follows parent pointers from `p`, returning the root and the number of hops taken
    fn walk(&self, p: I) -> (I, usize) {
        let mut hops = 0;
        let mut current = p;
        loop {
            let parent = self.parent(current);
            if parent == current {
                return (current, hops);
            }
            hops += 1;
            current = parent;
        }
    }

    fn locate(&self, p: I) -> Option<usize> {
        p.slot().filter(|&slot| slot < self.nodes.len())
    }

    fn slot(&self, p: I) -> usize {
        match self.locate(p) {
            Some(slot) => slot,
            None => panic!(
                "element index {p} is out of range for a disjoint set of size {}",
                self.len
            ),
        }
    }

    fn checked_slot(&self, p: I) -> Result<usize, DisjointSetError> {
        self.locate(p).ok_or_else(|| {
            warn!(index = %p, size = %self.len, "rejected out-of-range element");
            DisjointSetError::index_out_of_range(p, self.len)
        })
    }
}

impl<I: Element> Default for DisjointSet<I> {
    fn default() -> Self {
        DisjointSet::new(I::zero())
    }
}

impl<I: Element> Extend<(I, I)> for DisjointSet<I> {
    /// Unites every pair in turn.
    ///
    /// # Panics
    /// If any element is not less than [`size`](DisjointSet::size).
    fn extend<T: IntoIterator<Item = (I, I)>>(&mut self, pairs: T) {
        for (p, q) in pairs {
            self.unite(p, q);
        }
    }
}
