use crate::element::Element;
use crate::{DisjointSet, DisjointSetError};
use tracing::debug;

/// Builder object to construct a disjoint set with unions already applied.
pub struct DisjointSetBuilder<I> {
    len: Option<I>,
    unions: Vec<(I, I)>,
}

impl<I: Element> DisjointSet<I> {
    /// Enters the builder pattern, allowing the element count and an initial set of unions to
    /// be given before construction.
    ///
    /// # Returns
    /// * the disjoint set builder
    ///
    /// # Examples
    /// ```
    ///use ural::DisjointSet;
    ///
    ///let set = DisjointSet::builder()
    ///    .len(6_usize)
    ///    .unite(0, 1)
    ///    .unite_all([(2, 3), (3, 4)])
    ///    .build()
    ///    .unwrap();
    ///assert_eq!(set.class_count(), 3);
    ///assert!(set.is_united(2, 4));
    /// ```
    pub fn builder() -> DisjointSetBuilder<I> {
        DisjointSetBuilder { len: None, unions: Vec::new() }
    }
}

impl<I: Element> DisjointSetBuilder<I> {

    /// Sets the number of elements. Defaults to 0.
    ///
    /// # Parameters
    /// * len - the size of the universe `0..len`
    ///
    /// # Returns
    /// * the disjoint set builder
    pub fn len(mut self, len: I) -> DisjointSetBuilder<I> {
        self.len = Some(len);
        self
    }

    /// Queues a union of the classes containing `p` and `q`. Unions are applied in the order
    /// they were queued.
    ///
    /// # Returns
    /// * the disjoint set builder
    pub fn unite(mut self, p: I, q: I) -> DisjointSetBuilder<I> {
        self.unions.push((p, q));
        self
    }

    /// Queues a union for every pair.
    ///
    /// # Returns
    /// * the disjoint set builder
    pub fn unite_all<T: IntoIterator<Item = (I, I)>>(mut self, pairs: T) -> DisjointSetBuilder<I> {
        self.unions.extend(pairs);
        self
    }

    /// Finishes the building of the disjoint set.
    ///
    /// # Returns
    /// * The constructed set, or an `IndexOutOfRange` error if any queued union names an
    ///   element outside `0..len`.
    pub fn build(self) -> Result<DisjointSet<I>, DisjointSetError> {
        let len = self.len.unwrap_or_else(I::zero);
        let mut set = DisjointSet::new(len);
        for &(p, q) in &self.unions {
            set.try_unite(p, q)?;
        }
        debug!(
            len = %len,
            unions = self.unions.len(),
            classes = %set.class_count(),
            "built disjoint set"
        );
        Ok(set)
    }
}
