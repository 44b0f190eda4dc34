//! A disjoint-set ("union-find") data structure over a fixed universe of integer elements,
//! generic over unsigned integer element types.
//!
//! A [`DisjointSet`] keeps a partition of `0..n` into classes. Each class is a tree of parent
//! pointers whose root is the class representative. Two operations drive it:
//!  1. [`DisjointSet::unite`] merges two classes, attaching the root of the class with the
//!     smaller recorded size under the other root ("union by size"); and
//!  2. [`DisjointSet::root`] finds a representative by walking parent pointers. The walk does
//!     not compress paths, so every query works on `&self` and union by size alone keeps trees
//!     no deeper than `log2(n)`.
//!
//! Out-of-range elements are a caller bug for the plain operations, which panic like slice
//! indexing. The `try_` operations report a [`DisjointSetError`] instead.
//!
//! # Examples
//! ```
//!use ural::DisjointSet;
//!
//!let mut set = DisjointSet::new(31_usize);
//!for i in 2..31 {
//!    set.unite(i, i - 2);
//!}
//!assert!(set.is_united(0, 30));
//!assert!(set.is_united(1, 29));
//!assert!(!set.is_united(0, 1));
//!assert_eq!(set.class_count(), 2);
//!assert!(set.try_unite(0, 31).is_err());
//! ```
//!
//! # References
//! * [Tarjan, R.E. Efficiency of a Good But Not Linear Set Union Algorithm.](https://doi.org/10.1145/321879.321884)

pub use crate::builder::DisjointSetBuilder;
pub use crate::disjoint_set::DisjointSet;
pub use crate::element::Element;
pub use crate::error::DisjointSetError;

mod builder;
mod classes;
mod disjoint_set;
mod element;
mod error;
