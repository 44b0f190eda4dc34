use std::collections::HashMap;
use crate::element::{ids, Element};
use crate::DisjointSet;

impl<I: Element> DisjointSet<I> {
    /// Iterates over the representative of every class, in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = I> + '_ {
        ids(self.size()).filter(move |&id| self.is_root(id))
    }

    /// Lists every element united with `p` (including `p` itself), in ascending order.
    ///
    /// # Panics
    /// If `p` is not less than [`size`](DisjointSet::size).
    pub fn class_of(&self, p: I) -> Vec<I> {
        let root = self.root(p);
        ids(self.size()).filter(|&id| self.root(id) == root).collect()
    }

    /// Materialises the whole partition.
    ///
    /// # Returns
    /// * One vector per class, each sorted ascending. Classes are ordered by their smallest
    ///   element.
    ///
    /// # Examples
    /// ```
    ///use ural::DisjointSet;
    ///
    ///let mut set = DisjointSet::new(6_u32);
    ///set.extend([(4, 1), (5, 2), (2, 0)]);
    ///assert_eq!(set.classes(), vec![vec![0, 2, 5], vec![1, 4], vec![3]]);
    /// ```
    pub fn classes(&self) -> Vec<Vec<I>> {
        let mut position_of_root: HashMap<I, usize> = HashMap::new();
        let mut classes: Vec<Vec<I>> = Vec::new();
        // Ascending scan, so each class is created by its smallest member
        for id in ids(self.size()) {
            let position = *position_of_root.entry(self.root(id)).or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[position].push(id);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_of_fresh_set() {
        let set = DisjointSet::new(4_usize);
        assert_eq!(set.roots().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn roots_after_unions() {
        let mut set = DisjointSet::new(5_usize);
        set.unite(3, 4);
        set.unite(1, 4);
        assert_eq!(set.roots().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(set.roots().count(), set.class_count());
    }

    #[test]
    fn class_of_member() {
        let mut set = DisjointSet::new(7_u16);
        set.extend([(6, 0), (3, 6)]);
        assert_eq!(set.class_of(3), vec![0, 3, 6]);
        assert_eq!(set.class_of(5), vec![5]);
    }

    #[test]
    fn classes_partition_every_element_once() {
        let mut set = DisjointSet::new(9_usize);
        set.extend([(8, 7), (0, 4), (4, 8), (2, 5)]);
        let classes = set.classes();
        assert_eq!(classes, vec![vec![0, 4, 7, 8], vec![1], vec![2, 5], vec![3], vec![6]]);
        let mut flattened: Vec<usize> = classes.into_iter().flatten().collect();
        flattened.sort();
        assert_eq!(flattened, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn classes_of_empty_set() {
        let set: DisjointSet<u32> = DisjointSet::new(0);
        assert!(set.classes().is_empty());
        assert_eq!(set.roots().count(), 0);
    }
}
