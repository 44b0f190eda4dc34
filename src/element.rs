use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Integer types usable as element identifiers of a [`DisjointSet`](crate::DisjointSet).
///
/// Implemented for every unsigned primitive integer. Element ids double as positions in the
/// set's internal storage, so the type only needs to be able to name each slot.
pub trait Element: PrimInt + Unsigned + Hash + Debug + Display {
    /// Converts the id into a storage slot. `None` if the id cannot address memory at all.
    fn slot(self) -> Option<usize> {
        self.to_usize()
    }
}

impl<T> Element for T where T: PrimInt + Unsigned + Hash + Debug + Display {}

/// Iterates `0..n` in the element type itself, so no narrowing conversion is ever needed.
pub(crate) fn ids<I: Element>(n: I) -> impl Iterator<Item = I> {
    let mut next = I::zero();
    std::iter::from_fn(move || {
        if next < n {
            let current = next;
            next = next + I::one();
            Some(current)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_cover_the_universe() {
        assert_eq!(ids(4_u8).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(ids(0_u32).count(), 0);
    }

    #[test]
    fn ids_stop_at_type_maximum() {
        assert_eq!(ids(u8::MAX).count(), 255);
    }

    #[test]
    fn slot_of_small_ids() {
        assert_eq!(7_u16.slot(), Some(7));
        assert_eq!(u128::MAX.slot(), None);
    }
}
