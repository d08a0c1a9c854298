use core::num::NonZero;

use super::handle::Word;

/// Number of nodes in a subtree, the node itself included.
///
/// Only nodes carry a count, so it is never zero; the niche keeps `Node` compact.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<Word>);

impl Size {
    /// Largest representable count, which is also the arena's slot limit.
    pub(crate) const MAX: usize = Word::MAX as usize;
    pub(crate) const ONE: Self = Self(NonZero::<Word>::MIN);

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get() as usize
    }

    /// The count of a node whose children have `left` and `right` nodes beneath them.
    #[inline]
    pub(crate) fn of_subtree(left: usize, right: usize) -> Self {
        match Word::try_from(left + right + 1).ok().and_then(NonZero::new) {
            Some(count) => Self(count),
            None => panic!("`Size::of_subtree()` - count > `Size::MAX`!"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::handle::Handle;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Option<Size>, Word);

    #[test]
    fn leaf_counts_itself() {
        assert_eq!(Size::of_subtree(0, 0), Size::ONE);
        assert_eq!(Size::ONE.to_usize(), 1);
    }

    #[test]
    fn largest_count_fits() {
        // The arena can fill every slot, so the root count must reach that far.
        assert_eq!(Size::MAX, Handle::SLOTS);
        assert_eq!(Size::of_subtree(Size::MAX - 1, 0).to_usize(), Size::MAX);
    }

    #[test]
    #[should_panic(expected = "`Size::of_subtree()` - count > `Size::MAX`!")]
    fn count_past_max_panics() {
        let _ = Size::of_subtree(Size::MAX / 2, Size::MAX / 2 + 1);
    }

    proptest! {
        #[test]
        fn subtree_count_adds_children(left in 0..Size::MAX / 2, right in 0..Size::MAX / 2) {
            prop_assert_eq!(Size::of_subtree(left, right).to_usize(), left + right + 1);
        }
    }
}
