use core::num::NonZero;

/// Integer width behind handles and subtree counts. Narrow under test so the limits are reachable.
#[cfg(test)]
pub(crate) type Word = u16;
#[cfg(not(test))]
pub(crate) type Word = u32;

/// Reference to a node slot in the arena.
///
/// Holds the slot's one-based position. Zero never occurs, so a missing child link,
/// `Option<Handle>`, still fits in one `Word`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Word>);

impl Handle {
    /// Number of distinct slots a handle can address.
    pub(crate) const SLOTS: usize = Word::MAX as usize;

    /// The handle for slot `index`, or `None` once `index` is past the last addressable slot.
    #[inline]
    pub(crate) fn for_slot(index: usize) -> Option<Self> {
        let position = Word::try_from(index.checked_add(1)?).ok()?;
        NonZero::new(position).map(Self)
    }

    /// Index of the slot in the arena's backing storage.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}
