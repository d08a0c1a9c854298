use super::BSTSet;
use crate::raw::RawBST;

impl<K> BSTSet<K> {
    /// Creates an empty set with room for at least `capacity` keys before the node arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set: BSTSet<i32> = BSTSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BSTSet {
            tree: RawBST::with_capacity(capacity),
        }
    }

    /// Returns how many keys the set can hold before the node arena grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
