use core::borrow::Borrow;
use core::ops::Index;

use super::BSTSet;
use crate::Rank;

impl<K> BSTSet<K> {
    /// Returns the key at position `rank` in ascending order, or `None` if `rank` is out of
    /// bounds.
    ///
    /// The descent steers by the left subtree's count at each node.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([20, 10, 30]);
    /// assert_eq!(set.get_by_rank(1), Some(&20));
    /// assert!(set.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&K> {
        self.tree.get_by_rank(rank)
    }

    /// Returns how many keys are smaller than `key`, or `None` if `key` is not present.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([10, 20]);
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.rank_of(key)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K> Index<Rank> for BSTSet<K> {
    type Output = K;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
