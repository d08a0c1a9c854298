/// A zero-based position in the ascending order of a set.
///
/// Ranks are answered from the per-node subtree counts in O(height).
///
/// # Examples
///
/// ```
/// use bstset::{BSTSet, Rank};
///
/// let set = BSTSet::from([30, 10, 20]);
/// assert_eq!(set[Rank(0)], 10);
/// assert_eq!(set[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
