//! An ordered set based on an unbalanced binary search tree.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::error::{Result, SetError};
use crate::raw::{InOrder, RawBST};
use crate::{MathSet, Queue};

mod algebra;
mod capacity;
mod order_statistic;

/// An ordered set based on an unbalanced binary search tree.
///
/// Every node records how many nodes its subtree holds, so [`size`](BSTSet::size) is O(1) and
/// rank queries ([`get_by_rank`](BSTSet::get_by_rank), [`rank_of`](BSTSet::rank_of)) cost one
/// root-to-node descent.
///
/// The tree is never rebalanced and keys are never removed. Its shape is fixed entirely by
/// insertion order: inserting keys in ascending or descending order builds a chain whose height
/// equals the number of keys, and every lookup on it is O(n).
///
/// When a key equal to a stored key is added, the stored key is kept and the new one is dropped.
/// This matters only for key types whose [`Ord`] ignores part of the value.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to any
/// other key, as determined by the [`Ord`] trait, changes while it is in the set. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the `BSTSet`
/// that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use bstset::BSTSet;
///
/// let mut primes = BSTSet::new();
/// for p in [5, 3, 11, 7, 2, 3] {
///     primes.add(p);
/// }
///
/// assert_eq!(primes.size(), 5);
/// assert!(primes.contains(&7));
/// assert!(!primes.contains(&9));
///
/// let odd = BSTSet::from([1, 3, 5, 7, 9, 11]);
/// let even_primes = primes.difference(&odd);
/// assert_eq!(even_primes.keys().into_iter().copied().collect::<Vec<_>>(), [2]);
/// ```
pub struct BSTSet<K> {
    tree: RawBST<K>,
}

/// An iterator over the keys of a `BSTSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BSTSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use bstset::BSTSet;
///
/// let set = BSTSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: BSTSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    inner: InOrder<'a, K>,
}

impl<K> BSTSet<K> {
    /// Makes a new, empty `BSTSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set: BSTSet<i32> = BSTSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        BSTSet {
            tree: RawBST::new(),
        }
    }

    /// Adds a key to the set.
    ///
    /// Returns whether the key was newly inserted. If an equal key is already present the set is
    /// left unchanged and the stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let mut set = BSTSet::new();
    ///
    /// assert_eq!(set.add(2), true);
    /// assert_eq!(set.add(2), false);
    /// assert_eq!(set.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height), which is O(n) for a degenerate tree.
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        self.tree.insert(key)
    }

    /// Adds a key that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `key` is `None`; the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::{BSTSet, SetError};
    ///
    /// let mut set = BSTSet::new();
    /// assert_eq!(set.try_add(Some(4)), Ok(true));
    /// assert_eq!(set.try_add(None), Err(SetError::InvalidArgument { operation: "add" }));
    /// ```
    pub fn try_add(&mut self, key: Option<K>) -> Result<bool>
    where
        K: Ord,
    {
        let key = key.ok_or(SetError::InvalidArgument {
            operation: "add",
        })?;
        Ok(self.add(key))
    }

    /// Returns `true` if the set contains a key equal to `key`.
    ///
    /// The key may be any borrowed form of the set's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.contains_key(key)
    }

    /// [`contains`](BSTSet::contains) for a key that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `key` is `None`.
    pub fn try_contains<Q>(&self, key: Option<&Q>) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let key = key.ok_or(SetError::InvalidArgument {
            operation: "contains",
        })?;
        Ok(self.contains(key))
    }

    /// Returns a reference to the stored key equal to `key`, if any.
    ///
    /// The stored key is the one that was added first, which may differ from `key` in everything
    /// but its ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from(["apple".to_string(), "pear".to_string()]);
    /// assert_eq!(set.get("pear").map(String::as_str), Some("pear"));
    /// assert_eq!(set.get("plum"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.get(key)
    }

    /// [`get`](BSTSet::get) for a key that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `key` is `None`.
    pub fn try_get<Q>(&self, key: Option<&Q>) -> Result<Option<&K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let key = key.ok_or(SetError::InvalidArgument {
            operation: "get",
        })?;
        Ok(self.get(key))
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let mut set = BSTSet::new();
    /// assert_eq!(set.size(), 0);
    /// set.add('x');
    /// assert_eq!(set.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's subtree count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Alias of [`size`](BSTSet::size), for parity with the standard collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let mut set = BSTSet::new();
    /// assert!(set.is_empty());
    /// set.add(1);
    /// assert!(!set.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root, or 0 for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let bushy = BSTSet::from([2, 1, 3]);
    /// let chain = BSTSet::from([1, 2, 3]);
    /// assert_eq!(bushy.height(), 2);
    /// assert_eq!(chain.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Collects every key in ascending order.
    ///
    /// The whole tree is walked before returning, so the result is a snapshot that can be
    /// iterated as often as needed. Prefer [`iter`](BSTSet::iter) when a single lazy pass is
    /// enough.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([5, 3, 8, 3, 1]);
    /// let keys = set.keys();
    /// assert_eq!(keys.iter().copied().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
    /// assert_eq!(keys.iter().count(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn keys(&self) -> Queue<&K> {
        let mut queue = Queue::with_capacity(self.size());
        for key in self.iter() {
            queue.enqueue(key);
        }
        queue
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([3, 1, 2]);
    /// assert!(set.iter().copied().eq([1, 2, 3]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) for a full pass; the walk keeps a stack no deeper than the tree.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.tree.in_order(),
        }
    }

    /// Returns the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([4, 2, 9]);
    /// assert_eq!(set.first(), Some(&2));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.tree.first()
    }

    /// Returns the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let set = BSTSet::from([4, 2, 9]);
    /// assert_eq!(set.last(), Some(&9));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.tree.last()
    }
}

impl<K: Ord + Clone> MathSet<K> for BSTSet<K> {
    fn add(&mut self, key: K) -> bool {
        BSTSet::add(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    fn size(&self) -> usize {
        BSTSet::size(self)
    }

    fn union<S>(&self, other: &S) -> Self
    where
        S: MathSet<K> + ?Sized,
    {
        BSTSet::union(self, other)
    }

    fn intersection<S>(&self, other: &S) -> Self
    where
        S: MathSet<K> + ?Sized,
    {
        BSTSet::intersection(self, other)
    }

    fn difference<S>(&self, other: &S) -> Self
    where
        S: MathSet<K> + ?Sized,
    {
        BSTSet::difference(self, other)
    }

    fn keys(&self) -> Queue<&K> {
        BSTSet::keys(self)
    }
}

impl<K: Hash> Hash for BSTSet<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size());
        for key in self {
            key.hash(state);
        }
    }
}

impl<K: PartialEq> PartialEq for BSTSet<K> {
    fn eq(&self, other: &BSTSet<K>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for BSTSet<K> {}

impl<K: PartialOrd> PartialOrd for BSTSet<K> {
    fn partial_cmp(&self, other: &BSTSet<K>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord> Ord for BSTSet<K> {
    fn cmp(&self, other: &BSTSet<K>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

// Cloning copies the arena, so the clone has the same shape as the original.
impl<K: Clone> Clone for BSTSet<K> {
    fn clone(&self) -> Self {
        BSTSet {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for BSTSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the keys in ascending order separated by `", "`.
///
/// # Examples
///
/// ```
/// use bstset::BSTSet;
///
/// let set = BSTSet::from([8, 1, 5, 3]);
/// assert_eq!(set.to_string(), "1, 3, 5, 8");
/// assert_eq!(BSTSet::<u8>::new().to_string(), "");
/// ```
impl<K: fmt::Display> fmt::Display for BSTSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.iter();
        if let Some(first) = keys.next() {
            write!(f, "{first}")?;
            for key in keys {
                write!(f, ", {key}")?;
            }
        }
        Ok(())
    }
}

impl<K> Default for BSTSet<K> {
    fn default() -> Self {
        BSTSet::new()
    }
}

impl<K: Ord> FromIterator<K> for BSTSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = BSTSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for BSTSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a, K: 'a + Ord + Copy> Extend<&'a K> for BSTSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.add(key);
        }
    }
}

/// Builds a set by adding the array's keys in array order, which also fixes the tree's shape.
///
/// ```
/// use bstset::BSTSet;
///
/// let set = BSTSet::from([1, 2, 3]);
/// assert_eq!(set.size(), 3);
/// ```
impl<K: Ord, const N: usize> From<[K; N]> for BSTSet<K> {
    fn from(arr: [K; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K> IntoIterator for &'a BSTSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<alloc::vec::Vec<_>>()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    #[derive(Clone, Copy, Debug)]
    struct Tagged {
        id: u32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.id.cmp(&other.id)
        }
    }

    #[test]
    fn first_write_wins() {
        let mut set = BSTSet::new();
        assert!(set.add(Tagged {
            id: 7,
            tag: 'a',
        }));
        assert!(!set.add(Tagged {
            id: 7,
            tag: 'b',
        }));

        let probe = Tagged {
            id: 7,
            tag: 'z',
        };
        assert_eq!(set.get(&probe).map(|t| t.tag), Some('a'));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn absent_keys_are_rejected() {
        let mut set: BSTSet<u8> = BSTSet::from([1]);
        assert_eq!(
            set.try_add(None),
            Err(SetError::InvalidArgument {
                operation: "add",
            })
        );
        assert_eq!(
            set.try_contains::<u8>(None),
            Err(SetError::InvalidArgument {
                operation: "contains",
            })
        );
        assert_eq!(
            set.try_get::<u8>(None),
            Err(SetError::InvalidArgument {
                operation: "get",
            })
        );
        assert_eq!(set.try_get(Some(&1u8)), Ok(Some(&1)));
        assert_eq!(set.try_contains(Some(&2u8)), Ok(false));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn keys_snapshot_outlives_later_adds() {
        let mut set = BSTSet::from([2, 1]);
        let snapshot: Vec<i32> = set.keys().into_iter().copied().collect();
        set.add(0);
        assert_eq!(snapshot, [1, 2]);
        assert_eq!(set.keys().into_iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn equality_ignores_shape() {
        let chain = BSTSet::from([1, 2, 3]);
        let bushy = BSTSet::from([2, 3, 1]);
        assert_ne!(chain.height(), bushy.height());
        assert_eq!(chain, bushy);
        assert!(BSTSet::from([1, 2]) < BSTSet::from([1, 3]));
    }

    #[test]
    fn clone_keeps_shape() {
        let set = BSTSet::from([10, 5, 1, 20]);
        let copy = set.clone();
        assert_eq!(copy.height(), set.height());
        assert_eq!(copy, set);
    }

    #[test]
    fn formatting() {
        let set = BSTSet::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
        assert_eq!(set.to_string(), "1, 2, 3");
        assert_eq!(format!("{:?}", set.iter()), "Iter([1, 2, 3])");
    }

    #[test]
    fn iter_reports_exact_len() {
        let set = BSTSet::from([4, 2, 6, 1]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.min(), Some(&2));
    }

    #[test]
    fn trait_and_inherent_agree() {
        let mut set: BSTSet<i32> = BSTSet::new();
        assert!(MathSet::is_empty(&set));
        assert!(MathSet::add(&mut set, 3));
        assert!(MathSet::contains(&set, &3));
        assert_eq!(MathSet::size(&set), set.size());
        assert_eq!(MathSet::try_add(&mut set, Some(3)), Ok(false));
        assert_eq!(MathSet::keys(&set).as_slice(), [&3]);
    }
}
