use crate::Queue;
use crate::error::{Result, SetError};

/// The algebra of a finite mathematical set over ordered keys.
///
/// Code that only needs membership, cardinality and the three set operations can program against
/// this trait instead of a concrete container. The operations never modify either operand; each
/// returns a fresh set.
///
/// # Examples
///
/// ```
/// use bstset::{BSTSet, MathSet};
///
/// fn shared<S: MathSet<u32>>(a: &S, b: &S) -> usize {
///     a.intersection(b).size()
/// }
///
/// let a = BSTSet::from([1, 2, 3]);
/// let b = BSTSet::from([2, 3, 4]);
/// assert_eq!(shared(&a, &b), 2);
/// ```
pub trait MathSet<K> {
    /// Adds `key`, returning `true` if it was not already present.
    fn add(&mut self, key: K) -> bool;

    /// Returns `true` if a key equal to `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Number of keys in the set.
    fn size(&self) -> usize;

    /// Returns `true` if the set holds no keys.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Keys present in `self`, `other`, or both.
    #[must_use]
    fn union<S>(&self, other: &S) -> Self
    where
        Self: Sized,
        S: MathSet<K> + ?Sized;

    /// Keys present in both `self` and `other`.
    #[must_use]
    fn intersection<S>(&self, other: &S) -> Self
    where
        Self: Sized,
        S: MathSet<K> + ?Sized;

    /// Keys present in `self` but not in `other`.
    #[must_use]
    fn difference<S>(&self, other: &S) -> Self
    where
        Self: Sized,
        S: MathSet<K> + ?Sized;

    /// Every key in ascending order, collected up front.
    fn keys(&self) -> Queue<&K>;

    /// [`add`](MathSet::add) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `key` is `None`.
    fn try_add(&mut self, key: Option<K>) -> Result<bool> {
        let key = key.ok_or(SetError::InvalidArgument {
            operation: "add",
        })?;
        Ok(self.add(key))
    }

    /// [`contains`](MathSet::contains) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `key` is `None`.
    fn try_contains(&self, key: Option<&K>) -> Result<bool> {
        let key = key.ok_or(SetError::InvalidArgument {
            operation: "contains",
        })?;
        Ok(self.contains(key))
    }
}
