use core::ops::{BitAnd, BitOr, Sub};

use tracing::{debug, instrument};

use super::BSTSet;
use crate::MathSet;

impl<K: Ord + Clone> BSTSet<K> {
    /// Returns a new set holding every key of `self` and of `other`.
    ///
    /// The keys of `self` are added first, in ascending order, then those of `other`; a key in
    /// both is stored once, as the copy taken from `self`. Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// let b = BSTSet::from([2, 3, 4]);
    /// let union = a.union(&b);
    /// assert_eq!(union.keys().into_iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// Every key is re-inserted into a fresh tree. Since the keys arrive sorted that tree is a
    /// chain, so the worst case is O((n + m)²). A chained result is expected here and is not
    /// reported as a degenerating insertion order.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(lhs = self.size(), rhs = other.size()))]
    pub fn union<S>(&self, other: &S) -> BSTSet<K>
    where
        S: MathSet<K> + ?Sized,
    {
        let mut result = BSTSet::new();
        for key in self.keys() {
            result.tree.insert_unreported(key.clone());
        }
        for key in other.keys() {
            result.tree.insert_unreported(key.clone());
        }
        debug!(size = result.size(), "union built");
        result
    }

    /// Returns a new set holding the keys of `self` that `other` also contains.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// let b = BSTSet::from([2, 3, 4]);
    /// let both = a.intersection(&b);
    /// assert_eq!(both.keys().into_iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// One lookup in `other` per key of `self`, plus the insertions into the result. The result is
    /// built from sorted keys, so like [`union`](Self::union) it is a chain.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(lhs = self.size(), rhs = other.size()))]
    pub fn intersection<S>(&self, other: &S) -> BSTSet<K>
    where
        S: MathSet<K> + ?Sized,
    {
        let result = self.filtered(|key| other.contains(key));
        debug!(size = result.size(), "intersection built");
        result
    }

    /// Returns a new set holding the keys of `self` that `other` does not contain.
    ///
    /// Unlike union and intersection this is not symmetric. The result is a chain, as for
    /// [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// let b = BSTSet::from([2, 3, 4]);
    /// assert_eq!(a.difference(&b).keys().into_iter().copied().collect::<Vec<_>>(), [1]);
    /// assert_eq!(b.difference(&a).keys().into_iter().copied().collect::<Vec<_>>(), [4]);
    /// ```
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(lhs = self.size(), rhs = other.size()))]
    pub fn difference<S>(&self, other: &S) -> BSTSet<K>
    where
        S: MathSet<K> + ?Sized,
    {
        let result = self.filtered(|key| !other.contains(key));
        debug!(size = result.size(), "difference built");
        result
    }

    /// Copies the keys of `self` that satisfy `keep` into a new set.
    fn filtered<F>(&self, mut keep: F) -> BSTSet<K>
    where
        F: FnMut(&K) -> bool,
    {
        let mut result = BSTSet::new();
        for key in self.keys() {
            if keep(key) {
                result.tree.insert_unreported(key.clone());
            }
        }
        result
    }

    /// Returns `true` if every key of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let sup = BSTSet::from([1, 2, 3]);
    /// assert!(BSTSet::from([1, 3]).is_subset(&sup));
    /// assert!(!BSTSet::from([1, 4]).is_subset(&sup));
    /// assert!(BSTSet::<i32>::new().is_subset(&sup));
    /// ```
    #[must_use]
    pub fn is_subset<S>(&self, other: &S) -> bool
    where
        S: MathSet<K> + ?Sized,
    {
        self.size() <= other.size() && self.iter().all(|key| other.contains(key))
    }

    /// Returns `true` if every key of `other` is in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let sub = BSTSet::from([1, 2]);
    /// assert!(BSTSet::from([1, 2, 3]).is_superset(&sub));
    /// assert!(!BSTSet::from([2, 3]).is_superset(&sub));
    /// ```
    #[must_use]
    pub fn is_superset<S>(&self, other: &S) -> bool
    where
        S: MathSet<K> + ?Sized,
    {
        other.size() <= self.size() && other.keys().into_iter().all(|key| self.contains(key))
    }

    /// Returns `true` if `self` and `other` share no key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// assert!(a.is_disjoint(&BSTSet::from([4, 5])));
    /// assert!(!a.is_disjoint(&BSTSet::from([3, 4])));
    /// ```
    #[must_use]
    pub fn is_disjoint<S>(&self, other: &S) -> bool
    where
        S: MathSet<K> + ?Sized,
    {
        // Probe the larger side with the smaller one.
        if self.size() <= other.size() {
            self.iter().all(|key| !other.contains(key))
        } else {
            other.keys().into_iter().all(|key| !self.contains(key))
        }
    }
}

impl<K: Ord + Clone> BitOr<&BSTSet<K>> for &BSTSet<K> {
    type Output = BSTSet<K>;

    /// Returns the union of `self` and `rhs` as a new `BSTSet<K>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2]);
    /// let b = BSTSet::from([2, 3]);
    /// assert_eq!(&a | &b, BSTSet::from([1, 2, 3]));
    /// ```
    fn bitor(self, rhs: &BSTSet<K>) -> BSTSet<K> {
        self.union(rhs)
    }
}

impl<K: Ord + Clone> BitAnd<&BSTSet<K>> for &BSTSet<K> {
    type Output = BSTSet<K>;

    /// Returns the intersection of `self` and `rhs` as a new `BSTSet<K>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// let b = BSTSet::from([2, 3, 4]);
    /// assert_eq!(&a & &b, BSTSet::from([2, 3]));
    /// ```
    fn bitand(self, rhs: &BSTSet<K>) -> BSTSet<K> {
        self.intersection(rhs)
    }
}

impl<K: Ord + Clone> Sub<&BSTSet<K>> for &BSTSet<K> {
    type Output = BSTSet<K>;

    /// Returns the difference of `self` and `rhs` as a new `BSTSet<K>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BSTSet;
    ///
    /// let a = BSTSet::from([1, 2, 3]);
    /// let b = BSTSet::from([3, 4, 5]);
    /// assert_eq!(&a - &b, BSTSet::from([1, 2]));
    /// ```
    fn sub(self, rhs: &BSTSet<K>) -> BSTSet<K> {
        self.difference(rhs)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    use super::*;

    fn keys_of(set: &BSTSet<i32>) -> Vec<i32> {
        set.keys().into_iter().copied().collect()
    }

    #[derive(Clone, Debug)]
    struct Keyed(u8, &'static str);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn self_operations() {
        let a = BSTSet::from([4, 2, 6]);
        assert_eq!(keys_of(&a.union(&a)), [2, 4, 6]);
        assert_eq!(keys_of(&a.intersection(&a)), [2, 4, 6]);
        assert!(a.difference(&a).is_empty());
    }

    #[test]
    fn results_are_valid_trees() {
        let a = BSTSet::from([9, 3, 7, 1]);
        let b = BSTSet::from([2, 3, 8, 9]);
        for result in [a.union(&b), a.intersection(&b), a.difference(&b), b.difference(&a)] {
            result.tree.check_invariants();
        }
    }

    #[test]
    fn union_keeps_left_copy_of_shared_keys() {
        let left = BSTSet::from([Keyed(1, "left")]);
        let right = BSTSet::from([Keyed(1, "right"), Keyed(2, "right")]);
        let union = left.union(&right);
        assert_eq!(union.get(&Keyed(1, "")).map(|k| k.1), Some("left"));
        assert_eq!(union.size(), 2);
    }

    #[test]
    fn subset_predicates_on_empty_sets() {
        let empty: BSTSet<i32> = BSTSet::new();
        let a = BSTSet::from([1]);
        assert!(empty.is_subset(&a));
        assert!(a.is_superset(&empty));
        assert!(empty.is_disjoint(&a));
        assert!(a.is_disjoint(&empty));
        assert!(!a.is_subset(&empty));
    }
}
