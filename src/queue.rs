//! An append-only FIFO used to hand out traversal results.

use alloc::vec::{self, Vec};
use core::fmt;
use core::slice;

/// An ordered, append-only sequence.
///
/// Items come back out in the order they were enqueued, and the queue can be walked any number
/// of times. [`BSTSet::keys`](crate::BSTSet::keys) fills one with an in-order traversal so the
/// result is a finished snapshot rather than a cursor into the tree.
///
/// # Examples
///
/// ```
/// use bstset::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["first", "second"]);
/// // Walking the queue does not consume it.
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Queue {
            items: Vec::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the item at the front of the queue.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the number of items in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been enqueued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates front to back without consuming the queue.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The queued items, front first.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<Queue<T>> for Vec<T> {
    fn from(queue: Queue<T>) -> Self {
        queue.items
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_queue() {
        let queue: Queue<u8> = Queue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(format!("{queue:?}"), "[]");
    }

    #[test]
    fn walks_are_repeatable() {
        let queue: Queue<u8> = [3, 1, 2].into_iter().collect();
        let first: Vec<_> = queue.iter().collect();
        let second: Vec<_> = (&queue).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(Vec::from(queue), [3, 1, 2]);
    }

    proptest! {
        #[test]
        fn preserves_enqueue_order(items in prop::collection::vec(any::<i16>(), 0..128)) {
            let mut queue = Queue::with_capacity(items.len());
            for &item in &items {
                queue.enqueue(item);
            }

            prop_assert_eq!(queue.len(), items.len());
            prop_assert_eq!(queue.peek(), items.first());
            prop_assert_eq!(queue.as_slice(), items.as_slice());
            prop_assert_eq!(queue.into_iter().collect::<Vec<_>>(), items);
        }
    }
}
