use core::cmp::Ordering;

use super::handle::Handle;
use super::size::Size;

/// Which child link a descent follows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side a key belongs on relative to a node, or `None` if it matches the node's key.
    #[inline]
    pub(crate) fn of(ordering: Ordering) -> Option<Self> {
        match ordering {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}

// Binary search tree node. Children are referenced by arena handle; each handle is linked from
// exactly one parent (or the root slot) and is never relinked.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
    // Nodes in the subtree rooted here, including this one.
    count: Size,
}

impl<K> Node<K> {
    /// Creates a childless node.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            count: Size::ONE,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Links `child` into an empty slot.
    pub(crate) fn attach(&mut self, side: Side, child: Handle) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        debug_assert!(slot.is_none(), "`Node::attach()` - {side:?} child is already linked");
        *slot = Some(child);
    }

    #[inline]
    pub(crate) const fn count(&self) -> Size {
        self.count
    }

    /// Recomputes this node's count from the counts of its two subtrees.
    #[inline]
    pub(crate) fn update_count(&mut self, left: usize, right: usize) {
        self.count = Size::of_subtree(left, right);
    }
}
