use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::iter::FusedIterator;

use smallvec::SmallVec;
use tracing::{trace, warn};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Insertion path length past which the tree is reported as degenerate.
pub(crate) const DEGENERATE_HEIGHT: usize = 1024;

/// Type alias for a stack of handles from the root downwards.
type Path = SmallVec<[Handle; 32]>;

/// The unbalanced binary search tree backing `BSTSet`.
#[derive(Clone)]
pub(crate) struct RawBST<K> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K> RawBST<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of keys in the tree, read from the root's count.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Number of nodes under `link`, zero for an empty link.
    #[inline]
    fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.node(handle).count().to_usize())
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(handle);
            stack.extend([node.left(), node.right()].into_iter().flatten().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Descends from the root towards `key`, returning the node holding an equal key.
    fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            match Side::of(key.cmp(node.key().borrow())) {
                Some(side) => current = node.child(side),
                None => return Some(handle),
            }
        }
        None
    }

    /// Returns the stored key equal to `key`, if any.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.node(handle).key())
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts `key` unless an equal key is already stored.
    ///
    /// Returns `false` and leaves the tree untouched on a duplicate; the stored key wins. The first
    /// insertion to land at depth `DEGENERATE_HEIGHT + 1` is reported at WARN level.
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let Some(depth) = self.place(key) else {
            return false;
        };
        if depth == DEGENERATE_HEIGHT + 1 {
            warn!(depth, size = self.len(), threshold = DEGENERATE_HEIGHT, "insertion order is degenerating the tree");
        }
        true
    }

    /// Inserts `key` like [`insert`](Self::insert) but never reports depth.
    ///
    /// For trees the crate builds from sorted input itself, where a chain is the expected shape.
    pub(crate) fn insert_unreported(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        self.place(key).is_some()
    }

    /// Links `key` into the tree and returns the depth it landed at, or `None` on a duplicate.
    fn place(&mut self, key: K) -> Option<usize>
    where
        K: Ord,
    {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(key)));
            trace!(size = 1, "inserted root");
            return Some(1);
        };

        // Walk down to the empty slot, remembering every ancestor.
        let mut path: Path = SmallVec::new();
        let mut current = root;
        let side = loop {
            path.push(current);
            let node = self.node(current);
            let Some(side) = Side::of(key.cmp(node.key())) else {
                trace!(depth = path.len(), "duplicate key discarded");
                return None;
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let leaf = self.nodes.alloc(Node::new(key));
        self.nodes.get_mut(current).attach(side, leaf);

        // Recompute counts bottom-up along the insertion path.
        for &handle in path.iter().rev() {
            let node = self.node(handle);
            let (left, right) = (self.size_of(node.left()), self.size_of(node.right()));
            self.nodes.get_mut(handle).update_count(left, right);
        }

        // Nothing is ever freed, so every allocated node is reachable.
        debug_assert_eq!(self.nodes.len(), self.len(), "`RawBST::place()` - count drifted from node total");

        let depth = path.len() + 1;
        trace!(depth, size = self.len(), "inserted key");
        Some(depth)
    }

    /// Returns the smallest key.
    pub(crate) fn first(&self) -> Option<&K> {
        self.extreme(Side::Left)
    }

    /// Returns the largest key.
    pub(crate) fn last(&self) -> Option<&K> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Option<&K> {
        let mut current = self.root?;
        while let Some(child) = self.node(current).child(side) {
            current = child;
        }
        Some(self.node(current).key())
    }

    /// Gets the key with `rank` smaller keys beneath it.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&K> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;
        loop {
            let node = self.node(current);
            let left = self.size_of(node.left());
            match remaining.cmp(&left) {
                Less => current = node.left()?,
                Equal => return Some(node.key()),
                Greater => {
                    remaining -= left + 1;
                    current = node.right()?;
                }
            }
        }
    }

    /// Counts the keys smaller than `key`, provided `key` is present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            match key.cmp(node.key().borrow()) {
                Less => current = node.left(),
                Equal => return Some(rank + self.size_of(node.left())),
                Greater => {
                    rank += self.size_of(node.left()) + 1;
                    current = node.right();
                }
            }
        }
        None
    }

    /// Returns an in-order iterator over the keys.
    pub(crate) fn in_order(&self) -> InOrder<'_, K> {
        InOrder {
            tree: self,
            stack: SmallVec::new(),
            pending: self.root,
            remaining: self.len(),
        }
    }

    /// Verifies the ordering and count invariants of every node, panicking on a violation.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self)
    where
        K: Ord + core::fmt::Debug,
    {
        let mut visited = 0;
        let mut stack: alloc::vec::Vec<(Handle, Option<&K>, Option<&K>)> = alloc::vec::Vec::new();
        if let Some(root) = self.root {
            stack.push((root, None, None));
        }

        while let Some((handle, low, high)) = stack.pop() {
            visited += 1;
            let node = self.node(handle);
            let key = node.key();
            if let Some(low) = low {
                assert!(low < key, "{key:?} sits in the right subtree of {low:?}");
            }
            if let Some(high) = high {
                assert!(key < high, "{key:?} sits in the left subtree of {high:?}");
            }
            assert_eq!(
                node.count().to_usize(),
                self.size_of(node.left()) + self.size_of(node.right()) + 1,
                "count of {key:?} disagrees with its children"
            );

            if let Some(left) = node.left() {
                stack.push((left, low, Some(key)));
            }
            if let Some(right) = node.right() {
                stack.push((right, Some(key), high));
            }
        }

        assert_eq!(visited, self.len(), "root count disagrees with reachable nodes");
        assert_eq!(visited, self.nodes.len(), "arena holds unreachable nodes");
    }
}

/// In-order walk driven by an explicit stack, so a degenerate chain cannot exhaust the call stack.
pub(crate) struct InOrder<'a, K> {
    tree: &'a RawBST<K>,
    stack: SmallVec<[Handle; 32]>,
    // Subtree whose leftmost spine has not been pushed yet.
    pending: Option<Handle>,
    remaining: usize,
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some(handle) = self.pending {
            self.stack.push(handle);
            self.pending = self.tree.node(handle).left();
        }

        let handle = self.stack.pop()?;
        let node = self.tree.node(handle);
        self.pending = node.right();
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        InOrder {
            tree: self.tree,
            stack: self.stack.clone(),
            pending: self.pending,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawBST<i32> {
        let mut tree = RawBST::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: RawBST<i32> = RawBST::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.in_order().next(), None);
        tree.check_invariants();
    }

    #[test]
    fn shape_follows_insertion_order() {
        // 5 at the root, 3 and 8 beneath it, 1 beneath 3.
        let tree = tree_of(&[5, 3, 8, 3, 1]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.height(), 3);

        let root = tree.node(tree.root.unwrap());
        assert_eq!(*root.key(), 5);
        assert_eq!(root.count().to_usize(), 4);
        let left = tree.node(root.left().unwrap());
        assert_eq!((*left.key(), left.count().to_usize()), (3, 2));
        let right = tree.node(root.right().unwrap());
        assert_eq!((*right.key(), right.count().to_usize()), (8, 1));
        tree.check_invariants();
    }

    #[test]
    fn ascending_insertion_builds_a_chain() {
        let keys: Vec<i32> = (0..100).collect();
        let tree = tree_of(&keys);
        assert_eq!(tree.height(), 100);
        assert_eq!(tree.len(), 100);
        tree.check_invariants();
    }

    #[test]
    fn deep_chain_traverses_without_recursion() {
        let mut tree = RawBST::new();
        for key in (0..(DEGENERATE_HEIGHT as i32 * 4)).rev() {
            tree.insert(key);
        }
        assert_eq!(tree.height(), DEGENERATE_HEIGHT * 4);
        assert!(tree.in_order().copied().eq(0..(DEGENERATE_HEIGHT as i32 * 4)));
        assert_eq!(tree.first(), Some(&0));
        assert_eq!(tree.last(), Some(&(DEGENERATE_HEIGHT as i32 * 4 - 1)));
    }

    #[test]
    fn unreported_insert_matches_insert() {
        let mut reported = RawBST::new();
        let mut unreported = RawBST::new();
        for key in [4, 2, 6, 2, 1, 6, 9] {
            assert_eq!(reported.insert(key), unreported.insert_unreported(key));
        }
        assert!(reported.in_order().eq(unreported.in_order()));
        assert_eq!(reported.height(), unreported.height());
        unreported.check_invariants();
    }

    #[test]
    fn rank_descent() {
        let tree = tree_of(&[50, 20, 80, 10, 30, 70, 90]);
        assert_eq!(tree.get_by_rank(0), Some(&10));
        assert_eq!(tree.get_by_rank(3), Some(&50));
        assert_eq!(tree.get_by_rank(6), Some(&90));
        assert_eq!(tree.get_by_rank(7), None);
        assert_eq!(tree.rank_of(&70), Some(4));
        assert_eq!(tree.rank_of(&75), None);
    }

    proptest! {
        #[test]
        fn invariants_hold_after_every_insert(keys in prop::collection::vec(-500i32..500, 0..400)) {
            let mut tree = RawBST::new();
            let mut model = alloc::collections::BTreeSet::new();
            for key in keys {
                prop_assert_eq!(tree.insert(key), model.insert(key));
                tree.check_invariants();
            }

            prop_assert_eq!(tree.len(), model.len());
            prop_assert!(tree.in_order().eq(model.iter()));
            prop_assert_eq!(tree.in_order().len(), model.len());
            for (rank, key) in model.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(key));
                prop_assert_eq!(tree.rank_of(key), Some(rank));
            }
        }
    }
}
