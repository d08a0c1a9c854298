//! An ordered set on a plain binary search tree, with set algebra and subtree counts.
//!
//! This crate provides [`BSTSet`], an unbalanced binary search tree that stores each distinct key
//! once and keeps, at every node, the number of nodes in its subtree. On top of it sits the
//! algebra of a finite mathematical set, described by the [`MathSet`] trait:
//!
//! - [`add`](BSTSet::add), [`contains`](BSTSet::contains) and [`get`](BSTSet::get) - a single
//!   root-to-leaf descent
//! - [`size`](BSTSet::size) - O(1), read from the root's subtree count
//! - [`union`](BSTSet::union), [`intersection`](BSTSet::intersection) and
//!   [`difference`](BSTSet::difference) - each builds a fresh set and leaves both operands alone
//! - [`keys`](BSTSet::keys) - every key in ascending order, collected into a [`Queue`]
//!
//! # Example
//!
//! ```
//! use bstset::{BSTSet, Rank};
//!
//! let mut s = BSTSet::new();
//! for key in [5, 3, 8, 3, 1] {
//!     s.add(key);
//! }
//!
//! assert_eq!(s.size(), 4);
//! assert_eq!(s.keys().into_iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//!
//! let a = BSTSet::from([1, 2, 3]);
//! let b = BSTSet::from([2, 3, 4]);
//! assert_eq!(a.union(&b), BSTSet::from([1, 2, 3, 4]));
//! assert_eq!(a.intersection(&b), BSTSet::from([2, 3]));
//! assert_eq!(a.difference(&b), BSTSet::from([1]));
//!
//! // Subtree counts also answer rank queries.
//! assert_eq!(s[Rank(1)], 3);
//! assert_eq!(s.rank_of(&8), Some(3));
//! ```
//!
//! # Implementation
//!
//! Nodes live in a flat arena and link to their children by handle. The tree is never
//! rebalanced, so its height depends on insertion order: ascending or descending input builds a
//! chain and every operation degrades to O(n). Traversals use an explicit stack, so such a chain
//! costs time but never call-stack depth.
//!
//! The crate logs through [`tracing`]: insertions at `TRACE`, set operations at `DEBUG`, and a
//! `WARN` the first time [`BSTSet::add`] lands a key deeper than 1024 levels. Results of set
//! operations are built from sorted keys and are always chains; they are not reported.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod math_set;
mod order_statistic;
mod raw;

pub mod bst_set;
pub mod queue;

pub use bst_set::BSTSet;
pub use error::{Result, SetError};
pub use math_set::MathSet;
pub use order_statistic::Rank;
pub use queue::Queue;
