//! A self-balancing (AVL) binary search tree of non-overlapping values.
//!
//! [`AvlTree`] stores values ordered by the [`Disjoint`] contract, in which
//! two values comparing equal *conflict* (for [`Interval`], they overlap). An
//! insert conflicting with any stored value is rejected, and lookups or
//! removals act on whichever stored value a query conflicts with.
//!
//! [`RangeTree`] specialises the tree to [`Interval`] values bounded to an
//! admissible range, with removal by position.
//!
//! ```
//! use disjoint_avl::{AvlTree, Disjoint, Interval};
//!
//! let mut t = AvlTree::new();
//!
//! assert!(t.insert(Interval::new(100, 300)?));
//! assert!(!t.insert(Interval::new(80, 30)?)); // Overlaps [100, 400)
//!
//! // Any overlapping query finds the stored interval.
//! let got = t.find(&Interval::new(50, 100)?);
//! assert!(got.same_as(&Interval::new(100, 300)?));
//!
//! // And a query overlapping nothing returns the sentinel.
//! assert!(!t.find(&Interval::new(0, 10)?).is_valid());
//! # Ok::<(), disjoint_avl::IntervalError>(())
//! ```
//!
//! All operations complete in `O(log n)` time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod disjoint;
mod interval;
mod iter;
mod node;
mod range_tree;
mod tree;

pub use disjoint::Disjoint;
pub use interval::{Interval, IntervalError};
pub use iter::Iter;
pub use range_tree::{RangeTree, RemoveStatus};
pub use tree::AvlTree;
