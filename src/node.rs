use std::cmp::Ordering;

use log::trace;

use crate::disjoint::Disjoint;

/// The outcome of [`Node::insert()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// The value conflicts with a value in the subtree, which is left
    /// unmodified.
    Rejected,

    /// The value was inserted and the subtree root is unchanged.
    Inserted,

    /// The value was inserted and the subtree was rotated; the caller's child
    /// pointer now refers to the new subtree root.
    Rotated,
}

impl InsertResult {
    pub(crate) fn is_inserted(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child is treated as height 0.
    ///
    /// A u8 holds a maximum value of 255, far beyond the height of any
    /// balanced tree that fits in memory.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing on the
    /// way back up.
    ///
    /// If a rotation is needed, `self` is replaced with the new subtree root.
    pub(crate) fn insert(self: &mut Box<Self>, value: T) -> InsertResult
    where
        T: Disjoint,
    {
        let child = match value.overlap_cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return InsertResult::Rejected,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => {
                if v.insert(value) == InsertResult::Rejected {
                    // The tree structure has not been modified, so it does not
                    // require rebalancing.
                    return InsertResult::Rejected;
                }
            }
            None => {
                // A new leaf can skew this node by at most 1, so this node
                // cannot need a rotation.
                *child = Some(Box::new(Self::new(value)));
                update_height(self);
                return InsertResult::Inserted;
            }
        };

        if rebalance(self) {
            InsertResult::Rotated
        } else {
            InsertResult::Inserted
        }
    }

    pub(crate) fn get(&self, query: &T) -> Option<&T>
    where
        T: Disjoint,
    {
        let node = match query.overlap_cmp(&self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Greater => self.right(),
        }?;

        node.get(query)
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Remove the value conflicting with `query` from the subtree in `slot`,
/// returning it.
///
/// If the matched node has a right subtree, the in-order successor's value is
/// moved into the matched node and the successor's node is released instead.
/// Either way the returned value is the one that matched `query`.
pub(crate) fn remove<T>(slot: &mut Option<Box<Node<T>>>, query: &T) -> Option<T>
where
    T: Disjoint,
{
    let node = slot.as_mut()?;
    let removed = match query.overlap_cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, query)?,
        Ordering::Greater => remove(&mut node.right, query)?,
        Ordering::Equal => match remove_min(&mut node.right) {
            Some(successor) => {
                trace!("replacing matched node with in-order successor");
                std::mem::replace(&mut node.value, successor)
            }
            None => {
                // No right subtree: the (already balanced) left subtree, if
                // any, replaces the matched node.
                let node = slot.take()?;
                let Node { left, value, .. } = *node;
                *slot = left;
                return Some(value);
            }
        },
    };

    rebalance(node);
    Some(removed)
}

/// Unlink the left-most node of the subtree in `slot`, splicing its right
/// child (if any) into its place, and return its value.
fn remove_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        let v = remove_min(&mut node.left);
        rebalance(node);
        return v;
    }

    // This is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    let node = slot.take()?;
    let Node { right, value, .. } = *node;
    *slot = right;
    Some(value)
}

fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Recompute the height of `v` and rotate the subtree if it is unbalanced,
/// returning true if a rotation was performed.
///
/// The children of `v` must be balanced.
fn rebalance<T>(v: &mut Box<Node<T>>) -> bool {
    update_height(v);

    let rotated = match balance(v) {
        // Left-heavy
        2.. if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
            true
        }
        2.. => {
            if let Some(l) = v.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(v);
            true
        }
        // Right-heavy
        ..=-2 if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
            true
        }
        ..=-2 => {
            if let Some(r) = v.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(v);
            true
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => false,
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(v).abs() <= 1);

    rotated
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    trace!("rotate left at height {}", x.height);

    let mut p = x.right.take().expect("rotate left without right child");
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    trace!("rotate right at height {}", y.height);

    let mut p = y.left.take().expect("rotate right without left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}
