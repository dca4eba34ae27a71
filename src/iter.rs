use crate::node::Node;

/// An in-order iterator over the values of a tree, yielding them in
/// ascending order.
///
/// Created by [`AvlTree::iter()`] and [`RangeTree::iter()`].
///
/// [`AvlTree::iter()`]: crate::AvlTree::iter
/// [`RangeTree::iter()`]: crate::RangeTree::iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Nodes whose value is yet to be yielded, the next smallest on top.
    ///
    /// Holds at most one left spine per tree level, bounded by the tree
    /// height.
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut this = Self { pending: vec![] };
        this.push_left_spine(root);
        this
    }

    /// Stack `from` and every left descendant of it, leaving the minimum of
    /// the subtree on top.
    fn push_left_spine(&mut self, mut from: Option<&'a Node<T>>) {
        while let Some(n) = from {
            self.pending.push(n);
            from = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.pending.pop()?;

        // Everything in the right subtree of "n" sorts before the remaining
        // stacked ancestors.
        self.push_left_spine(n.right());

        Some(n.value())
    }
}
