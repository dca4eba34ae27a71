use crate::{
    disjoint::Disjoint,
    iter::Iter,
    node::{remove, Node},
};

/// A height-balanced (AVL) binary search tree of mutually non-conflicting
/// values.
///
/// Values are ordered by [`Disjoint::overlap_cmp()`]; a value that compares
/// equal to (conflicts with) any stored value is rejected on insert. Lookups
/// and removals accept any query value and act on the stored value it
/// conflicts with, if any.
///
/// All operations complete in `O(log n)` time.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values stored in this tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if this tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The height of the tree: 0 when empty, 1 for a single value.
    pub fn height(&self) -> usize {
        self.root.as_ref().map(|v| v.height() as usize).unwrap_or_default()
    }

    /// Iterate over the stored values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    #[cfg(test)]
    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> AvlTree<T>
where
    T: Disjoint,
{
    /// Insert `value` into the tree, returning true if it was added.
    ///
    /// Returns false, leaving the tree unchanged, if `value` conflicts with a
    /// stored value or is the [`Disjoint::invalid()`] sentinel.
    pub fn insert(&mut self, value: T) -> bool {
        if !value.is_valid() {
            return false;
        }

        let inserted = match self.root {
            Some(ref mut v) => v.insert(value).is_inserted(),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.size += 1;
        }

        inserted
    }

    /// Returns true if `value` could be inserted (it conflicts with no stored
    /// value), without modifying the tree.
    pub fn check(&self, value: &T) -> bool {
        value.is_valid() && self.get(value).is_none()
    }

    /// Return a reference to the stored value conflicting with `query`, if
    /// any.
    pub fn get(&self, query: &T) -> Option<&T> {
        self.root.as_ref().and_then(|v| v.get(query))
    }

    /// Return a copy of the stored value conflicting with `query`, or
    /// [`Disjoint::invalid()`] if there is none.
    pub fn find(&self, query: &T) -> T
    where
        T: Clone,
    {
        self.get(query).cloned().unwrap_or_else(T::invalid)
    }

    /// Remove and return the stored value conflicting with `query`, if any.
    pub fn take(&mut self, query: &T) -> Option<T> {
        let v = remove(&mut self.root, query)?;
        self.size -= 1;
        Some(v)
    }

    /// Remove and return the stored value conflicting with `query`, or
    /// [`Disjoint::invalid()`] if there is none.
    pub fn remove(&mut self, query: &T) -> T {
        self.take(query).unwrap_or_else(T::invalid)
    }

    /// A copy of the value at the root of the tree, or
    /// [`Disjoint::invalid()`] if the tree is empty.
    pub fn root(&self) -> T
    where
        T: Clone,
    {
        self.root
            .as_ref()
            .map(|v| v.value().clone())
            .unwrap_or_else(T::invalid)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
