use log::debug;

use crate::{
    interval::{Interval, IntervalError},
    iter::Iter,
    tree::AvlTree,
};

/// The outcome of [`RangeTree::remove()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStatus {
    /// The interval containing the position was removed.
    Success(Interval),

    /// No stored interval contains the position.
    NotFound,

    /// The position falls outside of the bounds of the tree.
    InvalidPosition,
}

/// A set of non-overlapping [`Interval`] bounded to the admissible range
/// `[begin, end)`.
///
/// ```
/// use disjoint_avl::{Interval, RangeTree, RemoveStatus};
///
/// let mut t = RangeTree::new(0, 1000);
///
/// assert_eq!(t.insert(100, 50), Ok(true));
/// assert_eq!(t.insert(120, 10), Ok(false)); // Overlaps
/// assert_eq!(t.insert(990, 20), Ok(false)); // Out of bounds
///
/// assert_eq!(t.remove(125), RemoveStatus::Success(Interval::new(100, 50)?));
/// assert_eq!(t.remove(125), RemoveStatus::NotFound);
/// assert_eq!(t.remove(1000), RemoveStatus::InvalidPosition);
/// # Ok::<(), disjoint_avl::IntervalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RangeTree {
    begin: i64,
    end: i64,
    tree: AvlTree<Interval>,
}

impl RangeTree {
    /// Construct an empty tree admitting intervals within `[begin, end)`.
    ///
    /// The caller must ensure `begin <= end`.
    pub fn new(begin: i64, end: i64) -> Self {
        debug_assert!(begin <= end, "inverted tree bounds [{begin}, {end})");

        Self {
            begin,
            end,
            tree: AvlTree::new(),
        }
    }

    /// The lower (inclusive) bound of admissible intervals.
    pub fn begin(&self) -> i64 {
        self.begin
    }

    /// The upper (exclusive) bound of admissible intervals.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Insert the interval covering `width` positions from `begin`.
    ///
    /// Returns `Ok(false)`, leaving the tree unchanged, if the interval falls
    /// outside of the tree bounds or overlaps a stored interval.
    ///
    /// # Errors
    ///
    /// Returns an [`IntervalError`] if `begin` and `width` do not describe a
    /// valid [`Interval`].
    pub fn insert(&mut self, begin: i64, width: u64) -> Result<bool, IntervalError> {
        let interval = Interval::new(begin, width)?;

        if !self.admits(&interval) {
            debug!(
                "rejecting {interval} outside of bounds [{}, {})",
                self.begin, self.end
            );
            return Ok(false);
        }

        let inserted = self.tree.insert(interval);
        if !inserted {
            debug!("rejecting {interval} overlapping a stored interval");
        }

        Ok(inserted)
    }

    /// Returns `Ok(true)` if [`RangeTree::insert()`] would succeed for the
    /// same arguments, without modifying the tree.
    ///
    /// # Errors
    ///
    /// Returns an [`IntervalError`] if `begin` and `width` do not describe a
    /// valid [`Interval`].
    pub fn check(&self, begin: i64, width: u64) -> Result<bool, IntervalError> {
        let interval = Interval::new(begin, width)?;
        Ok(self.admits(&interval) && self.tree.check(&interval))
    }

    /// Return the stored interval overlapping the interval covering `width`
    /// positions from `begin`, or [`Interval::invalid()`] if there is none.
    ///
    /// # Errors
    ///
    /// Returns an [`IntervalError`] if `begin` and `width` do not describe a
    /// valid [`Interval`].
    pub fn find(&self, begin: i64, width: u64) -> Result<Interval, IntervalError> {
        Ok(self.tree.find(&Interval::new(begin, width)?))
    }

    /// Return the stored interval containing `position`, if any.
    pub fn at(&self, position: i64) -> Option<&Interval> {
        self.tree.get(&self.point(position)?)
    }

    /// Remove the stored interval containing `position`.
    pub fn remove(&mut self, position: i64) -> RemoveStatus {
        let Some(point) = self.point(position) else {
            debug!(
                "remove position {position} outside of bounds [{}, {})",
                self.begin, self.end
            );
            return RemoveStatus::InvalidPosition;
        };

        match self.tree.take(&point) {
            Some(v) => {
                debug!("removed {v} containing position {position}");
                RemoveStatus::Success(v)
            }
            None => RemoveStatus::NotFound,
        }
    }

    /// The number of intervals stored in this tree.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if this tree contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The interval at the root of the tree, or [`Interval::invalid()`] if
    /// the tree is empty.
    pub fn root(&self) -> Interval {
        self.tree.root()
    }

    /// Iterate over the stored intervals in ascending order.
    pub fn iter(&self) -> Iter<'_, Interval> {
        self.tree.iter()
    }

    fn admits(&self, interval: &Interval) -> bool {
        interval.begin() >= self.begin && interval.end() <= self.end
    }

    /// A single-position interval at `position`, if it lies within the tree
    /// bounds.
    fn point(&self, position: i64) -> Option<Interval> {
        if position < self.begin || position >= self.end {
            return None;
        }

        // Correctness: position < end, so position + 1 cannot overflow.
        Interval::new(position, 1).ok()
    }
}

impl<'a> IntoIterator for &'a RangeTree {
    type Item = &'a Interval;
    type IntoIter = Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
