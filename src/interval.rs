use std::{cmp::Ordering, fmt::Display};

use crate::disjoint::Disjoint;

/// An error constructing an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// The interval has a size of 0.
    Empty {
        /// The lower bound of the rejected interval.
        begin: i64,
    },

    /// The exclusive upper bound of the interval does not fit in an [`i64`].
    Overflow {
        /// The lower bound of the rejected interval.
        begin: i64,
        /// The size of the rejected interval.
        size: u64,
    },
}

impl Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { begin } => {
                write!(f, "invalid interval at {begin}: size must be at least 1")
            }
            Self::Overflow { begin, size } => {
                write!(f, "invalid interval at {begin}: size {size} overflows")
            }
        }
    }
}

impl std::error::Error for IntervalError {}

/// A non-empty, half-open interval `[begin, begin + size)`.
///
/// Two [`Interval`] values are [`PartialEq`] only when they are identical.
/// Under the [`Disjoint`] contract used by the trees, an [`Interval`] compares
/// [`Ordering::Equal`] to any interval it overlaps:
///
/// ```text
///
///     a:  [====)
///     b:        [====)            a < b
///     c:     [====)               a == c, b == c (overlap)
///
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    begin: i64,
    size: u64,
}

impl Interval {
    /// Construct an interval covering `size` positions starting at `begin`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Empty`] if `size` is 0, and
    /// [`IntervalError::Overflow`] if `begin + size` exceeds [`i64::MAX`].
    pub fn new(begin: i64, size: u64) -> Result<Self, IntervalError> {
        if size == 0 {
            return Err(IntervalError::Empty { begin });
        }

        if begin.checked_add_unsigned(size).is_none() {
            return Err(IntervalError::Overflow { begin, size });
        }

        Ok(Self { begin, size })
    }

    /// The first position covered by this interval.
    pub fn begin(&self) -> i64 {
        self.begin
    }

    /// The number of positions covered by this interval.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The exclusive upper bound of this interval.
    pub fn end(&self) -> i64 {
        // Correctness: construction ensures begin + size fits in an i64, and
        // the sentinel has a size of 0.
        self.begin.wrapping_add_unsigned(self.size)
    }

    /// The last position covered by this interval.
    pub fn last(&self) -> i64 {
        self.end() - 1
    }

    /// Returns true if `position` falls within this interval.
    pub fn contains(&self, position: i64) -> bool {
        self.begin <= position && position < self.end()
    }
}

impl Disjoint for Interval {
    fn overlap_cmp(&self, other: &Self) -> Ordering {
        // The empty sentinel must still conflict with itself.
        if self == other {
            return Ordering::Equal;
        }

        if self.end() <= other.begin {
            Ordering::Less
        } else if self.begin >= other.end() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn same_as(&self, other: &Self) -> bool {
        self == other
    }

    /// An empty interval positioned at [`i64::MAX`].
    ///
    /// No valid interval can end beyond [`i64::MAX`], so the sentinel always
    /// orders after (and never overlaps) a valid interval.
    fn invalid() -> Self {
        Self {
            begin: i64::MAX,
            size: 0,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end())
    }
}
