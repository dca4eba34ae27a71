use std::cmp::Ordering;

/// The ordering contract for values stored in an [`AvlTree`].
///
/// A [`Disjoint`] type is ordered by a three-way comparison in which
/// [`Ordering::Equal`] does NOT mean "the same value" - it means the two
/// values *conflict* and cannot both be stored in the same tree. For the
/// [`Interval`] implementation, two intervals compare equal when they
/// overlap.
///
/// This is deliberately not expressed through [`Ord`] / [`PartialEq`]: a
/// structural equality substituted for the overlap comparison would silently
/// allow overlapping values to be inserted, and lookups would only match
/// exact copies of a stored value.
///
/// Implementations must ensure that for any two valid values exactly one of
/// `Less`, `Equal` or `Greater` holds, and that the comparison is
/// antisymmetric (`a < b` iff `b > a`).
///
/// [`AvlTree`]: crate::AvlTree
/// [`Interval`]: crate::Interval
pub trait Disjoint: Sized {
    /// Compare `self` against `other`, returning [`Ordering::Equal`] if the
    /// two values conflict.
    fn overlap_cmp(&self, other: &Self) -> Ordering;

    /// Returns true if `self` and `other` are exactly the same value (as
    /// opposed to merely conflicting).
    fn same_as(&self, other: &Self) -> bool;

    /// A sentinel value outside of the domain of valid entries.
    ///
    /// The sentinel never compares [`Ordering::Equal`] to a valid value, and
    /// is returned by the sentinel-returning lookups (such as
    /// [`AvlTree::find()`]) when no stored value matches.
    ///
    /// [`AvlTree::find()`]: crate::AvlTree::find
    fn invalid() -> Self;

    /// Returns false if `self` is the [`Disjoint::invalid()`] sentinel.
    fn is_valid(&self) -> bool {
        !self.same_as(&Self::invalid())
    }

    /// Returns true if `self` and `other` conflict.
    fn overlaps(&self, other: &Self) -> bool {
        self.overlap_cmp(other) == Ordering::Equal
    }
}
