//! Arbitrary-width course bit vectors.
//!
//! Every taken-set, closure, and combo in the engine is a [`CourseSet`]:
//! one bit per course ordinal, sized to the catalog. Equality and hashing
//! are bitwise, so sets can be used directly as search-state keys.

use std::fmt;

use fixedbitset::FixedBitSet;

/// A set of course ordinals backed by a fixed-width bit vector.
///
/// All sets produced by one [`CourseIndex`](crate::index::CourseIndex)
/// share the same width (the catalog size).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CourseSet {
    bits: FixedBitSet,
}

impl CourseSet {
    /// Creates an empty set able to hold ordinals `0..width`.
    pub fn empty(width: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(width),
        }
    }

    /// Creates a set containing every ordinal in `0..width`.
    pub fn full(width: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(width);
        bits.insert_range(..);
        Self { bits }
    }

    /// Creates a set from an iterator of ordinals. Out-of-range ordinals are ignored.
    pub fn from_ordinals(width: usize, ordinals: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::empty(width);
        for ordinal in ordinals {
            set.insert(ordinal);
        }
        set
    }

    /// Number of ordinals this set can hold.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Inserts an ordinal. Returns `false` if it is out of range.
    #[inline]
    pub fn insert(&mut self, ordinal: usize) -> bool {
        if ordinal >= self.bits.len() {
            return false;
        }
        self.bits.insert(ordinal);
        true
    }

    /// Whether the ordinal is a member.
    #[inline]
    pub fn contains(&self, ordinal: usize) -> bool {
        self.bits.contains(ordinal)
    }

    /// Number of members.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Whether no ordinal is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Whether every ordinal in `0..width` is set.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count() == self.width()
    }

    /// Whether every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &CourseSet) -> bool {
        self.bits.is_subset(&other.bits)
    }

    /// Whether `self` and `other` share no member.
    #[inline]
    pub fn is_disjoint(&self, other: &CourseSet) -> bool {
        self.bits.is_disjoint(&other.bits)
    }

    /// Adds every member of `other` to `self`.
    #[inline]
    pub fn union_with(&mut self, other: &CourseSet) {
        self.bits.union_with(&other.bits);
    }

    /// Returns `self ∪ other`.
    pub fn union(&self, other: &CourseSet) -> CourseSet {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// Returns `self \ other`.
    pub fn difference(&self, other: &CourseSet) -> CourseSet {
        let mut out = self.clone();
        out.bits.difference_with(&other.bits);
        out
    }

    /// Iterates members in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}

impl fmt::Debug for CourseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
