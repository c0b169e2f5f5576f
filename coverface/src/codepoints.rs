// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sets of Unicode codepoints.

use alloc::collections::btree_set::{self, BTreeSet};
use core::fmt;
use core::ops::RangeInclusive;

/// The largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// An ordered set of codepoints.
///
/// Set operations never modify their operands; they return a new set. This
/// keeps the coverage of a [`FontRecord`](crate::FontRecord) intact while
/// derived views are computed from it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CodepointSet {
    inner: BTreeSet<u32>,
}

impl CodepointSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of codepoints in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no codepoints.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set contains `codepoint`.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.inner.contains(&codepoint)
    }

    /// Adds a codepoint, returning `true` if it was not present.
    pub fn insert(&mut self, codepoint: u32) -> bool {
        self.inner.insert(codepoint)
    }

    /// Adds every codepoint in `range`.
    pub fn insert_range(&mut self, range: RangeInclusive<u32>) {
        self.inner.extend(range);
    }

    /// Adds every codepoint of `other` to this set.
    pub fn extend_from(&mut self, other: &Self) {
        self.inner.extend(other.inner.iter().copied());
    }

    /// Returns the codepoints in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, u32> {
        self.inner.iter()
    }

    /// Returns the codepoints of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.inner.difference(&other.inner).copied().collect()
    }

    /// Returns the codepoints present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.inner.intersection(&other.inner).copied().collect()
    }

    /// Returns the codepoints present in either set.
    pub fn union(&self, other: &Self) -> Self {
        self.inner.union(&other.inner).copied().collect()
    }

    /// Returns `true` if every codepoint of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns the maximal runs of consecutive codepoints, in ascending order.
    ///
    /// ```
    /// use coverface::CodepointSet;
    ///
    /// let set: CodepointSet = [0x41, 0x42, 0x43, 0x45].into_iter().collect();
    /// let runs: Vec<_> = set.runs().collect();
    /// assert_eq!(runs, [0x41..=0x43, 0x45..=0x45]);
    /// ```
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            iter: self.inner.iter(),
            pending: None,
        }
    }

    /// Returns the maximal runs of codepoints in `0..=MAX_CODEPOINT` that are
    /// not in this set.
    pub fn complement_runs(&self) -> alloc::vec::Vec<RangeInclusive<u32>> {
        let mut gaps = alloc::vec::Vec::new();
        let mut next = 0_u32;
        for run in self.runs() {
            if *run.start() > next {
                gaps.push(next..=run.start() - 1);
            }
            next = run.end().saturating_add(1);
        }
        if next <= MAX_CODEPOINT {
            gaps.push(next..=MAX_CODEPOINT);
        }
        gaps
    }
}

impl FromIterator<u32> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for CodepointSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CodepointSet {
    type Item = &'a u32;
    type IntoIter = btree_set::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Debug for CodepointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.runs().map(|run| {
                if run.start() == run.end() {
                    alloc::format!("U+{:X}", run.start())
                } else {
                    alloc::format!("U+{:X}-{:X}", run.start(), run.end())
                }
            }))
            .finish()
    }
}

/// Iterator over the maximal runs of a [`CodepointSet`].
///
/// Returned by [`CodepointSet::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    iter: btree_set::Iter<'a, u32>,
    pending: Option<RangeInclusive<u32>>,
}

impl Iterator for Runs<'_> {
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        for &cp in self.iter.by_ref() {
            match self.pending.take() {
                Some(run) if run.end().checked_add(1) == Some(cp) => {
                    self.pending = Some(*run.start()..=cp);
                }
                Some(run) => {
                    self.pending = Some(cp..=cp);
                    return Some(run);
                }
                None => self.pending = Some(cp..=cp),
            }
        }
        self.pending.take()
    }
}
