//! Compact sets of non-negative integers stored as sorted, disjoint, closed
//! intervals.
//!
//! Row and column selections are usually a handful of contiguous runs, so a
//! [`SequenceSet`] keeps one `(min, max)` pair per run and answers rank
//! queries through [`SequenceSet::entries`].

use serde::{Deserialize, Serialize};

/// Sorted list of disjoint closed intervals.
///
/// Invariants:
/// - intervals are sorted ascending by `min`;
/// - no two intervals overlap or touch (`prev.max + 1 < next.min`);
/// - `length` is the number of integers covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSet {
    intervals: Vec<(u32, u32)>,
    length: u64,
}

fn interval_size(min: u32, max: u32) -> u64 {
    u64::from(max - min) + 1
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every integer of `min..=max`. Does nothing when `min > max`.
    ///
    /// Intervals that overlap or touch the new one are coalesced into it,
    /// including an existing interval that strictly contains it.
    pub fn add(&mut self, min: u32, max: u32) {
        if min > max {
            return;
        }

        let mut merged_min = min;
        let mut merged_max = max;
        self.intervals.retain(|&(start, end)| {
            let touches = start <= max.saturating_add(1) && min <= end.saturating_add(1);
            if touches {
                merged_min = merged_min.min(start);
                merged_max = merged_max.max(end);
            }
            !touches
        });

        let at = self
            .intervals
            .partition_point(|&(start, _)| start < merged_min);
        self.intervals.insert(at, (merged_min, merged_max));
        self.recompute_length();
    }

    /// Removes a single value, splitting its interval when needed.
    ///
    /// Returns `false` and leaves the set unchanged if `value` is absent.
    pub fn remove(&mut self, value: u32) -> bool {
        let Some(index) = self.position_of(value) else {
            return false;
        };

        let (start, end) = self.intervals.remove(index);
        let mut at = index;
        if start < value {
            self.intervals.insert(at, (start, value - 1));
            at += 1;
        }
        if value < end {
            self.intervals.insert(at, (value + 1, end));
        }
        self.length -= 1;
        true
    }

    pub fn has(&self, value: u32) -> bool {
        self.position_of(value).is_some()
    }

    /// Number of integers in the set.
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Every integer in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.intervals.iter().flat_map(|&(min, max)| min..=max)
    }

    /// `(rank, value)` pairs: `rank` is the 0-based position of `value` in
    /// ascending order, not the value itself.
    pub fn entries(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.iter().enumerate()
    }

    /// The raw `(min, max)` intervals.
    pub fn consecutives(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.intervals.iter().copied()
    }

    fn position_of(&self, value: u32) -> Option<usize> {
        let index = self.intervals.partition_point(|&(_, end)| end < value);
        match self.intervals.get(index) {
            Some(&(start, _)) if start <= value => Some(index),
            _ => None,
        }
    }

    fn recompute_length(&mut self) {
        self.length = self
            .intervals
            .iter()
            .map(|&(min, max)| interval_size(min, max))
            .sum();
    }
}

impl FromIterator<(u32, u32)> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut set = SequenceSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<(u32, u32)> for SequenceSet {
    fn extend<I: IntoIterator<Item = (u32, u32)>>(&mut self, iter: I) {
        for (min, max) in iter {
            self.add(min, max);
        }
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = u32;
    type IntoIter = Box<dyn Iterator<Item = u32> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
