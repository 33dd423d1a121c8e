//! Label values, ignore sets and first-frame label enumeration

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Value stored in a segmentation label grid
///
/// Implemented for every totally ordered `Copy` type, which covers all the
/// integer widths label maps are usually stored in (`u16`, `i32`, `i64`, ...).
pub trait Label: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> Label for T {}

/// Set of labels excluded from matching on both sides (typically background)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Ord + Deserialize<'de>"))]
pub struct IgnoreSet<L> {
    labels: BTreeSet<L>,
}

impl<L: Label> IgnoreSet<L> {
    /// Build an ignore set; order and duplicates of `labels` are irrelevant
    pub fn new(labels: impl IntoIterator<Item = L>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            labels: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, label: &L) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Ignored labels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.labels.iter()
    }
}

impl<L: Label> Default for IgnoreSet<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L: Label> FromIterator<L> for IgnoreSet<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Distinct labels present in `frame`, minus the ignored ones, ascending
///
/// The ascending order is what downstream tie-breaking relies on.
pub fn enumerate_labels<L: Label>(frame: ArrayView2<L>, ignore: &IgnoreSet<L>) -> Vec<L> {
    frame
        .iter()
        .filter(|label| !ignore.contains(label))
        .copied()
        .collect::<BTreeSet<L>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_enumerate_sorted_and_distinct() {
        let frame = array![[3, 3, 0], [1, 7, 1], [0, 3, 7]];
        let labels = enumerate_labels(frame.view(), &IgnoreSet::new([0]));
        assert_eq!(labels, vec![1, 3, 7]);
    }

    #[test]
    fn test_enumerate_without_ignore_keeps_background() {
        let frame = array![[0u16, 2], [2, 0]];
        let labels = enumerate_labels(frame.view(), &IgnoreSet::empty());
        assert_eq!(labels, vec![0, 2]);
    }

    #[test]
    fn test_enumerate_only_ignored_labels() {
        let frame = array![[0i64, 0], [-1, 0]];
        let labels = enumerate_labels(frame.view(), &IgnoreSet::new([0, -1]));
        assert!(labels.is_empty());
    }

    #[test]
    fn test_ignore_set_order_and_duplicates() {
        let a: IgnoreSet<i32> = [4, 0, 4, 2].into_iter().collect();
        let b = IgnoreSet::new([2, 0, 4]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn test_ignore_absent_label_is_noop() {
        let frame = array![[1, 2], [2, 1]];
        let with_absent = enumerate_labels(frame.view(), &IgnoreSet::new([99]));
        let plain = enumerate_labels(frame.view(), &IgnoreSet::empty());
        assert_eq!(with_absent, plain);
    }
}
