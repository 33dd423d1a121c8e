//! Overlap histograms between two label frames
//!
//! For every candidate label of the first frame the histogram holds the
//! frequency of each second-frame label found at the same pixel positions.

use crate::error::{Result, TrackingError};
use crate::labels::{enumerate_labels, IgnoreSet, Label};
use ndarray::{ArrayView2, Zip};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of pixels where `current_label` (first frame) coincides with
/// `next_label` (second frame). Always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapRecord<L> {
    pub current_label: L,
    pub next_label: L,
    pub overlap_count: usize,
}

impl<L> OverlapRecord<L> {
    pub fn new(current_label: L, next_label: L, overlap_count: usize) -> Self {
        Self {
            current_label,
            next_label,
            overlap_count,
        }
    }
}

/// Fail unless both frames have the same shape
pub(crate) fn ensure_same_shape<L>(first: &ArrayView2<L>, second: &ArrayView2<L>) -> Result<()> {
    if first.shape() != second.shape() {
        return Err(TrackingError::shape_mismatch(first.shape(), second.shape()));
    }
    Ok(())
}

/// Per-candidate frequency tables of co-located second-frame labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapHistogram<L> {
    tables: BTreeMap<L, BTreeMap<L, usize>>,
}

impl<L: Label> OverlapHistogram<L> {
    /// Tally overlaps for `candidates` in a single pass over both frames
    ///
    /// Pixels whose second-frame label is ignored are not counted. Candidates
    /// that are themselves ignored get no table.
    pub fn build(
        first: ArrayView2<L>,
        second: ArrayView2<L>,
        ignore: &IgnoreSet<L>,
        candidates: &[L],
    ) -> Result<Self> {
        ensure_same_shape(&first, &second)?;

        let mut tables: BTreeMap<L, BTreeMap<L, usize>> = candidates
            .iter()
            .filter(|label| !ignore.contains(label))
            .map(|&label| (label, BTreeMap::new()))
            .collect();

        Zip::from(first).and(second).for_each(|current, next| {
            if ignore.contains(next) {
                return;
            }
            if let Some(table) = tables.get_mut(current) {
                *table.entry(*next).or_insert(0) += 1;
            }
        });

        Ok(Self { tables })
    }

    /// Frequency table of one candidate, `None` if it was not a candidate
    pub fn for_label(&self, label: L) -> Option<&BTreeMap<L, usize>> {
        self.tables.get(&label)
    }

    /// Candidate labels in ascending order
    pub fn candidates(&self) -> impl Iterator<Item = L> + '_ {
        self.tables.keys().copied()
    }

    /// Sum of non-ignored overlaps recorded for `label`
    pub fn overlap_total(&self, label: L) -> usize {
        self.for_label(label)
            .map(|table| table.values().sum::<usize>())
            .unwrap_or(0)
    }

    /// Number of distinct (current, next) pairs
    pub fn num_records(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    /// Records in generation order: ascending current label, then ascending
    /// next label
    pub fn records(&self) -> Vec<OverlapRecord<L>> {
        self.tables
            .iter()
            .flat_map(|(&current, table)| {
                table
                    .iter()
                    .map(move |(&next, &count)| OverlapRecord::new(current, next, count))
            })
            .collect()
    }
}

/// Enumerate first-frame labels and collect every overlap record
pub fn overlap_records<L: Label>(
    first: ArrayView2<L>,
    second: ArrayView2<L>,
    ignore: &IgnoreSet<L>,
) -> Result<Vec<OverlapRecord<L>>> {
    ensure_same_shape(&first, &second)?;
    let candidates = enumerate_labels(first, ignore);
    Ok(OverlapHistogram::build(first, second, ignore, &candidates)?.records())
}
