/// Assignment of overlap records to a one-to-one label correspondence
///
/// This module resolves the overlap records of two frames into an injective
/// mapping from first-frame labels to second-frame labels, either greedily
/// (largest overlap first) or optimally (maximum summed overlap).
use crate::config::AssignmentStrategy;
use crate::histogram::OverlapRecord;
use crate::labels::Label;
use pathfinding::prelude::{kuhn_munkres, Matrix};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Partial, injective mapping from first-frame labels to second-frame labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "L: Ord + Deserialize<'de>"))]
pub struct CorrespondenceMap<L> {
    map: BTreeMap<L, L>,
}

impl<L: Label> CorrespondenceMap<L> {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Callers guarantee neither endpoint is already present
    fn commit(&mut self, current: L, next: L) {
        log::trace!("Committed overlap match {:?} -> {:?}", current, next);
        self.map.insert(current, next);
    }

    pub fn get(&self, current: L) -> Option<L> {
        self.map.get(&current).copied()
    }

    pub fn contains_key(&self, current: L) -> bool {
        self.map.contains_key(&current)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Pairs in ascending order of the first-frame label
    pub fn iter(&self) -> impl Iterator<Item = (L, L)> + '_ {
        self.map.iter().map(|(&current, &next)| (current, next))
    }

    pub fn keys(&self) -> impl Iterator<Item = L> + '_ {
        self.map.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = L> + '_ {
        self.map.values().copied()
    }

    /// Mapping from second-frame labels back to first-frame labels
    pub fn inverse(&self) -> Self {
        Self {
            map: self.map.iter().map(|(&current, &next)| (next, current)).collect(),
        }
    }

    pub fn is_injective(&self) -> bool {
        self.values().collect::<BTreeSet<_>>().len() == self.map.len()
    }

    pub fn into_inner(self) -> BTreeMap<L, L> {
        self.map
    }
}

impl<L: Label> Default for CorrespondenceMap<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> From<CorrespondenceMap<L>> for BTreeMap<L, L> {
    fn from(correspondences: CorrespondenceMap<L>) -> Self {
        correspondences.map
    }
}

/// Result of matching two frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Ord + Deserialize<'de>"))]
pub struct AssignmentResult<L> {
    /// Committed first-frame -> second-frame matches
    pub correspondences: CorrespondenceMap<L>,
    /// Candidate first-frame labels that received no match
    pub unmatched_current: Vec<L>,
    /// Second-frame labels seen in overlap records that were never claimed
    pub unmatched_next: Vec<L>,
    /// Summed overlap of the committed matches, in pixels
    pub total_overlap: usize,
}

impl<L: Label> AssignmentResult<L> {
    /// Summarise `correspondences` against the candidates and records they
    /// were computed from
    pub fn new(
        correspondences: CorrespondenceMap<L>,
        candidates: &[L],
        records: &[OverlapRecord<L>],
    ) -> Self {
        let unmatched_current: Vec<L> = candidates
            .iter()
            .copied()
            .filter(|&label| !correspondences.contains_key(label))
            .collect();

        let claimed: BTreeSet<L> = correspondences.values().collect();
        let unmatched_next: Vec<L> = records
            .iter()
            .map(|record| record.next_label)
            .filter(|label| !claimed.contains(label))
            .collect::<BTreeSet<L>>()
            .into_iter()
            .collect();

        let total_overlap = records
            .iter()
            .filter(|record| correspondences.get(record.current_label) == Some(record.next_label))
            .map(|record| record.overlap_count)
            .sum();

        Self {
            correspondences,
            unmatched_current,
            unmatched_next,
            total_overlap,
        }
    }
}

/// Priority of a record: larger overlap first, then smaller current label,
/// then smaller next label
fn record_priority<L: Label>(a: &OverlapRecord<L>, b: &OverlapRecord<L>) -> Ordering {
    b.overlap_count
        .cmp(&a.overlap_count)
        .then_with(|| a.current_label.cmp(&b.current_label))
        .then_with(|| a.next_label.cmp(&b.next_label))
}

/// Greedy global assignment
///
/// Records are scanned by descending overlap; a record is committed when
/// neither its current nor its next label has been claimed yet. Ties on the
/// overlap count go to the smaller current label, then the smaller next
/// label, which matches the order the histogram generates records in.
pub fn assign_greedy<L: Label>(records: &[OverlapRecord<L>]) -> CorrespondenceMap<L> {
    let mut ordered: Vec<&OverlapRecord<L>> = records.iter().collect();
    ordered.sort_by(|a, b| record_priority(a, b));

    let mut correspondences = CorrespondenceMap::new();
    let mut used_current = BTreeSet::new();
    let mut used_next = BTreeSet::new();

    for record in ordered {
        if used_current.contains(&record.current_label) || used_next.contains(&record.next_label) {
            continue;
        }
        used_current.insert(record.current_label);
        used_next.insert(record.next_label);
        correspondences.commit(record.current_label, record.next_label);
    }

    correspondences
}

/// Assignment maximising the summed overlap of committed pairs
///
/// Solved with Kuhn-Munkres on a square weight matrix padded with zeros.
/// Zero-weight pairs are never committed, so labels without a real overlap
/// stay unmatched.
pub fn assign_optimal<L: Label>(records: &[OverlapRecord<L>]) -> CorrespondenceMap<L> {
    let mut correspondences = CorrespondenceMap::new();
    if records.is_empty() {
        return correspondences;
    }

    let currents: Vec<L> = records
        .iter()
        .map(|record| record.current_label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let nexts: Vec<L> = records
        .iter()
        .map(|record| record.next_label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let size = currents.len().max(nexts.len());
    let mut weights = Matrix::new(size, size, 0i64);
    for record in records {
        if let (Ok(row), Ok(col)) = (
            currents.binary_search(&record.current_label),
            nexts.binary_search(&record.next_label),
        ) {
            weights[(row, col)] = record.overlap_count as i64;
        }
    }

    let (total, columns) = kuhn_munkres(&weights);
    log::debug!(
        "Kuhn-Munkres over {}x{} labels: total overlap {}",
        currents.len(),
        nexts.len(),
        total
    );

    for (row, &col) in columns.iter().enumerate() {
        if row < currents.len() && col < nexts.len() && weights[(row, col)] > 0 {
            correspondences.commit(currents[row], nexts[col]);
        }
    }

    correspondences
}

impl AssignmentStrategy {
    /// Resolve `records` into a correspondence map with this strategy
    pub fn assign<L: Label>(&self, records: &[OverlapRecord<L>]) -> CorrespondenceMap<L> {
        match self {
            AssignmentStrategy::Greedy => assign_greedy(records),
            AssignmentStrategy::Optimal => assign_optimal(records),
        }
    }
}
