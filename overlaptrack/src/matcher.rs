//! Overlap matcher: label enumeration, histogram construction and assignment
//! chained into a single call per frame pair

use crate::assignment::{AssignmentResult, CorrespondenceMap};
use crate::config::MatcherConfig;
use crate::error::Result;
use crate::histogram::{ensure_same_shape, OverlapHistogram};
use crate::labels::{enumerate_labels, IgnoreSet, Label};
use ndarray::ArrayView2;

/// Matches the labels of one frame to the labels of the next frame by
/// maximum pixel overlap
#[derive(Debug, Clone)]
pub struct OverlapMatcher<L> {
    config: MatcherConfig<L>,
    ignore: IgnoreSet<L>,
}

impl<L: Label> OverlapMatcher<L> {
    pub fn new(config: MatcherConfig<L>) -> Self {
        let ignore = IgnoreSet::new(config.ignore_labels.iter().copied());
        Self { config, ignore }
    }

    pub fn config(&self) -> &MatcherConfig<L> {
        &self.config
    }

    pub fn ignore_set(&self) -> &IgnoreSet<L> {
        &self.ignore
    }

    /// Match the labels of `first` (time t) to the labels of `second` (time t+1)
    ///
    /// # Arguments
    /// * `first` - label grid at time t
    /// * `second` - label grid at time t+1, same shape as `first`
    ///
    /// # Returns
    /// AssignmentResult with the injective correspondence map and the labels
    /// left unmatched on either side. Fails with `ShapeMismatch` when the
    /// grids differ in shape.
    pub fn match_frames(
        &self,
        first: ArrayView2<L>,
        second: ArrayView2<L>,
    ) -> Result<AssignmentResult<L>> {
        ensure_same_shape(&first, &second)?;

        let candidates = enumerate_labels(first, &self.ignore);
        let histogram = OverlapHistogram::build(first, second, &self.ignore, &candidates)?;

        let mut records = histogram.records();
        let num_records = records.len();
        records.retain(|record| record.overlap_count >= self.config.min_overlap);

        log::debug!(
            "{} candidate labels, {} overlap records ({} below min_overlap {})",
            candidates.len(),
            num_records,
            num_records - records.len(),
            self.config.min_overlap
        );

        let correspondences = self.config.strategy.assign(&records);
        log::debug!(
            "{:?} assignment matched {} of {} labels",
            self.config.strategy,
            correspondences.len(),
            candidates.len()
        );

        Ok(AssignmentResult::new(correspondences, &candidates, &records))
    }
}

impl<L: Label> Default for OverlapMatcher<L> {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

/// Track objects across one time step by maximum area overlap
///
/// # Arguments
/// * `first` - label grid at time t
/// * `second` - label grid at time t+1
/// * `ignore_labels` - labels left out of matching on both sides, e.g. background
///
/// # Returns
/// Mapping from labels in `first` to the corresponding labels in `second`
pub fn single_timestep_overlap_tracking<L: Label>(
    first: ArrayView2<L>,
    second: ArrayView2<L>,
    ignore_labels: impl IntoIterator<Item = L>,
) -> Result<CorrespondenceMap<L>> {
    let config = MatcherConfig::default().with_ignore_labels(ignore_labels);
    let result = OverlapMatcher::new(config).match_frames(first, second)?;
    Ok(result.correspondences)
}
