/// Configuration types for the overlap matcher
use serde::{Deserialize, Serialize};

/// How overlap records are resolved into a one-to-one mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentStrategy {
    /// Commit the largest overlaps first, skipping pairs whose endpoint is taken
    #[default]
    Greedy,
    /// Maximise the summed overlap of all committed pairs (Kuhn-Munkres)
    Optimal,
}

/// Configuration for [`crate::OverlapMatcher`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig<L> {
    /// Labels excluded as both source and target, e.g. background
    pub ignore_labels: Vec<L>,
    /// Overlaps smaller than this many pixels are discarded before assignment
    pub min_overlap: usize,
    /// Assignment algorithm
    pub strategy: AssignmentStrategy,
}

impl<L> Default for MatcherConfig<L> {
    fn default() -> Self {
        Self {
            ignore_labels: Vec::new(),
            min_overlap: 1,
            strategy: AssignmentStrategy::Greedy,
        }
    }
}

impl<L> MatcherConfig<L> {
    pub fn with_ignore_labels(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.ignore_labels = labels.into_iter().collect();
        self
    }

    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    pub fn with_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: MatcherConfig<i32> = MatcherConfig::default();
        assert!(config.ignore_labels.is_empty());
        assert_eq!(config.min_overlap, 1);
        assert_eq!(config.strategy, AssignmentStrategy::Greedy);
    }

    #[test]
    fn test_config_from_json() {
        let config: MatcherConfig<u16> = serde_json::from_str(
            r#"{"ignore_labels": [0, 65535], "min_overlap": 5, "strategy": "Optimal"}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            MatcherConfig::default()
                .with_ignore_labels([0, 65535])
                .with_min_overlap(5)
                .with_strategy(AssignmentStrategy::Optimal)
        );
    }
}
