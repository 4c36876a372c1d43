//! Aggregation of raw samples into the nested report tree.

use crate::key::{MeasurementKey, MetricKind};
use crate::stats::MetricSummary;
use std::collections::BTreeMap;

/// Workload-size bucket a group of samples belongs to.
///
/// The unbucketed grammar gets its own bucket rather than an empty-string
/// label, so it can never collide with a real size label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeBucket {
    Unbucketed,
    Labeled(String),
}

impl SizeBucket {
    /// Key used for this bucket in the serialized report tree.
    pub fn label(&self) -> &str {
        match self {
            SizeBucket::Unbucketed => "unbucketed",
            SizeBucket::Labeled(s) => s,
        }
    }
}

impl From<Option<&str>> for SizeBucket {
    fn from(size: Option<&str>) -> Self {
        match size {
            Some(s) => SizeBucket::Labeled(s.to_string()),
            None => SizeBucket::Unbucketed,
        }
    }
}

/// Summaries keyed client -> size -> phase -> metric kind.
///
/// This is the shape both renderers consume and the shape of the JSON report.
pub type SummaryTree =
    BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, MetricSummary>>>>;

/// Raw samples grouped by client, size bucket, phase, and metric kind.
///
/// The run index is deliberately not part of the grouping key: all runs of
/// the same phase contribute to one statistical population.
#[derive(Debug, Default)]
pub struct SampleTree {
    clients: BTreeMap<String, BTreeMap<SizeBucket, BTreeMap<String, BTreeMap<MetricKind, Vec<u64>>>>>,
}

impl SampleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to its group, creating the path as needed.
    pub fn insert(&mut self, key: &MeasurementKey, value: u64) {
        self.clients
            .entry(key.client.clone())
            .or_default()
            .entry(SizeBucket::from(key.size.as_deref()))
            .or_default()
            .entry(key.phase.clone())
            .or_default()
            .entry(key.kind)
            .or_default()
            .push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of samples held across all groups.
    pub fn sample_count(&self) -> usize {
        self.clients
            .values()
            .flat_map(|sizes| sizes.values())
            .flat_map(|phases| phases.values())
            .flat_map(|kinds| kinds.values())
            .map(Vec::len)
            .sum()
    }

    /// Reduce every group to its summary statistics.
    pub fn summarize(&self) -> SummaryTree {
        let mut tree = SummaryTree::new();
        for (client, sizes) in &self.clients {
            let client_node = tree.entry(client.clone()).or_default();
            for (size, phases) in sizes {
                let size_node = client_node.entry(size.label().to_string()).or_default();
                for (phase, kinds) in phases {
                    let phase_node = size_node.entry(phase.clone()).or_default();
                    for (kind, values) in kinds {
                        phase_node.insert(
                            kind.label().to_string(),
                            MetricSummary::from_samples(values),
                        );
                    }
                }
            }
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(client: &str, run: u32, phase: &str, size: Option<&str>, kind: MetricKind) -> MeasurementKey {
        MeasurementKey {
            client: client.to_string(),
            run,
            phase: phase.to_string(),
            size: size.map(str::to_string),
            kind,
        }
    }

    #[test]
    fn runs_pool_into_one_group() {
        let mut tree = SampleTree::new();
        tree.insert(&key("geth", 0, "first", Some("100M"), MetricKind::Duration), 500);
        tree.insert(&key("geth", 1, "first", Some("100M"), MetricKind::Duration), 700);

        let summaries = tree.summarize();
        let summary = &summaries["geth"]["100M"]["first"]["duration"];
        assert_eq!(summary.count, 2);
        assert_eq!(summary.p50, Some(600.0));
        assert_eq!(summary.min, Some(500.0));
        assert_eq!(summary.max, Some(700.0));
    }

    #[test]
    fn unbucketed_is_distinct_from_labeled() {
        let mut tree = SampleTree::new();
        tree.insert(&key("geth", 0, "first", None, MetricKind::Duration), 100);
        tree.insert(&key("geth", 0, "first", Some("100M"), MetricKind::Duration), 200);

        let summaries = tree.summarize();
        assert_eq!(summaries["geth"]["unbucketed"]["first"]["duration"].count, 1);
        assert_eq!(summaries["geth"]["100M"]["first"]["duration"].count, 1);
    }

    #[test]
    fn memory_does_not_create_a_duration_group() {
        let mut tree = SampleTree::new();
        tree.insert(&key("reth", 0, "sync", Some("50M"), MetricKind::Memory), 1200);

        let summaries = tree.summarize();
        let kinds = &summaries["reth"]["50M"]["sync"];
        assert_eq!(kinds["memory"].count, 1);
        assert!(!kinds.contains_key("duration"));
    }

    #[test]
    fn counts_samples_across_groups() {
        let mut tree = SampleTree::new();
        assert!(tree.is_empty());
        tree.insert(&key("geth", 0, "first", None, MetricKind::Duration), 1);
        tree.insert(&key("besu", 0, "first", None, MetricKind::Duration), 2);
        tree.insert(&key("besu", 1, "first", None, MetricKind::Duration), 3);
        assert_eq!(tree.sample_count(), 3);
    }
}
