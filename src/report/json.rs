//! JSON report export.

use crate::error::ReportError;
use crate::tree::SummaryTree;
use std::fs;
use std::path::Path;

/// Serialize the summary tree to pretty-printed JSON at `path`.
///
/// Parent directories are created as needed. The full
/// client -> size -> phase -> kind nesting is preserved; map keys come out
/// sorted, which is an artifact of the tree representation rather than a
/// guarantee of the format.
pub fn write(tree: &SummaryTree, path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(tree)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{MeasurementKey, MetricKind};
    use crate::tree::SampleTree;

    #[test]
    fn round_trips_through_json() {
        let mut samples = SampleTree::new();
        samples.insert(
            &MeasurementKey {
                client: "geth".to_string(),
                run: 0,
                phase: "first".to_string(),
                size: Some("100M".to_string()),
                kind: MetricKind::Duration,
            },
            500,
        );
        let tree = samples.summarize();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("results.json");
        write(&tree, &path).unwrap();

        let reparsed: SummaryTree =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn field_names_are_stable() {
        let mut samples = SampleTree::new();
        samples.insert(
            &MeasurementKey {
                client: "geth".to_string(),
                run: 0,
                phase: "first".to_string(),
                size: None,
                kind: MetricKind::Duration,
            },
            500,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write(&samples.summarize(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        for field in ["\"max\"", "\"p50\"", "\"p95\"", "\"p99\"", "\"min\"", "\"count\""] {
            assert!(content.contains(field), "missing field {field}");
        }
        assert!(content.contains("\"unbucketed\""));
    }
}
