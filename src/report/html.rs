//! HTML report rendering.

use crate::display::DisplayMapping;
use crate::report::format::{format_duration_ms, format_memory, size_numeric_prefix};
use crate::stats::MetricSummary;
use crate::tree::SummaryTree;
use std::fmt::Write;

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Benchmarking Report</title>
    <style>
        body { font-family: Arial, sans-serif; }
        table { border-collapse: collapse; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: center; }
        th { background-color: #f2f2f2; }
        pre { background-color: #f2f2f2; padding: 10px; }
    </style>
</head>
<body>
<h2>Benchmarking Report</h2>
"#;

/// Render the summary tree as a self-contained HTML document.
///
/// One heading and table per client, in tree iteration order. Rows are
/// sorted by the numeric value of the size label, then phase; ingestion
/// order never leaks into the output. An optional hardware description is
/// embedded verbatim at the top of the document.
pub fn render(tree: &SummaryTree, mapping: &DisplayMapping, specs: Option<&str>) -> String {
    let mut html = String::from(HEADER);

    if let Some(specs) = specs {
        html.push_str("<h3>Hardware</h3>\n<pre>");
        html.push_str(&escape(specs));
        html.push_str("</pre>\n");
    }

    for (client, sizes) in tree {
        let label = mapping.resolve(client);
        let _ = writeln!(html, "<h3>{}</h3>", escape(&label));
        html.push_str(
            "<table>\n<thead>\n<tr>\
             <th>Size</th><th>Phase</th>\
             <th>Max</th><th>p50</th><th>p95</th><th>p99</th><th>Min</th>\
             <th>Count</th></tr>\n</thead>\n<tbody>\n",
        );

        let mut rows: Vec<(&str, &str, Option<&MetricSummary>, Option<&MetricSummary>)> =
            Vec::new();
        for (size, phases) in sizes {
            for (phase, kinds) in phases {
                rows.push((size, phase, kinds.get("duration"), kinds.get("memory")));
            }
        }
        rows.sort_by(|a, b| {
            size_sort_key(a.0)
                .cmp(&size_sort_key(b.0))
                .then_with(|| a.1.cmp(b.1))
        });

        for (size, phase, duration, memory) in rows {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td>{}{}{}{}{}<td>{}</td></tr>",
                escape(size),
                escape(phase),
                stat_cell(duration.and_then(|s| s.max), memory.and_then(|s| s.max)),
                stat_cell(duration.and_then(|s| s.p50), memory.and_then(|s| s.p50)),
                stat_cell(duration.and_then(|s| s.p95), memory.and_then(|s| s.p95)),
                stat_cell(duration.and_then(|s| s.p99), memory.and_then(|s| s.p99)),
                stat_cell(duration.and_then(|s| s.min), memory.and_then(|s| s.min)),
                row_count(duration, memory),
            );
        }

        html.push_str("</tbody></table>\n");
    }

    html.push_str("</body></html>\n");
    html
}

/// Sort key for size-bucket labels: unbucketed first, then numeric value of
/// the label's leading digits, then the label itself for non-numeric ties.
fn size_sort_key(label: &str) -> (u8, u64, &str) {
    if label == "unbucketed" {
        return (0, 0, label);
    }
    match size_numeric_prefix(label) {
        Some(n) => (1, n, label),
        None => (2, 0, label),
    }
}

/// One statistic cell: duration rendered human-readable, memory (when the
/// group has a memory population) appended in parentheses.
fn stat_cell(duration: Option<f64>, memory: Option<f64>) -> String {
    let base = match duration {
        Some(ms) => format_duration_ms(ms),
        None => "N/A".to_string(),
    };
    let cell = match memory {
        Some(mb) => format!("{} ({})", base, format_memory(mb)),
        None => base,
    };
    format!("<td>{}</td>", cell)
}

fn row_count(duration: Option<&MetricSummary>, memory: Option<&MetricSummary>) -> usize {
    duration
        .map(|s| s.count)
        .or_else(|| memory.map(|s| s.count))
        .unwrap_or(0)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{MeasurementKey, MetricKind};
    use crate::tree::SampleTree;
    use std::collections::BTreeMap;

    fn key(client: &str, run: u32, phase: &str, size: Option<&str>, kind: MetricKind) -> MeasurementKey {
        MeasurementKey {
            client: client.to_string(),
            run,
            phase: phase.to_string(),
            size: size.map(str::to_string),
            kind,
        }
    }

    fn mapping() -> DisplayMapping {
        DisplayMapping::from_parts(BTreeMap::new(), BTreeMap::new())
    }

    #[test]
    fn rows_sort_by_numeric_size_then_phase() {
        let mut samples = SampleTree::new();
        samples.insert(&key("geth", 0, "second", Some("100M"), MetricKind::Duration), 1000);
        samples.insert(&key("geth", 0, "first", Some("100M"), MetricKind::Duration), 1000);
        samples.insert(&key("geth", 0, "first", Some("50M"), MetricKind::Duration), 1000);

        let html = render(&samples.summarize(), &mapping(), None);
        let row_50 = html.find("<td>50M</td>").unwrap();
        let row_100_first = html.find("<td>100M</td><td>first</td>").unwrap();
        let row_100_second = html.find("<td>100M</td><td>second</td>").unwrap();
        assert!(row_50 < row_100_first);
        assert!(row_100_first < row_100_second);
    }

    #[test]
    fn memory_is_appended_in_parentheses() {
        let mut samples = SampleTree::new();
        samples.insert(&key("geth", 0, "first", Some("100M"), MetricKind::Duration), 125_000);
        samples.insert(&key("geth", 0, "first", Some("100M"), MetricKind::Memory), 512);

        let html = render(&samples.summarize(), &mapping(), None);
        assert!(html.contains("<td>2min5s (512M)</td>"));
    }

    #[test]
    fn memory_only_group_renders_na_durations() {
        let mut samples = SampleTree::new();
        samples.insert(&key("reth", 0, "sync", Some("50M"), MetricKind::Memory), 1200);

        let html = render(&samples.summarize(), &mapping(), None);
        assert!(html.contains("<td>N/A (1200M)</td>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn unknown_client_heading_uses_sentinel_label() {
        let mut samples = SampleTree::new();
        samples.insert(&key("nethermind_v2", 0, "first", None, MetricKind::Duration), 1000);

        let html = render(&samples.summarize(), &mapping(), None);
        assert!(html.contains("<h3>default</h3>"));
    }

    #[test]
    fn hardware_specs_are_embedded() {
        let samples = SampleTree::new();
        let html = render(&samples.summarize(), &mapping(), Some("AMD EPYC, 128G RAM"));
        assert!(html.contains("<pre>AMD EPYC, 128G RAM</pre>"));
    }
}
