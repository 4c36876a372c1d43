//! The report pipeline: ingest raw result files, aggregate, render.

use crate::display::DisplayMapping;
use crate::error::ReportError;
use crate::key::MeasurementKey;
use crate::reader::read_sample;
use crate::report;
use crate::tree::SampleTree;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Hardware description file; consumed verbatim, never decoded as a sample.
pub const SPECS_FILE: &str = "computer_specs.txt";

/// Where a pipeline run wrote its reports.
#[derive(Debug)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// Run the whole pipeline for one results directory.
///
/// The JSON report is written before the display mapping is loaded, so a
/// missing `images.yaml` leaves a valid JSON report behind and only fails
/// the HTML step.
pub fn run(
    results_path: &Path,
    images_path: &Path,
    overrides: BTreeMap<String, String>,
) -> Result<ReportPaths, ReportError> {
    if !results_path.is_dir() {
        return Err(ReportError::MissingResultsDir(results_path.to_path_buf()));
    }

    let samples = ingest(results_path)?;
    info!(
        "aggregated {} samples from {}",
        samples.sample_count(),
        results_path.display()
    );
    let summaries = samples.summarize();

    let reports_dir = results_path.join("reports");
    let json_path = reports_dir.join("results.json");
    report::json::write(&summaries, &json_path)?;
    info!("wrote {}", json_path.display());

    let mapping = DisplayMapping::load(images_path, overrides)?;
    let specs = read_specs(results_path);
    let html_path = reports_dir.join("report.html");
    fs::write(&html_path, report::html::render(&summaries, &mapping, specs.as_deref()))?;
    info!("wrote {}", html_path.display());

    Ok(ReportPaths {
        json: json_path,
        html: html_path,
    })
}

/// Decode and read every result file in the directory.
///
/// Per-file failures are logged and skipped; only the directory listing
/// itself is fatal.
fn ingest(results_path: &Path) -> Result<SampleTree, ReportError> {
    let mut samples = SampleTree::new();
    for entry in fs::read_dir(results_path)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".txt") || name == SPECS_FILE {
            continue;
        }
        let key = match MeasurementKey::decode(name) {
            Ok(key) => key,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };
        if let Some(value) = read_sample(&path) {
            samples.insert(&key, value);
        }
    }
    Ok(samples)
}

fn read_specs(results_path: &Path) -> Option<String> {
    fs::read_to_string(results_path.join(SPECS_FILE)).ok()
}
