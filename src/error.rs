use std::path::PathBuf;

/// Errors that abort a report run.
///
/// Per-sample problems (bad filenames, corrupt payloads) never surface here;
/// they are logged and skipped during ingestion.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("results directory '{0}' does not exist")]
    MissingResultsDir(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to load display mapping '{path}': {reason}")]
    DisplayMapping { path: PathBuf, reason: String },
    #[error("invalid --images override: {0}")]
    ImagesOverride(String),
}
