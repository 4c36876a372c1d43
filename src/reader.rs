//! Reading single-value result files.

use std::fs;
use std::path::Path;
use tracing::warn;

/// Read a result file's sole numeric payload.
///
/// The whole file is read, surrounding whitespace stripped, and the remainder
/// parsed as a base-10 integer. Unreadable or non-numeric files are reported
/// and dropped; a partially corrupted results directory still yields a report
/// for every readable sample.
pub fn read_sample(path: &Path) -> Option<u64> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("skipping unreadable result file {}: {}", path.display(), e);
            return None;
        }
    };

    match content.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(
                "skipping result file {}: content is not an integer",
                path.display()
            );
            None
        }
    }
}
