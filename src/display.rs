//! Client display-label resolution.
//!
//! Reports show a human-readable label per client instead of the raw
//! identifier. Labels come from two places: a caller-supplied override map
//! (the `--images` flag) and an external `images.yaml` file keyed by base
//! client name. Both are loaded up front so rendering never touches the
//! file system and tests can substitute an in-memory mapping.

use crate::error::ReportError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Sentinel label meaning "no specific label configured".
pub const DEFAULT_LABEL: &str = "default";

#[derive(Debug, Deserialize)]
struct ImagesFile {
    images: BTreeMap<String, String>,
}

/// Resolves client identifiers to display labels.
#[derive(Debug)]
pub struct DisplayMapping {
    overrides: BTreeMap<String, String>,
    images: BTreeMap<String, String>,
}

impl DisplayMapping {
    /// Load the external mapping file and combine it with caller overrides.
    ///
    /// The file must exist and parse; it is a required collaborator of the
    /// HTML renderer, not an optional one.
    pub fn load(
        path: &Path,
        overrides: BTreeMap<String, String>,
    ) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::DisplayMapping {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let file: ImagesFile =
            serde_yaml::from_str(&content).map_err(|e| ReportError::DisplayMapping {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_parts(overrides, file.images))
    }

    /// Build a mapping from in-memory parts.
    pub fn from_parts(
        overrides: BTreeMap<String, String>,
        images: BTreeMap<String, String>,
    ) -> Self {
        Self { overrides, images }
    }

    /// Resolve a client identifier to its display label.
    ///
    /// Precedence: a non-sentinel override wins; otherwise the client's base
    /// name (identifier with any trailing `_`-delimited tag stripped) is
    /// looked up in the external mapping; otherwise the sentinel itself.
    pub fn resolve(&self, client: &str) -> String {
        if let Some(label) = self.overrides.get(client) {
            if label != DEFAULT_LABEL {
                return label.clone();
            }
        }
        let base = client
            .rsplit_once('_')
            .map(|(base, _tag)| base)
            .unwrap_or(client);
        self.images
            .get(base)
            .cloned()
            .unwrap_or_else(|| DEFAULT_LABEL.to_string())
    }
}
