use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::scan_result::ScanResult;
use crate::errors::SiftError;

const RESULTS_KEY: &str = "results";

/// A full scanner report. Only `results` is read; other top-level fields are
/// ignored. A repeated `results` key keeps its last value.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Document {
    pub results: Vec<ScanResult>,
}

impl TryFrom<Map<String, Value>> for Document {
    type Error = String;

    fn try_from(mut report: Map<String, Value>) -> Result<Self, Self::Error> {
        let results = report
            .remove(RESULTS_KEY)
            .ok_or_else(|| "report is missing `results`".to_string())?;
        let results = serde_json::from_value(results)
            .map_err(|e| format!("invalid `results` in report: {}", e))?;
        Ok(Self { results })
    }
}

impl Document {
    /// Reads the whole file into memory, then parses it. Content that is not
    /// UTF-8 is a parse error, not a read error.
    pub fn load(path: &Path) -> Result<Self, SiftError> {
        let content = std::fs::read(path).map_err(|source| SiftError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = content.len(), "Read scanner report");
        Self::from_slice(&content)
    }

    pub fn from_slice(content: &[u8]) -> Result<Self, SiftError> {
        Ok(serde_json::from_slice(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, SiftError> {
        Self::from_slice(content.as_bytes())
    }
}
