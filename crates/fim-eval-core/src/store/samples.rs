//! Sample stream loading
//!
//! Reads line-delimited JSON completion records in file order. A partial
//! sample set would silently under-count pass@k, so a malformed line aborts
//! the load.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// A generated completion to be scored
///
/// Multiple samples may share a `task_id` (repeated sampling for pass@k).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Problem this completion attempts
    pub task_id: String,

    /// Generated text to be spliced into the hole
    pub completion: String,

    /// Optional correlation token, round-tripped through verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_id: Option<u64>,
}

/// Loader for the line-delimited sample stream
pub struct SampleStore {
    path: PathBuf,
}

impl SampleStore {
    /// Create a store reading from the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all samples, preserving file order
    pub fn load(&self) -> EvalResult<Vec<Sample>> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            EvalError::parse(format!(
                "failed to open sample stream {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let mut samples = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                EvalError::parse(format!(
                    "failed to read sample stream {} at line {}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let sample: Sample = serde_json::from_str(&line).map_err(|e| {
                EvalError::parse(format!(
                    "malformed sample record at line {}: {}",
                    index + 1,
                    e
                ))
            })?;

            samples.push(sample);
        }

        tracing::debug!(
            count = samples.len(),
            path = %self.path.display(),
            "loaded sample stream"
        );

        Ok(samples)
    }
}
