//! Machine-readable JSON report

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EvalReport;
use crate::error::EvalResult;

/// JSON-serializable wrapper around an [`EvalReport`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Harness version that produced the report
    pub harness_version: String,

    /// The evaluation summary
    #[serde(flatten)]
    pub report: EvalReport,
}

impl JsonReport {
    /// Wrap a report with generation metadata
    pub fn new(report: EvalReport) -> Self {
        Self {
            generated_at: Utc::now(),
            harness_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> EvalResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(path = %path.as_ref().display(), "saved JSON report");
        Ok(())
    }
}
