//! Evaluation run configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Maximum number of concurrent verifier invocations
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Hard timeout per verifier invocation, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// k values reported by pass@k
    #[serde(default = "default_ks")]
    pub ks: Vec<u64>,
}

fn default_concurrency() -> usize {
    16
}

fn default_timeout() -> u64 {
    10
}

fn default_ks() -> Vec<u64> {
    vec![1, 3, 5]
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_secs: default_timeout(),
            ks: default_ks(),
        }
    }
}

impl EvalConfig {
    /// Set the worker pool size (clamped to at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the per-invocation timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the reported k values
    pub fn with_ks(mut self, ks: Vec<u64>) -> Self {
        self.ks = ks;
        self
    }

    /// Per-invocation timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
