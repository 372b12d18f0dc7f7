//! Correctness verification
//!
//! The [`Verifier`] trait is the harness's single external capability: it
//! executes a candidate completion against a problem's tests and reports
//! pass/fail. Isolation of the untrusted code (process, filesystem, network)
//! is the implementation's responsibility; the dispatcher assumes none.

mod command;

pub use command::CommandVerifier;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::store::Problem;

/// Outcome of verifying one completion
///
/// Produced exactly once per submitted sample and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectnessResult {
    /// Problem the completion attempted
    pub task_id: String,

    /// Correlation token linking back to the originating sample
    pub completion_id: Option<u64>,

    /// Whether the tests passed
    pub passed: bool,

    /// Human-readable success marker or failure diagnostic
    pub detail: String,
}

impl CorrectnessResult {
    /// Create a passing result
    pub fn pass(
        task_id: impl Into<String>,
        completion_id: Option<u64>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            completion_id,
            passed: true,
            detail: detail.into(),
        }
    }

    /// Create a failing result
    pub fn fail(
        task_id: impl Into<String>,
        completion_id: Option<u64>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            completion_id,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Capability that executes a completion against a problem's tests
///
/// Implementations must never fail outright: any internal fault (syntax
/// error, runtime exception, timeout, resource violation) maps to a
/// `passed = false` result with a readable `detail`, returned within
/// `timeout` plus bounded scheduling overhead.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Verify one completion, round-tripping `completion_id` unchanged
    async fn verify(
        &self,
        problem: &Problem,
        completion: &str,
        timeout: Duration,
        completion_id: Option<u64>,
    ) -> CorrectnessResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let ok = CorrectnessResult::pass("t/0", Some(3), "passed");
        assert!(ok.passed);
        assert_eq!(ok.completion_id, Some(3));

        let bad = CorrectnessResult::fail("t/0", None, "assertion failed");
        assert!(!bad.passed);
        assert_eq!(bad.detail, "assertion failed");
    }
}
