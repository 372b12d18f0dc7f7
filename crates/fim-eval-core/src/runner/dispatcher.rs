//! Bounded-concurrency execution dispatch
//!
//! Converts each sample into exactly one [`CorrectnessResult`] by invoking
//! the verifier under a semaphore-bounded worker pool. One bad completion
//! must never take down the batch: a panicking worker is captured at join
//! and synthesized into a failed result.

use std::collections::HashMap;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use super::EvalConfig;
use crate::error::{EvalError, EvalResult};
use crate::store::{Problem, Sample};
use crate::verify::{CorrectnessResult, Verifier};

/// Callback for progress updates during dispatch
pub type ProgressCallback = Box<dyn Fn(DispatchProgress) + Send + Sync>;

/// Progress update emitted once per completed result
#[derive(Debug, Clone)]
pub struct DispatchProgress {
    /// Results collected so far
    pub completed: usize,
    /// Total submitted samples
    pub total: usize,
    /// Task the just-completed result belongs to
    pub task_id: String,
}

/// Dispatcher running (problem, completion) pairs through a verifier
pub struct ExecutionDispatcher {
    config: EvalConfig,
    progress_callback: Option<ProgressCallback>,
}

impl ExecutionDispatcher {
    /// Create a dispatcher with the given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    /// Set a progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Run every sample to completion and return one result per sample
    ///
    /// Blocks until the batch fully drains. Results carry no ordering
    /// guarantee; correlate them through `task_id`/`completion_id`. Samples
    /// without a `completion_id` are assigned their submission index.
    pub async fn run(
        &self,
        problems: &HashMap<String, Problem>,
        samples: &[Sample],
        verifier: Arc<dyn Verifier>,
    ) -> EvalResult<Vec<CorrectnessResult>> {
        // Fail fast on broken input pairing before any work is spawned.
        for sample in samples {
            if !problems.contains_key(&sample.task_id) {
                return Err(EvalError::unknown_task(sample.task_id.as_str()));
            }
        }

        let total = samples.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let timeout = self.config.timeout();

        tracing::info!(
            samples = total,
            problems = problems.len(),
            concurrency = self.config.concurrency,
            "dispatching evaluation batch"
        );

        let mut pending = FuturesUnordered::new();
        for (index, sample) in samples.iter().enumerate() {
            let completion_id = sample.completion_id.or(Some(index as u64));
            let task_id = sample.task_id.clone();
            let problem = problems[&sample.task_id].clone();
            let completion = sample.completion.clone();
            let verifier = Arc::clone(&verifier);
            let semaphore = Arc::clone(&semaphore);

            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("dispatch semaphore is never closed");
                verifier
                    .verify(&problem, &completion, timeout, completion_id)
                    .await
            });

            pending.push(async move { (task_id, completion_id, handle.await) });
        }

        // Single-writer collection loop: workers produce, only this loop
        // mutates the result vector.
        let mut results = Vec::with_capacity(total);
        while let Some((task_id, completion_id, joined)) = pending.next().await {
            let result = match joined {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!(task_id = %task_id, error = %err, "verifier worker panicked");
                    CorrectnessResult::fail(
                        task_id.as_str(),
                        completion_id,
                        format!("verifier fault: {}", err),
                    )
                }
            };

            results.push(result);

            if let Some(callback) = &self.progress_callback {
                callback(DispatchProgress {
                    completed: results.len(),
                    total,
                    task_id,
                });
            }
        }

        debug_assert_eq!(results.len(), total);
        Ok(results)
    }
}
