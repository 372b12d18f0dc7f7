//! FIM-Eval core evaluation harness
//!
//! This crate scores language-model fill-in-middle completions against
//! held-out unit tests and reports unbiased pass@k statistics.
//!
//! # Components
//!
//! - **Stores**: load the gzip problem archive and the sample stream
//! - **Dispatcher**: run every (problem, completion) pair through a
//!   [`Verifier`] under bounded concurrency with per-sample fault isolation
//! - **Metrics**: group results by task and compute the unbiased pass@k
//!   estimator
//! - **Report**: overall accuracy and pass@k summary lines
//!
//! # Example
//!
//! ```rust,ignore
//! use fim_eval_core::{EvalConfig, ExecutionDispatcher, ProblemStore, SampleStore};
//!
//! let problems = ProblemStore::new("data/problems.jsonl.gz").load()?;
//! let samples = SampleStore::new("data/results.jsonl").load()?;
//! let dispatcher = ExecutionDispatcher::new(EvalConfig::default());
//! let results = dispatcher.run(&problems, &samples, verifier).await?;
//! ```

pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod store;
pub mod verify;

// Re-exports for convenience
pub use error::{EvalError, EvalResult};
pub use metrics::{PassAtK, TaskStats};
pub use report::{EvalReport, JsonReport};
pub use runner::{DispatchProgress, EvalConfig, ExecutionDispatcher, ProgressCallback};
pub use store::{Problem, ProblemStore, Sample, SampleStore};
pub use verify::{CommandVerifier, CorrectnessResult, Verifier};
