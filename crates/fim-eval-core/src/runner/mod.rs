//! Evaluation run orchestration: configuration and the bounded dispatcher

mod config;
mod dispatcher;

pub use config::EvalConfig;
pub use dispatcher::{DispatchProgress, ExecutionDispatcher, ProgressCallback};
