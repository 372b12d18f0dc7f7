//! Error types for the evaluation harness

use thiserror::Error;

/// Result type alias for harness operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Main error type for the evaluation harness
///
/// Verifier faults are deliberately absent: a failing or crashing completion
/// is data (a `CorrectnessResult` with `passed = false`), never an error.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Problem archive is unreadable or contains malformed records
    #[error("Load error: {0}")]
    Load(String),

    /// Sample stream is unreadable or contains malformed records
    #[error("Parse error: {0}")]
    Parse(String),

    /// A sample references a task_id absent from the loaded problem set
    #[error("Unknown task_id in sample stream: {task_id}")]
    UnknownTask { task_id: String },

    /// Statistics requested over zero results
    #[error("Cannot compute statistics over an empty result set")]
    EmptyResultSet,

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl EvalError {
    /// Create a new load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load(message.into())
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new unknown-task error
    pub fn unknown_task(task_id: impl Into<String>) -> Self {
        Self::UnknownTask {
            task_id: task_id.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}

impl From<std::io::Error> for EvalError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
