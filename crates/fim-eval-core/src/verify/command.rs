//! Command-backed verifier
//!
//! Splices the completion into the problem, appends the test code and a
//! `check(entry_point)` call, and pipes the resulting program to a
//! caller-configured interpreter command.
//!
//! This verifier provides no isolation of its own. The configured command is
//! expected to supply whatever sandboxing the operator requires (e.g. a
//! container or jail wrapper around the interpreter).

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{CorrectnessResult, Verifier};
use crate::store::Problem;

/// Maximum length of diagnostic output kept in a result's `detail`
const MAX_DETAIL_BYTES: usize = 2048;

/// Verifier that runs candidate programs through an external interpreter
#[derive(Debug, Clone)]
pub struct CommandVerifier {
    /// Interpreter executable
    program: String,
    /// Fixed arguments passed before the program is piped on stdin
    args: Vec<String>,
}

impl CommandVerifier {
    /// Create a verifier piping programs to the given interpreter
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add fixed interpreter arguments
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a whitespace-separated command line, e.g. `"firejail python3"`
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).with_args(parts.map(str::to_string)))
    }

    /// Assemble the full candidate program for a completion
    fn assemble_program(problem: &Problem, completion: &str) -> String {
        format!(
            "{}{}{}\n{}\ncheck({})\n",
            problem.prompt, completion, problem.suffix, problem.test, problem.entry_point
        )
    }

    async fn run(&self, source: String, timeout: Duration) -> Result<std::process::Output, String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("failed to spawn verifier command '{}': {}", self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A fast-exiting interpreter may close stdin early; the exit
            // status below is what decides pass/fail.
            if let Err(e) = stdin.write_all(source.as_bytes()).await {
                tracing::debug!(error = %e, "verifier closed stdin before full program was written");
            }
        }

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(format!("verifier command failed: {}", e)),
            // kill_on_drop reaps the child when the wait future is dropped
            Err(_) => Err(format!("timed out after {}s", timeout.as_secs_f64())),
        }
    }
}

#[async_trait]
impl Verifier for CommandVerifier {
    async fn verify(
        &self,
        problem: &Problem,
        completion: &str,
        timeout: Duration,
        completion_id: Option<u64>,
    ) -> CorrectnessResult {
        let source = Self::assemble_program(problem, completion);

        match self.run(source, timeout).await {
            Ok(output) if output.status.success() => {
                CorrectnessResult::pass(problem.task_id.as_str(), completion_id, "passed")
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let code = output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "killed by signal".to_string());
                CorrectnessResult::fail(
                    problem.task_id.as_str(),
                    completion_id,
                    format!("exit status {}: {}", code, tail(&stderr)),
                )
            }
            Err(detail) => CorrectnessResult::fail(problem.task_id.as_str(), completion_id, detail),
        }
    }
}

/// Keep the last `MAX_DETAIL_BYTES` of diagnostic output
fn tail(text: &str) -> &str {
    let trimmed = text.trim_end();
    match trimmed.char_indices().rev().nth(MAX_DETAIL_BYTES) {
        Some((index, _)) => &trimmed[index..],
        None => trimmed,
    }
}
