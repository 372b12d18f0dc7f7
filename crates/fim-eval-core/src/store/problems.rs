//! Problem archive loading
//!
//! Reads the gzip-compressed, line-delimited JSON problem archive into an
//! addressable map keyed by `task_id`. Partial problem sets make an
//! evaluation meaningless, so any malformed record fails the whole load.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// A single fill-in-middle evaluation problem
///
/// Immutable once loaded; the `prompt` and `suffix` surround the hole the
/// completion is spliced into, and `test` exercises `entry_point`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Unique problem identifier
    pub task_id: String,

    /// Text preceding the hole
    pub prompt: String,

    /// Text following the hole
    pub suffix: String,

    /// Reference solution for the hole
    pub canonical_solution: String,

    /// Executable test code
    pub test: String,

    /// Name of the function under test
    pub entry_point: String,
}

/// Loader for the compressed problem archive
pub struct ProblemStore {
    path: PathBuf,
}

impl ProblemStore {
    /// Create a store reading from the given archive path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the full problem set
    ///
    /// Idempotent for an unchanged source: calling twice yields equal maps.
    pub fn load(&self) -> EvalResult<HashMap<String, Problem>> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            EvalError::load(format!(
                "failed to open problem archive {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(GzDecoder::new(file));
        let mut problems = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                EvalError::load(format!(
                    "failed to read problem archive {} at line {}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let problem: Problem = serde_json::from_str(&line).map_err(|e| {
                EvalError::load(format!(
                    "malformed problem record at line {}: {}",
                    index + 1,
                    e
                ))
            })?;

            let task_id = problem.task_id.clone();
            if problems.insert(task_id.clone(), problem).is_some() {
                return Err(EvalError::load(format!(
                    "duplicate task_id in problem archive: {}",
                    task_id
                )));
            }
        }

        tracing::debug!(
            count = problems.len(),
            path = %self.path.display(),
            "loaded problem set"
        );

        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn problem_line(task_id: &str) -> String {
        serde_json::to_string(&Problem {
            task_id: task_id.to_string(),
            prompt: "def add(a, b):\n".to_string(),
            suffix: "\n".to_string(),
            canonical_solution: "    return a + b".to_string(),
            test: "def check(candidate):\n    assert candidate(1, 2) == 3\n".to_string(),
            entry_point: "add".to_string(),
        })
        .unwrap()
    }

    fn write_archive(lines: &[String]) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        for line in lines {
            writeln!(encoder, "{}", line).unwrap();
        }
        encoder.finish().unwrap();
        file
    }

    #[test]
    fn test_load_problems() {
        let file = write_archive(&[problem_line("t/0"), problem_line("t/1")]);
        let problems = ProblemStore::new(file.path()).load().unwrap();

        assert_eq!(problems.len(), 2);
        assert_eq!(problems["t/0"].entry_point, "add");
    }

    #[test]
    fn test_load_is_idempotent() {
        let file = write_archive(&[problem_line("t/0")]);
        let store = ProblemStore::new(file.path());

        assert_eq!(store.load().unwrap(), store.load().unwrap());
    }

    #[test]
    fn test_blank_lines_tolerated() {
        let file = write_archive(&[problem_line("t/0"), String::new(), problem_line("t/1")]);
        let problems = ProblemStore::new(file.path()).load().unwrap();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_malformed_record_fails_load() {
        let file = write_archive(&[problem_line("t/0"), "{not json".to_string()]);
        let err = ProblemStore::new(file.path()).load().unwrap_err();
        assert!(matches!(err, EvalError::Load(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_duplicate_task_id_fails_load() {
        let file = write_archive(&[problem_line("t/0"), problem_line("t/0")]);
        let err = ProblemStore::new(file.path()).load().unwrap_err();
        assert!(err.to_string().contains("duplicate task_id"));
    }

    #[test]
    fn test_missing_archive_fails_load() {
        let err = ProblemStore::new("/nonexistent/problems.jsonl.gz")
            .load()
            .unwrap_err();
        assert!(matches!(err, EvalError::Load(_)));
    }
}
