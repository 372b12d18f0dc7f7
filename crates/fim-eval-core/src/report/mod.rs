//! Evaluation summary reporting

mod json;

pub use json::JsonReport;

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};
use crate::metrics::{task_stats, PassAtK, TaskStats};
use crate::verify::CorrectnessResult;

/// Summary of an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Total results (equals total submitted samples)
    pub total: usize,

    /// Results with `passed = true`
    pub passed: usize,

    /// passed / total
    pub accuracy: f64,

    /// Mean unbiased pass@k per configured k
    pub pass_at_k: Vec<PassAtK>,

    /// Per-task attempt/success counts
    pub tasks: BTreeMap<String, TaskStats>,
}

impl EvalReport {
    /// Build a report from a completed batch
    ///
    /// Fails with [`EvalError::EmptyResultSet`] on zero results rather than
    /// producing a misleading ratio.
    pub fn from_results(results: &[CorrectnessResult], ks: &[u64]) -> EvalResult<Self> {
        if results.is_empty() {
            return Err(EvalError::EmptyResultSet);
        }

        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let tasks: BTreeMap<String, TaskStats> = task_stats(results).into_iter().collect();
        let pass_at_k = ks
            .iter()
            .map(|&k| PassAtK::compute(tasks.values(), k))
            .collect();

        Ok(Self {
            total,
            passed,
            accuracy: passed as f64 / total as f64,
            pass_at_k,
            tasks,
        })
    }

    /// Write the summary lines to any sink
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Accuracy: {} = {} / {}",
            self.accuracy, self.passed, self.total
        )?;
        for pass_at_k in &self.pass_at_k {
            writeln!(writer, "Pass@{}: {}", pass_at_k.k, pass_at_k.estimate)?;
        }
        Ok(())
    }

    /// Render the summary lines as a string
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        // Writing to a Vec cannot fail
        self.write_to(&mut buffer).expect("in-memory write");
        String::from_utf8(buffer).expect("report is valid UTF-8")
    }

    /// Print the summary lines to stdout
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(task_id: &str, passed: bool) -> CorrectnessResult {
        if passed {
            CorrectnessResult::pass(task_id, None, "passed")
        } else {
            CorrectnessResult::fail(task_id, None, "failed")
        }
    }

    #[test]
    fn test_report_lines() {
        // two tasks, one passing and one failing result each
        let results = vec![
            result("t/0", true),
            result("t/0", false),
            result("t/1", true),
            result("t/1", false),
        ];

        let report = EvalReport::from_results(&results, &[1]).unwrap();
        assert_eq!(report.render(), "Accuracy: 0.5 = 2 / 4\nPass@1: 0.5\n");
    }

    #[test]
    fn test_multiple_k_values() {
        let results = vec![
            result("t/0", true),
            result("t/0", true),
            result("t/0", false),
            result("t/0", false),
            result("t/0", false),
        ];

        let report = EvalReport::from_results(&results, &[1, 3, 5]).unwrap();
        assert_eq!(report.pass_at_k.len(), 3);
        // n=5, c=2: k=1 -> 1 - 3/5 = 0.4; k=5 -> failures 3 < 5 -> 1.0
        assert!((report.pass_at_k[0].estimate - 0.4).abs() < 1e-9);
        assert_eq!(report.pass_at_k[2].estimate, 1.0);
    }

    #[test]
    fn test_empty_result_set_is_an_error() {
        let err = EvalReport::from_results(&[], &[1]).unwrap_err();
        assert!(matches!(err, EvalError::EmptyResultSet));
    }
}
