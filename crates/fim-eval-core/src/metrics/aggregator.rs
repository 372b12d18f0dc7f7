//! Grouping verifier outcomes by problem identity

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::verify::CorrectnessResult;

/// Per-task attempt/success counts
///
/// Derived at estimation time; `c <= n` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of results for the task
    pub n: u64,
    /// Number of passing results
    pub c: u64,
}

/// Group results by `task_id`
///
/// Insertion order within a group carries no meaning downstream.
pub fn group_results(
    results: &[CorrectnessResult],
) -> HashMap<String, Vec<&CorrectnessResult>> {
    let mut grouped: HashMap<String, Vec<&CorrectnessResult>> = HashMap::new();
    for result in results {
        grouped.entry(result.task_id.clone()).or_default().push(result);
    }
    grouped
}

/// Derive per-task `(n, c)` counts
///
/// Problems with zero samples never appear here and are thereby excluded
/// from downstream means.
pub fn task_stats(results: &[CorrectnessResult]) -> HashMap<String, TaskStats> {
    group_results(results)
        .into_iter()
        .map(|(task_id, group)| {
            let n = group.len() as u64;
            let c = group.iter().filter(|r| r.passed).count() as u64;
            (task_id, TaskStats { n, c })
        })
        .collect()
}
