//! Result aggregation and pass@k estimation

mod aggregator;
mod pass_at_k;

pub use aggregator::{group_results, task_stats, TaskStats};
pub use pass_at_k::{estimate, estimate_all, PassAtK};
