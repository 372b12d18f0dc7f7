//! Input stores: problem archive and sample stream loading

mod problems;
mod samples;

pub use problems::{Problem, ProblemStore};
pub use samples::{Sample, SampleStore};
