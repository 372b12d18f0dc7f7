//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Default problem archive location
pub const DEFAULT_PROBLEMS_FILE: &str = "data/HumanEval-SingleLineInfilling.jsonl.gz";

/// Default sample stream location
pub const DEFAULT_SAMPLES_FILE: &str = "data/results.jsonl";

/// Default source URL for the problem archive
pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/openai/human-eval-infilling/88062ff9859c875d04db115b698ed4b0f0395170/data/HumanEval-SingleLineInfilling.jsonl.gz";

#[derive(Parser)]
#[command(name = "fim-eval")]
#[command(about = "Evaluate fill-in-middle completions and report pass@k")]
#[command(
    long_about = r#"Evaluate fill-in-middle completions against held-out unit tests.

USAGE:
  fim-eval                                 # Evaluate data/results.jsonl
  fim-eval --samples out.jsonl -j 8        # Custom sample stream, 8 workers
  fim-eval --fetch                         # Download the problem archive first
  fim-eval --verifier-cmd "firejail python3"   # Sandboxed interpreter

Prints one line per metric:
  Accuracy: <float> = <passed> / <total>
  Pass@<k>: <float>"#
)]
#[command(version)]
pub struct Cli {
    /// Path to the gzip problem archive
    #[arg(long, default_value = DEFAULT_PROBLEMS_FILE)]
    pub problems: PathBuf,

    /// Path to the line-delimited sample stream
    #[arg(long, default_value = DEFAULT_SAMPLES_FILE)]
    pub samples: PathBuf,

    /// Maximum concurrent verifier invocations
    #[arg(long, short = 'j', default_value_t = 16)]
    pub concurrency: usize,

    /// Hard timeout per verifier invocation, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// k values to report, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [1, 3, 5])]
    pub k: Vec<u64>,

    /// Interpreter command candidate programs are piped to
    ///
    /// The command receives the assembled program on stdin and signals
    /// pass/fail through its exit status. Wrap it in a sandbox of your
    /// choosing; the harness adds no isolation of its own.
    #[arg(long, default_value = "python3")]
    pub verifier_cmd: String,

    /// Download the problem archive if it is missing
    #[arg(long)]
    pub fetch: bool,

    /// Source URL for --fetch
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub dataset_url: String,

    /// Write a machine-readable JSON report to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fim-eval"]);
        assert_eq!(cli.concurrency, 16);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.k, vec![1, 3, 5]);
        assert_eq!(cli.verifier_cmd, "python3");
        assert!(!cli.fetch);
    }

    #[test]
    fn test_k_list_parsing() {
        let cli = Cli::parse_from(["fim-eval", "--k", "1,10,100"]);
        assert_eq!(cli.k, vec![1, 10, 100]);
    }

    #[test]
    fn test_short_concurrency_flag() {
        let cli = Cli::parse_from(["fim-eval", "-j", "4"]);
        assert_eq!(cli.concurrency, 4);
    }
}
