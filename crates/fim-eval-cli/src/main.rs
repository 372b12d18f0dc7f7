//! FIM-Eval CLI
//!
//! Evaluates fill-in-middle completions against held-out unit tests and
//! prints overall accuracy plus unbiased pass@k per configured k.
//!
//! ```bash
//! fim-eval --fetch                      # download the problem archive
//! fim-eval --samples data/results.jsonl # score a sample stream
//! ```

mod args;
mod fetch;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use fim_eval_core::{
    CommandVerifier, EvalConfig, EvalReport, ExecutionDispatcher, JsonReport, ProblemStore,
    SampleStore, Verifier,
};

use args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.fetch {
        fetch::ensure_dataset(&cli.problems, &cli.dataset_url).await?;
    }

    // Input loading fails fast, before any verifier work is spawned.
    let problems = ProblemStore::new(&cli.problems)
        .load()
        .context("failed to load problem archive")?;
    let samples = SampleStore::new(&cli.samples)
        .load()
        .context("failed to load sample stream")?;

    if samples.is_empty() {
        bail!("sample stream {} contains no samples", cli.samples.display());
    }

    println!(
        "{}",
        format!(
            "Evaluating {} samples across {} problems...",
            samples.len(),
            problems.len()
        )
        .bold()
    );

    let verifier: Arc<dyn Verifier> = Arc::new(
        CommandVerifier::from_command_line(&cli.verifier_cmd)
            .context("--verifier-cmd must name an interpreter command")?,
    );

    let config = EvalConfig::default()
        .with_concurrency(cli.concurrency)
        .with_timeout(cli.timeout)
        .with_ks(cli.k.clone());

    let mut dispatcher = ExecutionDispatcher::new(config.clone());

    let bar = ProgressBar::new(samples.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static progress template"),
    );
    let callback_bar = bar.clone();
    dispatcher.set_progress_callback(Box::new(move |progress| {
        callback_bar.set_message(progress.task_id);
        callback_bar.inc(1);
    }));

    let results = dispatcher.run(&problems, &samples, verifier).await?;
    bar.finish_and_clear();

    let report = EvalReport::from_results(&results, &config.ks)?;
    report.print();

    if let Some(path) = &cli.output {
        JsonReport::new(report).save(path)?;
        println!(
            "{}",
            format!("Saved JSON report to {}", path.display()).dimmed()
        );
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` filters apply, `--verbose` forces debug
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
