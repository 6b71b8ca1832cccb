// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and delegates to Layer 2.
//
// Two commands are supported:
//   1. `batch`   — normalize a whole directory, print a report
//   2. `process` — normalize one file, print or save the result
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BatchArgs, Commands, ProcessArgs};
use std::path::Path;

use crate::domain::report::{BatchReport, Outcome};
use crate::infra::report_store;

#[derive(Parser, Debug)]
#[command(
    name = "llm_text_prep",
    version,
    about = "Clean, segment, stopword-filter and line-wrap text documents for LLM ingestion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Batch(args)   => run_batch(args),
            Commands::Process(args) => run_process(args),
        }
    }
}

/// Handles the `batch` subcommand.
/// Per-file failures are reported, not returned as an error.
fn run_batch(args: BatchArgs) -> Result<()> {
    use crate::application::batch_use_case::BatchUseCase;

    let use_case = BatchUseCase::new((&args).into())?;
    let report   = use_case.execute()?;

    if let Some(path) = &args.report {
        report_store::save_report(&report, Path::new(path))?;
    }

    if args.json {
        println!("{}", report_store::to_json(&report)?);
    } else {
        print_report(&report, &args.suffix, &args.extension);
    }
    Ok(())
}

/// Handles the `process` subcommand.
fn run_process(args: ProcessArgs) -> Result<()> {
    use crate::application::process_use_case::ProcessUseCase;

    let save     = args.output.is_some();
    let use_case = ProcessUseCase::new(args.into())?;
    let result   = use_case.execute()?;

    if !save {
        println!("{result}");
    }
    Ok(())
}

fn print_report(report: &BatchReport, suffix: &str, extension: &str) {
    for (name, outcome) in report.iter() {
        match outcome {
            Outcome::Success => {
                let stem = Path::new(name)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or(name);
                println!("OK    {name} -> {stem}{suffix}.{extension}");
            }
            Outcome::Failure(reason) => println!("FAIL  {name}: {reason}"),
        }
    }
    println!(
        "\n{} files: {} succeeded, {} failed",
        report.len(),
        report.success_count(),
        report.failure_count()
    );
}
