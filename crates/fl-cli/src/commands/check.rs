//! `fl check` command: analyze Python files for invalid column usage

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fl_core::CheckError;
use serde::Serialize;

use crate::cli::{CheckArgs, CheckOutput, GlobalArgs};
use crate::commands::common::ExitCode;
use crate::config::Config;
use crate::discover;
use crate::format;

/// Per-file entry in the JSON envelope
#[derive(Debug, Serialize)]
struct FileResults {
    file: String,
    diagnostics: Vec<fl_core::Diagnostic>,
}

/// Envelope written for `--output json`
#[derive(Debug, Serialize)]
struct CheckResults {
    timestamp: DateTime<Utc>,
    elapsed_secs: f64,
    files_checked: usize,
    failed_files: usize,
    diagnostic_count: usize,
    results: Vec<FileResults>,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let start = Instant::now();
    let project_dir = Path::new(&global.project_dir);

    let config = Config::load(project_dir, global.config.as_deref().map(Path::new))
        .context("Failed to load configuration")?;

    let mut exclude = config.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());
    let recursive = !(args.non_recursive || config.non_recursive);

    let files = discover::collect_python_files(project_dir, &args.paths, &exclude, recursive)
        .context("Failed to collect Python files")?;

    if global.verbose {
        eprintln!("[verbose] checking {} files", files.len());
    }

    // One synchronous checker per file; files run concurrently and
    // results are reported in input order
    let tasks: Vec<_> = files
        .into_iter()
        .map(|path| {
            tokio::task::spawn_blocking(move || {
                let outcome = std::fs::read_to_string(&path)
                    .map_err(|source| CheckError::Io {
                        path: path.display().to_string(),
                        source,
                    })
                    .and_then(|source| fl_core::check(&source).map(|result| (source, result)));
                (path, outcome)
            })
        })
        .collect();

    let outcomes = futures::future::join_all(tasks).await;

    let mut files_checked = 0usize;
    let mut failed_files = 0usize;
    let mut diagnostic_count = 0usize;
    let mut json_results: Vec<FileResults> = Vec::new();

    for joined in outcomes {
        let (path, outcome) = joined.context("Checker task panicked")?;
        match outcome {
            Err(err) => {
                failed_files += 1;
                eprintln!("{}: {}", path.display(), err);
            }
            Ok((source, result)) => {
                files_checked += 1;
                diagnostic_count += result.diagnostics.len();
                let file = path.display().to_string();
                match args.output {
                    CheckOutput::Json => json_results.push(FileResults {
                        file,
                        diagnostics: result.diagnostics,
                    }),
                    CheckOutput::Plain => {
                        for diag in &result.diagnostics {
                            println!("{}", format::format_plain(diag, &file));
                        }
                    }
                    CheckOutput::Rich => {
                        for diag in &result.diagnostics {
                            println!(
                                "{}\n",
                                format::format_rich(diag, &file, &source, !args.no_color)
                            );
                        }
                    }
                }
            }
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    if args.output == CheckOutput::Json {
        let envelope = CheckResults {
            timestamp: Utc::now(),
            elapsed_secs: elapsed,
            files_checked,
            failed_files,
            diagnostic_count,
            results: json_results,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&envelope).context("Failed to serialize results")?
        );
    } else if failed_files > 0 {
        println!(
            "Checked {files_checked} files in {elapsed:.2}s, found {diagnostic_count} issues, {failed_files} files failed"
        );
    } else if diagnostic_count > 0 {
        println!("Checked {files_checked} files in {elapsed:.2}s, found {diagnostic_count} issues");
    } else {
        println!("Checked {files_checked} files in {elapsed:.2}s, no issues found");
    }

    if diagnostic_count > 0 || failed_files > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}
