//! Batch command - extract contact details from many card images.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use cardex_core::{CardSession, CardexConfig, ExtractionResult, OcrEngine};

use super::extract::is_supported_image;
use super::open_session;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching card images
    #[arg(required = true)]
    input: String,

    /// Save every extracted card to the database
    #[arg(long)]
    save: bool,

    /// Write a summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    card_id: Option<i64>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported_image(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let session = open_session(config, args.model_dir.as_deref())?;

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cards")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = process_single_file(&path, &session, args.save);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok((result, card_id)) => results.push(ProcessResult {
                path,
                result: Some(result),
                card_id,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push(ProcessResult {
                    path,
                    result: None,
                    card_id: None,
                    error: Some(error_msg),
                    processing_time_ms,
                });
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} cards in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file<E: OcrEngine>(
    path: &Path,
    session: &CardSession<E>,
    save: bool,
) -> anyhow::Result<(ExtractionResult, Option<i64>)> {
    let bytes = fs::read(path)?;
    let upload = session.upload(&bytes)?;

    let card_id = if save {
        Some(session.save(&upload)?)
    } else {
        None
    };

    Ok((upload.result, card_id))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "card_id",
        "card_holder_name",
        "designation",
        "company_name",
        "emails",
        "phones",
        "websites",
        "address",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let card_id = result.card_id.map(|id| id.to_string()).unwrap_or_default();
        let time_ms = result.processing_time_ms.to_string();

        if let Some(card) = &result.result {
            wtr.write_record([
                filename,
                "success",
                &card_id,
                card.holder_name.as_deref().unwrap_or(""),
                card.designation.as_deref().unwrap_or(""),
                &card.company_name,
                &card.emails.join("; "),
                &card.phones.join("; "),
                &card.websites.join("; "),
                &card.address,
                &time_ms,
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &time_ms,
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
