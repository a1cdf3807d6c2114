//! Extract command - read contact details from a single card image.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardex_core::CardexConfig;

use super::display::{format_result, OutputFormat};
use super::open_session;

/// Supported upload extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Card image (PNG or JPEG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Save the extracted card to the database
    #[arg(long)]
    save: bool,
}

pub async fn run(args: ExtractArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if !is_supported_image(&args.input) {
        anyhow::bail!(
            "Unsupported file format: {} (expected one of {})",
            args.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        );
    }

    info!("Processing card: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

    pb.set_message("Loading OCR models...");
    let session = open_session(config, args.model_dir.as_deref())?;

    pb.set_message("Recognizing text...");
    let bytes = fs::read(&args.input)?;
    let upload = session.upload(&bytes)?;

    pb.finish_and_clear();

    println!("{}", format_result(&upload.result, args.format)?);

    if args.save {
        let id = session.save(&upload)?;
        println!("{} Saved card with ID {}", style("✓").green(), id);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Check the file extension against the supported upload formats.
pub fn is_supported_image(path: &std::path::Path) -> bool {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    IMAGE_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("card.png")));
        assert!(is_supported_image(Path::new("scans/CARD.JPG")));
        assert!(is_supported_image(Path::new("card.jpeg")));
        assert!(!is_supported_image(Path::new("card.pdf")));
        assert!(!is_supported_image(Path::new("card")));
    }
}
