//! CLI application for business card OCR and contact storage.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, cards, config, extract};

/// Business card OCR - extract contact details from card images and keep them in a local database
#[derive(Parser)]
#[command(name = "cardex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Card database file (overrides config)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract contact details from a card image
    Extract(extract::ExtractArgs),

    /// Extract contact details from many card images
    Batch(batch::BatchArgs),

    /// List stored cards
    List(cards::ListArgs),

    /// Show a stored card
    Show(cards::ShowArgs),

    /// Overwrite the fields of a stored card
    Update(cards::UpdateArgs),

    /// Delete a stored card
    Delete(cards::DeleteArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let load_config = || commands::load_config(cli.config.as_deref(), cli.database.as_deref());

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, &load_config()?).await,
        Commands::Batch(args) => batch::run(args, &load_config()?).await,
        Commands::List(args) => cards::list(args, &load_config()?).await,
        Commands::Show(args) => cards::show(args, &load_config()?).await,
        Commands::Update(args) => cards::update(args, &load_config()?).await,
        Commands::Delete(args) => cards::delete(args, &load_config()?).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
