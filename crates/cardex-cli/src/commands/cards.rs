//! Stored card commands - list, show, update and delete.

use clap::Args;
use console::style;
use tracing::info;

use cardex_core::{CardUpdate, CardexConfig};

use super::display::{format_record_text, format_records, ListFormat};
use super::open_store;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ListFormat,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Card ID
    id: i64,
}

/// Arguments for the update command.
///
/// Every editable column is overwritten; omitted fields are cleared.
#[derive(Args)]
pub struct UpdateArgs {
    /// Card ID
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    id: i64,

    #[arg(long)]
    company_name: Option<String>,

    #[arg(long)]
    card_holder_name: Option<String>,

    #[arg(long)]
    designation: Option<String>,

    /// Mobile numbers (comma-separated)
    #[arg(long)]
    mobile_numbers: Option<String>,

    /// Email addresses (comma-separated)
    #[arg(long)]
    email_addresses: Option<String>,

    #[arg(long)]
    website_url: Option<String>,

    #[arg(long)]
    area: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    pin_code: Option<String>,
}

impl From<UpdateArgs> for CardUpdate {
    fn from(args: UpdateArgs) -> Self {
        Self {
            company_name: args.company_name,
            card_holder_name: args.card_holder_name,
            designation: args.designation,
            mobile_numbers: args.mobile_numbers,
            email_addresses: args.email_addresses,
            website_url: args.website_url,
            area: args.area,
            city: args.city,
            state: args.state,
            pin_code: args.pin_code,
        }
    }
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Card ID
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    id: i64,
}

pub async fn list(args: ListArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let records = store.fetch_all()?;

    if records.is_empty() && matches!(args.format, ListFormat::Text) {
        println!("No cards stored.");
        return Ok(());
    }

    let output = format_records(&records, args.format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub async fn show(args: ShowArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let store = open_store(config)?;

    match store.get(args.id)? {
        Some(record) => print!("{}", format_record_text(&record)),
        None => anyhow::bail!("No card with ID {}", args.id),
    }

    Ok(())
}

pub async fn update(args: UpdateArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let id = args.id;

    store.update(id, &CardUpdate::from(args))?;
    info!("Updated card {}", id);

    println!("{} Card {} updated", style("✓").green(), id);
    Ok(())
}

pub async fn delete(args: DeleteArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let store = open_store(config)?;

    store.delete(args.id)?;
    info!("Deleted card {}", args.id);

    println!("{} Card {} deleted", style("✓").green(), args.id);
    Ok(())
}
