//! Text and CSV rendering of extraction results and stored cards.

use cardex_core::{CardRecord, ExtractionResult};

/// Separator printed after each stored card.
pub const RECORD_SEPARATOR: &str = "------";

/// Output format for extraction results.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Output format for stored cards.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ListFormat {
    /// Plain text, one field per line
    Text,
    /// JSON array
    Json,
    /// CSV table
    Csv,
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_result_text(result)),
    }
}

/// One line per scalar field, one line per email and phone.
pub fn format_result_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Card Holder Name: {}\n",
        result.holder_name.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Designation: {}\n",
        result.designation.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Company Name: {}\n", result.company_name));
    output.push_str(&format!("Address: {}\n", result.address));
    for email in &result.emails {
        output.push_str(&format!("Email: {}\n", email));
    }
    for phone in &result.phones {
        output.push_str(&format!("Phone: {}\n", phone));
    }
    output.push_str(&format!("Websites: {}\n", result.websites.join(", ")));

    output
}

pub fn format_records(records: &[CardRecord], format: ListFormat) -> anyhow::Result<String> {
    match format {
        ListFormat::Text => Ok(records.iter().map(format_record_text).collect()),
        ListFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        ListFormat::Csv => format_records_csv(records),
    }
}

/// Print the id and every non-empty column of a stored card.
pub fn format_record_text(record: &CardRecord) -> String {
    let mut output = format!("ID: {}\n", record.id);

    let mut push = |label: &str, value: &Option<String>| {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            output.push_str(&format!("{}: {}\n", label, value));
        }
    };

    push("Company Name", &record.company_name);
    push("Card Holder Name", &record.card_holder_name);
    push("Designation", &record.designation);
    for mobile in record.phones() {
        push("Mobile", &Some(mobile));
    }
    for email in record.emails() {
        push("Email", &Some(email));
    }
    push("Website URL", &record.website_url);
    push("Area", &record.area);
    push("City", &record.city);
    push("State", &record.state);
    push("Pin Code", &record.pin_code);

    output.push_str(RECORD_SEPARATOR);
    output.push('\n');
    output
}

fn format_records_csv(records: &[CardRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "company_name",
        "card_holder_name",
        "designation",
        "mobile_numbers",
        "email_addresses",
        "website_url",
        "area",
        "city",
        "state",
        "pin_code",
    ])?;

    for record in records {
        wtr.write_record([
            record.id.to_string().as_str(),
            record.company_name.as_deref().unwrap_or(""),
            record.card_holder_name.as_deref().unwrap_or(""),
            record.designation.as_deref().unwrap_or(""),
            record.mobile_numbers.as_deref().unwrap_or(""),
            record.email_addresses.as_deref().unwrap_or(""),
            record.website_url.as_deref().unwrap_or(""),
            record.area.as_deref().unwrap_or(""),
            record.city.as_deref().unwrap_or(""),
            record.state.as_deref().unwrap_or(""),
            record.pin_code.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
