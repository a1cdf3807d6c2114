//! Rule-based business card parser.

use tracing::debug;

use crate::models::card::{ExtractionResult, Fragment};

use super::rules::{classify, find_websites, Collector};
use super::CardExtractor;

/// Ordered rule pipeline over recognized card fragments.
///
/// Stateless: the same fragments always produce the same result.
#[derive(Debug, Default, Clone)]
pub struct RuleCardParser;

impl RuleCardParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Route every fragment to each collection whose rule it matches.
    fn classify_fragments(&self, texts: &[&str]) -> Collected {
        let mut collected = Collected::default();

        for text in texts {
            for collector in classify(text) {
                let target = match collector {
                    Collector::Email => &mut collected.emails,
                    Collector::Phone => &mut collected.phones,
                    Collector::Address => &mut collected.address_lines,
                };
                target.push((*text).to_string());
            }
        }

        collected
    }

    /// Join every fragment not claimed by the leading lines or any collected field.
    ///
    /// The exclusion list keeps duplicates and is checked by exact string equality.
    fn company_name(&self, texts: &[&str], websites: &[String], collected: &Collected) -> String {
        let excluded: Vec<&str> = texts
            .iter()
            .take(2)
            .copied()
            .chain(collected.emails.iter().map(String::as_str))
            .chain(collected.phones.iter().map(String::as_str))
            .chain(websites.iter().map(String::as_str))
            .chain(collected.address_lines.iter().map(String::as_str))
            .collect();

        texts
            .iter()
            .filter(|text| !excluded.contains(*text))
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Default)]
struct Collected {
    emails: Vec<String>,
    phones: Vec<String>,
    address_lines: Vec<String>,
}

impl CardExtractor for RuleCardParser {
    fn extract(&self, fragments: &[Fragment]) -> ExtractionResult {
        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();

        let aggregate = texts.join(" ");
        let websites = find_websites(&aggregate);

        let collected = self.classify_fragments(&texts);
        let address = collected.address_lines.join(" ");
        let company_name = self.company_name(&texts, &websites, &collected);

        debug!(
            "Extracted card from {} fragments: {} emails, {} phones, {} websites, {} address lines",
            texts.len(),
            collected.emails.len(),
            collected.phones.len(),
            websites.len(),
            collected.address_lines.len()
        );

        ExtractionResult {
            holder_name: texts.first().map(|s| s.to_string()),
            designation: texts.get(1).map(|s| s.to_string()),
            company_name,
            address,
            emails: collected.emails,
            phones: collected.phones,
            websites,
            address_lines: collected.address_lines,
        }
    }
}
