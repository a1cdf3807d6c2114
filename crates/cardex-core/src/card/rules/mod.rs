//! Rule-based field classifiers for business card text.
//!
//! Websites are found in the aggregate card text. Every other rule is a
//! pure predicate over a single fragment's text, listed in
//! [`FRAGMENT_RULES`] together with the collection it feeds.

use tracing::trace;

pub mod address;
pub mod email;
pub mod patterns;
pub mod phone;
pub mod website;

pub use address::{ends_with_pin_code, is_numbered_address_line};
pub use email::is_email;
pub use patterns::*;
pub use phone::{digit_count, is_phone};
pub use website::{find_websites, WebsiteExtractor};

/// Trait for extractors that scan free text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Collection a matching fragment is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collector {
    Email,
    Phone,
    Address,
}

/// A per-fragment classification rule.
#[derive(Debug, Clone, Copy)]
pub struct FragmentRule {
    /// Short rule name, used in logs.
    pub name: &'static str,
    /// Predicate over the fragment text.
    pub matches: fn(&str) -> bool,
    /// Where matching fragments go.
    pub collector: Collector,
}

/// Per-fragment rules in evaluation order.
///
/// Rules are independent: a fragment is appended once for every rule it
/// satisfies, so a bare phone number ending in six or seven digits is
/// collected both as a phone and as an address line.
pub const FRAGMENT_RULES: [FragmentRule; 4] = [
    FragmentRule {
        name: "email",
        matches: is_email,
        collector: Collector::Email,
    },
    FragmentRule {
        name: "phone",
        matches: is_phone,
        collector: Collector::Phone,
    },
    FragmentRule {
        name: "numbered-address-line",
        matches: is_numbered_address_line,
        collector: Collector::Address,
    },
    FragmentRule {
        name: "pin-code-line",
        matches: ends_with_pin_code,
        collector: Collector::Address,
    },
];

/// Collectors a single text is routed to, one entry per matching rule.
pub fn classify(text: &str) -> Vec<Collector> {
    FRAGMENT_RULES
        .iter()
        .filter(|rule| (rule.matches)(text))
        .inspect(|rule| trace!("Fragment {:?} matched rule {}", text, rule.name))
        .map(|rule| rule.collector)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_text() {
        assert!(classify("Acme Corp").is_empty());
    }

    #[test]
    fn test_classify_address_lines() {
        assert_eq!(classify("12 Park Road, Chennai 600001"), vec![Collector::Address]);
        assert_eq!(classify("7 Hill St;"), vec![Collector::Address]);
    }

    #[test]
    fn test_classify_phone_with_pin_code_tail() {
        assert_eq!(
            classify("9876543210"),
            vec![Collector::Phone, Collector::Address]
        );
    }
}
