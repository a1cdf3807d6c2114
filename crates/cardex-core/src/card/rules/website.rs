//! Website detection over the aggregate card text.

use super::patterns::WEBSITE;
use super::FieldExtractor;

/// Website extractor.
///
/// Runs over the space-joined text of all fragments, so a host split by
/// OCR into adjacent fragments can still be captured when the join lands
/// on an allowed whitespace position.
#[derive(Debug, Default)]
pub struct WebsiteExtractor;

impl WebsiteExtractor {
    /// Create a new website extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for WebsiteExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        WEBSITE.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        WEBSITE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Find all non-overlapping website matches in order of appearance.
pub fn find_websites(text: &str) -> Vec<String> {
    WebsiteExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_websites() {
        assert_eq!(
            find_websites("Acme www.acme.com john@acme.com"),
            vec!["www.acme.com".to_string()]
        );
    }

    #[test]
    fn test_find_websites_case_and_space() {
        assert_eq!(
            find_websites("WWW.Globex.com and www globex-labs.com"),
            vec!["WWW.Globex.com".to_string(), "www globex-labs.com".to_string()]
        );
    }

    #[test]
    fn test_find_websites_split_fragment() {
        // "www" and the host came back as two fragments.
        assert_eq!(
            find_websites("John Doe www acme.com"),
            vec!["www acme.com".to_string()]
        );
    }

    #[test]
    fn test_find_websites_requires_com() {
        assert!(find_websites("www.acme.org").is_empty());
        assert!(WebsiteExtractor::new().extract("no site here").is_none());
    }
}
