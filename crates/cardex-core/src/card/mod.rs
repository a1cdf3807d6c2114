//! Business card field extraction module.

mod parser;
pub mod rules;

pub use parser::RuleCardParser;

use crate::models::card::{ExtractionResult, Fragment};

/// Trait for business card field extractors.
pub trait CardExtractor {
    /// Extract contact fields from fragments in detection order.
    fn extract(&self, fragments: &[Fragment]) -> ExtractionResult;

    /// Extract contact fields from bare text lines in detection order.
    fn extract_from_lines(&self, lines: &[&str]) -> ExtractionResult {
        let fragments: Vec<Fragment> = lines.iter().map(|line| Fragment::new(*line)).collect();
        self.extract(&fragments)
    }
}
