//! Address line detection.

use super::patterns::PIN_CODE_SUFFIX;

/// A numbered street line: starts with an ASCII digit and ends with `,` or `;`.
pub fn is_numbered_address_line(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit()) && (text.ends_with(',') || text.ends_with(';'))
}

/// A line closed by a six or seven digit postal code.
pub fn ends_with_pin_code(text: &str) -> bool {
    PIN_CODE_SUFFIX.is_match(text)
}
