//! Phone number fragment detection.

use super::patterns::{DIGIT, PHONE_SHAPE};

/// Minimum number of digits a phone fragment must exceed.
const MIN_PHONE_DIGITS: usize = 7;

/// Count the digit characters in a fragment.
pub fn digit_count(text: &str) -> usize {
    DIGIT.find_iter(text).count()
}

/// A fragment is a phone number when it starts with a loose phone shape
/// and carries more than seven digits overall.
///
/// Only the start of the text is anchored; trailing content is allowed.
pub fn is_phone(text: &str) -> bool {
    PHONE_SHAPE.is_match(text) && digit_count(text) > MIN_PHONE_DIGITS
}
