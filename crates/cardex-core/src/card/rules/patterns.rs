//! Common regex patterns for business card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Website: "www", optional single whitespace, then host characters ending in "com"
    pub static ref WEBSITE: Regex = Regex::new(
        r"[wW]{3}\s?[a-zA-Z0-9.-]+com"
    ).unwrap();

    // Loose phone shape, anchored at the start only
    pub static ref PHONE_SHAPE: Regex = Regex::new(
        r"^\+?\d{1,3}[-.\s]?(?:\d{1,4}[-.\s]?){2,3}\d{1,4}"
    ).unwrap();

    // Postal code of 6 or 7 digits closing the line, a single trailing newline allowed
    pub static ref PIN_CODE_SUFFIX: Regex = Regex::new(
        r"\d{6,7}\n?\z"
    ).unwrap();

    pub static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
}
