//! Email fragment detection.

/// A fragment is an email when it contains both `@` and `.`.
///
/// This is a containment check on the whole fragment, not an address
/// parser, so OCR noise around the address is kept.
pub fn is_email(text: &str) -> bool {
    text.contains('@') && text.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("john@acme.com"));
        assert!(is_email("Email: sales@acme.co.in"));
        assert!(is_email("a.b@c"));
    }

    #[test]
    fn test_is_email_requires_both_markers() {
        assert!(!is_email("john@acme"));
        assert!(!is_email("www.acme.com"));
        assert!(!is_email(""));
    }
}
