//! Advisory domain-URL validation
//!
//! Validation here is informational: an invalid domain is stored anyway
//! and surfaced to the user as a warning, never rejected.

use once_cell::sync::Lazy;
use regex::Regex;

static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[a-zA-Z0-9-]+(\.[a-zA-Z]{2,})+$")
        .expect("domain pattern is a valid regex")
});

/// Check whether a string looks like a domain URL
///
/// Accepts bare domains (`example.com`), `www.` forms, and http(s)
/// schemes. Paths and query strings do not match.
#[must_use]
pub fn is_valid_domain(url: &str) -> bool {
    DOMAIN_PATTERN.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_forms() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("www.example.com"));
        assert!(is_valid_domain("http://example.com"));
        assert!(is_valid_domain("https://www.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid_domain("example"));
        assert!(!is_valid_domain("not a domain"));
        assert!(!is_valid_domain("https://example.com/path"));
        assert!(!is_valid_domain(""));
    }
}
