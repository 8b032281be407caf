//! Field validation for the public contact form.

use regex::Regex;

/// Validates an email address against the contact form's pattern.
///
/// Accepts `local@domain.tld`: at least one non-whitespace, non-`@`
/// character before the `@`, and a dot-separated non-empty domain after
/// it. Anything with embedded whitespace, a missing local part, or a
/// domain without a dot is rejected.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    if !email_regex.is_match(email) {
        tracing::warn!("Rejected malformed email: {:?}", email);
        return false;
    }

    true
}

/// True when the optional form field is present and non-empty after
/// trimming. Whitespace-only values count as missing.
pub fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}
