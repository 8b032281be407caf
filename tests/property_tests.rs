/// Property-based tests using proptest
/// Tests invariants of contact form validation and status parsing
use nextgen_leads_api::models::LeadStatus;
use nextgen_leads_api::validation::{has_value, is_valid_email};
use proptest::prelude::*;

// Property: email validation should never panic
proptest! {
    #[test]
    fn email_validation_never_panics(email in "\\PC*") {
        let _ = is_valid_email(&email);
    }

    #[test]
    fn well_formed_emails_accepted(
        local in "[a-z0-9.+_-]{1,16}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email), "should accept {}", email);
    }

    #[test]
    fn emails_without_at_rejected(text in "[a-z0-9.]{0,30}") {
        prop_assert!(!is_valid_email(&text));
    }

    #[test]
    fn emails_without_domain_dot_rejected(
        local in "[a-z]{1,10}",
        domain in "[a-z]{1,10}"
    ) {
        let email = format!("{}@{}", local, domain);
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn emails_with_embedded_whitespace_rejected(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        tld in "[a-z]{2,4}",
        ws in prop::sample::select(vec![" ", "\t", "\n"])
    ) {
        let email = format!("{}{}@{}.{}", local, ws, domain, tld);
        prop_assert!(!is_valid_email(&email));
    }
}

// Property: status parsing accepts exactly the five wire forms
proptest! {
    #[test]
    fn status_parse_round_trips(status in prop::sample::select(LeadStatus::ALL.to_vec())) {
        prop_assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
    }

    #[test]
    fn unknown_status_strings_rejected(value in "[a-z]{1,12}") {
        prop_assume!(LeadStatus::ALL.iter().all(|s| s.as_str() != value));
        prop_assert_eq!(LeadStatus::parse(&value), None);
    }

    #[test]
    fn status_with_surrounding_noise_rejected(
        status in prop::sample::select(LeadStatus::ALL.to_vec()),
        noise in prop::sample::select(vec![" ", "x", "."])
    ) {
        let padded = format!("{}{}", status.as_str(), noise);
        prop_assert_eq!(LeadStatus::parse(&padded), None);
    }
}

// Property: required-field check treats whitespace-only as missing
proptest! {
    #[test]
    fn whitespace_only_fields_never_count(ws in "[ \\t\\n]{0,10}") {
        prop_assert!(!has_value(&Some(ws)));
    }

    #[test]
    fn fields_with_content_always_count(
        pad_left in "[ \\t]{0,4}",
        content in "[a-zA-Z0-9]{1,20}",
        pad_right in "[ \\t]{0,4}"
    ) {
        let value = format!("{}{}{}", pad_left, content, pad_right);
        prop_assert!(has_value(&Some(value)));
    }
}
