/// Unit tests for contact form validation and lead status parsing
use nextgen_leads_api::models::LeadStatus;
use nextgen_leads_api::validation::{has_value, is_valid_email};

#[cfg(test)]
mod email_validation_tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_invalid_emails_basic() {
        // Missing @ or dot in the domain
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@examplecom"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_emails_whitespace() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@exam ple.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com "));
    }

    #[test]
    fn test_invalid_emails_misplaced_at() {
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@name@example.com"));
        assert!(!is_valid_email("user@.com@"));
    }
}

#[cfg(test)]
mod status_parsing_tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(LeadStatus::parse("new"), Some(LeadStatus::New));
        assert_eq!(LeadStatus::parse("contacted"), Some(LeadStatus::Contacted));
        assert_eq!(LeadStatus::parse("qualified"), Some(LeadStatus::Qualified));
        assert_eq!(LeadStatus::parse("converted"), Some(LeadStatus::Converted));
        assert_eq!(LeadStatus::parse("lost"), Some(LeadStatus::Lost));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(LeadStatus::parse("New"), None);
        assert_eq!(LeadStatus::parse("CONTACTED"), None);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(LeadStatus::parse("archived"), None);
        assert_eq!(LeadStatus::parse(""), None);
        assert_eq!(LeadStatus::parse(" new"), None);
        assert_eq!(LeadStatus::parse("new "), None);
    }

    #[test]
    fn test_round_trip_through_wire_form() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(LeadStatus::Qualified.to_string(), "qualified");
        assert_eq!(LeadStatus::New.to_string(), "new");
    }
}

#[cfg(test)]
mod required_field_tests {
    use super::*;

    #[test]
    fn test_present_values() {
        assert!(has_value(&Some("Ada".to_string())));
        assert!(has_value(&Some("  padded  ".to_string())));
    }

    #[test]
    fn test_missing_and_blank_values() {
        assert!(!has_value(&None));
        assert!(!has_value(&Some(String::new())));
        assert!(!has_value(&Some("   ".to_string())));
        assert!(!has_value(&Some("\t\n".to_string())));
    }
}
