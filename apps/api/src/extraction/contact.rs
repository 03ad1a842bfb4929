use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"\b[\w.\-]+@[\w.\-]+\.\w{2,4}\b").unwrap();
    // `\s` also matches newlines, so a match can run into the next line.
    static ref PHONE_RE: Regex = Regex::new(r"\+?\d[\d\s\-]{8,}").unwrap();
}

/// First non-blank line, trimmed. No check that it actually looks like a name.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_first_non_blank_line() {
        assert_eq!(
            extract_name("\n   \n  Jane Doe  \nEngineer").as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_name_heuristic_accepts_any_first_line() {
        assert_eq!(
            extract_name("CURRICULUM VITAE\nJane Doe").as_deref(),
            Some("CURRICULUM VITAE")
        );
    }

    #[test]
    fn test_name_missing_for_blank_text() {
        assert_eq!(extract_name(""), None);
        assert_eq!(extract_name(" \n\t\n"), None);
    }

    #[test]
    fn test_email_found_in_sentence() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com").as_deref(),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn test_first_email_wins_and_case_is_kept() {
        let text = "Work: John_Smith-1@Corp.Example.org\nHome: js@home.net";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("John_Smith-1@Corp.Example.org")
        );
    }

    #[test]
    fn test_email_missing() {
        assert_eq!(extract_email("no address here @ all"), None);
    }

    #[test]
    fn test_phone_with_country_code() {
        let phone = extract_phone("Phone: +1 555-123-4567").unwrap();
        assert!(phone.starts_with("+1"));
        assert!(phone.len() >= 9);
        assert_eq!(phone, "+1 555-123-4567");
    }

    #[test]
    fn test_phone_trailing_whitespace_is_trimmed() {
        assert_eq!(
            extract_phone("call 0800 123 456   \nthanks").as_deref(),
            Some("0800 123 456")
        );
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        assert_eq!(extract_phone("Graduated 2020, GPA 3.9"), None);
    }

    #[test]
    fn test_phone_greedy_run_spans_adjacent_numbers() {
        assert_eq!(
            extract_phone("Tel 555 1234 5678 9012").as_deref(),
            Some("555 1234 5678 9012")
        );
    }
}
