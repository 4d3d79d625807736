//! Contact matchers — name, email, and phone. Each is a pure function
//! of the normalized text that returns `None` when nothing qualifies.

use std::sync::OnceLock;

use regex::Regex;

/// Lines scanned from the top of the document when looking for a name.
const NAME_SCAN_LINES: usize = 10;

fn name_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern compiles"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern compiles")
    })
}

/// Picks the first of the opening lines that reads like a person's
/// name: letters and spaces only, two to four words. Lines with
/// digits or punctuation (addresses, emails) and one-word headers
/// never qualify.
pub fn name(text: &str) -> Option<String> {
    text.lines().take(NAME_SCAN_LINES).find_map(|line| {
        let line = line.trim();
        let words = line.split_whitespace().count();
        ((2..=4).contains(&words) && name_line_re().is_match(line)).then(|| line.to_string())
    })
}

/// First `local@domain.tld` match anywhere in the text.
pub fn email(text: &str) -> Option<String> {
    email_re().find(text).map(|m| m.as_str().to_string())
}

/// First North-American-style phone match: 3-3-4 digit groups with
/// optional parentheses and `-`/`.`/space separators.
pub fn phone(text: &str) -> Option<String> {
    phone_re().find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_picks_first_qualifying_line() {
        let text = "Resume\nJohn Michael Doe\n123 Main St";
        assert_eq!(name(text), Some("John Michael Doe".to_string()));
    }

    #[test]
    fn test_name_rejects_single_word_headers() {
        assert_eq!(name("Resume\nCurriculum\nVitae"), None);
    }

    #[test]
    fn test_name_rejects_lines_with_digits() {
        assert_eq!(name("John Doe 3rd\n42 Wallaby Way Sydney ACT"), None);
    }

    #[test]
    fn test_name_rejects_five_word_lines() {
        assert_eq!(name("John Jacob Jingleheimer Schmidt Junior"), None);
    }

    #[test]
    fn test_name_accepts_two_and_four_word_names() {
        assert_eq!(name("Jane Doe"), Some("Jane Doe".to_string()));
        assert_eq!(
            name("Mary Beth van Dyke"),
            Some("Mary Beth van Dyke".to_string())
        );
    }

    #[test]
    fn test_name_only_scans_first_ten_lines() {
        let mut lines = vec!["1"; 10];
        lines.push("John Michael Doe");
        assert_eq!(name(&lines.join("\n")), None);
    }

    #[test]
    fn test_email_extracts_exact_address() {
        let text = "Contact: jane.doe@example.com or by phone";
        assert_eq!(email(text), Some("jane.doe@example.com".to_string()));
    }

    #[test]
    fn test_email_absent_yields_none() {
        assert_eq!(email("no contact details here"), None);
    }

    #[test]
    fn test_phone_accepts_common_formats() {
        for raw in ["(123) 456-7890", "123-456-7890", "123.456.7890", "123 456 7890"] {
            let text = format!("Call me at {raw} today");
            assert_eq!(phone(&text), Some(raw.to_string()), "format {raw}");
        }
    }

    #[test]
    fn test_phone_accepts_bare_digit_run() {
        assert_eq!(phone("1234567890"), Some("1234567890".to_string()));
    }

    #[test]
    fn test_phone_absent_yields_none() {
        assert_eq!(phone("call me maybe"), None);
    }
}
