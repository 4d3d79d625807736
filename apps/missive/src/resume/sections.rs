//! Section matchers — skills and experience blocks plus their
//! whole-text fallbacks.
//!
//! A section opens at a line that begins with one of the known heading
//! phrases, optionally followed by a colon and inline content. It runs
//! until the next heading-like line (one or two capitalized words
//! ending in a colon) or the end of the text. The boundary shape is a
//! deliberate heuristic; arbitrary resumes can under- or over-capture.

use std::sync::OnceLock;

use regex::Regex;

const SKILL_HEADINGS: &[&str] = &["Skills", "Technical Skills", "Key Skills", "Core Competencies"];

const EXPERIENCE_HEADINGS: &[&str] = &[
    "Experience",
    "Work Experience",
    "Professional Experience",
    "Employment History",
];

/// Keywords scanned for when no skills section exists. Output keeps
/// this order.
const SKILL_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "SQL",
    "Project Management",
    "Data Analysis",
    "Communication",
    "Leadership",
    "JavaScript",
    "Cloud Computing",
    "Machine Learning",
];

const EXPERIENCE_WORD_LIMIT: usize = 100;
const EXPERIENCE_CHAR_LIMIT: usize = 500;
const FALLBACK_LINE_LIMIT: usize = 200;

fn heading_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z][a-z]*(\s[A-Z][a-z]*)?:").expect("boundary pattern compiles")
    })
}

/// Tokens split out of a skills section body. `None` when no skills
/// heading exists; the list may be empty for a bare heading.
pub fn skills_section(text: &str) -> Option<Vec<String>> {
    let body = find_section(text, SKILL_HEADINGS)?;
    let tokens = body
        .split([',', '\n', '•', '-'])
        .map(str::trim)
        .filter(|t| !t.is_empty() && !is_skill_heading_token(t))
        .map(str::to_string)
        .collect();
    Some(tokens)
}

/// Whole-text scan against the fixed keyword list, keeping only the
/// keywords present. `None` when nothing matches.
pub fn skills_keywords(text: &str) -> Option<Vec<String>> {
    let haystack = text.to_lowercase();
    let found: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .map(|k| k.to_string())
        .collect();
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// Experience section body collapsed to a single line and truncated.
/// `None` when no experience heading exists; may be empty for a bare
/// heading.
pub fn experience_section(text: &str) -> Option<String> {
    let body = find_section(text, EXPERIENCE_HEADINGS)?;
    let summary = body
        .split_whitespace()
        .take(EXPERIENCE_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");
    Some(truncate_chars(summary, EXPERIENCE_CHAR_LIMIT))
}

/// Fallback when no experience heading exists: the first non-empty
/// lines of the whole text, joined and truncated.
pub fn experience_fallback(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(FALLBACK_LINE_LIMIT)
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(truncate_chars(lines.join(" "), EXPERIENCE_CHAR_LIMIT))
}

/// Locates a section introduced by one of `headings` and returns its
/// body: inline content after the heading's colon plus the following
/// lines up to the next heading-like line.
fn find_section(text: &str, headings: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let (start, inline) = lines.iter().enumerate().find_map(|(i, line)| {
        heading_inline_rest(line.trim(), headings).map(|rest| (i, rest.to_string()))
    })?;

    let mut body = Vec::new();
    if !inline.is_empty() {
        body.push(inline);
    }
    for line in &lines[start + 1..] {
        if heading_boundary_re().is_match(line.trim()) {
            break;
        }
        body.push((*line).to_string());
    }
    Some(body.join("\n"))
}

/// If `line` opens a section for one of `headings`, returns the inline
/// content after the heading (empty unless the heading carries a colon
/// with content on the same line).
fn heading_inline_rest<'a>(line: &'a str, headings: &[&str]) -> Option<&'a str> {
    for phrase in headings {
        let Some(head) = line.get(..phrase.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(phrase) {
            continue;
        }
        let rest = line[phrase.len()..].trim_start();
        if rest.is_empty() {
            return Some("");
        }
        if let Some(inline) = rest.strip_prefix(':') {
            return Some(inline.trim());
        }
    }
    None
}

fn is_skill_heading_token(token: &str) -> bool {
    let lower = token.to_lowercase();
    SKILL_HEADINGS
        .iter()
        .any(|h| lower.starts_with(&h.to_lowercase()))
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_from_inline_heading() {
        let text = "Skills: Python, SQL, Leadership\nEducation: BS";
        assert_eq!(
            skills_section(text),
            Some(vec![
                "Python".to_string(),
                "SQL".to_string(),
                "Leadership".to_string()
            ])
        );
    }

    #[test]
    fn test_skills_from_bulleted_block() {
        let text = "Technical Skills:\n• Python\n• Cloud Computing\nEducation: BS";
        assert_eq!(
            skills_section(text),
            Some(vec!["Python".to_string(), "Cloud Computing".to_string()])
        );
    }

    #[test]
    fn test_skills_heading_is_case_insensitive() {
        let text = "CORE COMPETENCIES: Communication, Leadership";
        assert_eq!(
            skills_section(text),
            Some(vec!["Communication".to_string(), "Leadership".to_string()])
        );
    }

    #[test]
    fn test_skills_section_stops_at_next_heading() {
        let text = "Skills:\nPython\nEducation:\nBS in CS";
        assert_eq!(skills_section(text), Some(vec!["Python".to_string()]));
    }

    #[test]
    fn test_skills_mid_sentence_mention_is_not_a_section() {
        assert_eq!(skills_section("I have strong Python and SQL skills"), None);
    }

    #[test]
    fn test_skills_drops_stray_subheading_tokens() {
        let text = "Skills:\nKey Skills\nPython";
        assert_eq!(skills_section(text), Some(vec!["Python".to_string()]));
    }

    #[test]
    fn test_bare_skills_heading_yields_empty_list() {
        assert_eq!(skills_section("Skills:"), Some(vec![]));
    }

    #[test]
    fn test_hyphenated_entries_split() {
        let text = "Skills: object-oriented design";
        assert_eq!(
            skills_section(text),
            Some(vec!["object".to_string(), "oriented design".to_string()])
        );
    }

    #[test]
    fn test_keywords_found_in_fixed_order() {
        let text = "I have strong Python and SQL skills";
        assert_eq!(
            skills_keywords(text),
            Some(vec!["Python".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        // "javascript" also substring-matches the "Java" keyword.
        assert_eq!(
            skills_keywords("experienced in machine learning and javascript"),
            Some(vec![
                "Java".to_string(),
                "JavaScript".to_string(),
                "Machine Learning".to_string()
            ])
        );
    }

    #[test]
    fn test_keywords_absent_yields_none() {
        assert_eq!(skills_keywords("I enjoy gardening"), None);
    }

    #[test]
    fn test_experience_section_collapses_to_one_line() {
        let text = "Work Experience:\nAcme Corp\nBuilt billing systems\nEducation: BS";
        assert_eq!(
            experience_section(text),
            Some("Acme Corp Built billing systems".to_string())
        );
    }

    #[test]
    fn test_experience_inline_content_survives() {
        let text = "Experience: Led migration projects";
        assert_eq!(
            experience_section(text),
            Some("Led migration projects".to_string())
        );
    }

    #[test]
    fn test_experience_capped_at_hundred_words() {
        let body: String = (0..150).map(|i| format!("w{i} ")).collect();
        let text = format!("Experience:\n{body}");
        let summary = experience_section(&text).unwrap();
        assert_eq!(summary.split_whitespace().count(), 100);
        assert!(summary.ends_with("w99"));
    }

    #[test]
    fn test_experience_capped_at_five_hundred_chars() {
        let long_word = "x".repeat(400);
        let text = format!("Experience:\n{long_word} {long_word}");
        let summary = experience_section(&text).unwrap();
        assert_eq!(summary.chars().count(), 500);
    }

    #[test]
    fn test_experience_absent_yields_none() {
        assert_eq!(experience_section("Skills: Python"), None);
    }

    #[test]
    fn test_fallback_joins_leading_lines() {
        let text = "John Doe\n\nBuilt many systems\nShipped things";
        assert_eq!(
            experience_fallback(text),
            Some("John Doe Built many systems Shipped things".to_string())
        );
    }

    #[test]
    fn test_fallback_on_empty_text_yields_none() {
        assert_eq!(experience_fallback(""), None);
        assert_eq!(experience_fallback("\n  \n"), None);
    }

    #[test]
    fn test_boundary_requires_capitalized_heading() {
        // lowercase "education:" is not heading-like, so the section
        // keeps flowing through it.
        let text = "Skills:\nPython\neducation: BS";
        assert_eq!(
            skills_section(text),
            Some(vec![
                "Python".to_string(),
                "education: BS".to_string()
            ])
        );
    }
}
