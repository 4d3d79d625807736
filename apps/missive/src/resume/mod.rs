//! Resume field parsing — heuristic extraction of contact details,
//! skills, and an experience summary from plain resume text.
//!
//! The parser is a fixed pipeline of named matchers, each a pure
//! function `&str -> Option<value>`. Matchers run in a set order and
//! their results are merged into one `ParsedFields`; for skills and
//! experience a section matcher is tried first and a whole-text
//! fallback second. A matcher that finds nothing leaves its field
//! empty — that is never an error.

pub mod matchers;
pub mod sections;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fields recovered from one parse pass. Every field defaults to
/// empty; callers overlay user-supplied values on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("blank line pattern compiles"))
}

/// Collapses runs of blank lines to single newlines so the line-based
/// matchers see a dense document.
fn normalize(text: &str) -> String {
    blank_lines_re().replace_all(text, "\n").into_owned()
}

/// Runs every matcher over the normalized text and merges the results.
/// Deterministic: identical input text always produces identical
/// output.
pub fn parse(text: &str) -> ParsedFields {
    let text = normalize(text);

    let name = matchers::name(&text);
    let email = matchers::email(&text);
    let phone = matchers::phone(&text);
    let skills = sections::skills_section(&text).or_else(|| sections::skills_keywords(&text));
    let experience =
        sections::experience_section(&text).or_else(|| sections::experience_fallback(&text));

    debug!(
        "Matched fields: name={} email={} phone={} skills={} experience={}",
        name.is_some(),
        email.is_some(),
        phone.is_some(),
        skills.as_ref().map_or(0, Vec::len),
        experience.is_some(),
    );

    ParsedFields {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        skills: skills.unwrap_or_default(),
        experience: experience.unwrap_or_default(),
    }
}
