//! Cover letter rendering — fixed template, date line, greeting, and
//! the natural-language skills clause.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// MIME type of the rendered letter.
pub const LETTER_MIME: &str = "text/plain";

/// Fallback clause when the skills string holds no usable tokens.
const SKILLS_FALLBACK: &str = "relevant skills";

/// Inputs for one rendered letter. `hiring_manager` is the only
/// optional field; `validate` checks the rest before rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LetterRequest {
    pub your_name: String,
    pub your_address: String,
    pub your_email: String,
    pub your_phone: String,
    pub company_name: String,
    pub company_address: String,
    pub hiring_manager: Option<String>,
    pub job_title: String,
    /// Comma-joined skills string, as edited by the user.
    pub skills: String,
    pub experience: String,
}

const LETTER_TEMPLATE: &str = "\
{your_name}
{your_address}
{your_email}
{your_phone}

{date}

{company_name}
{company_address}

{greeting}

I am excited to apply for the {job_title} position at {company_name}. With my skills in {skills_clause} and my relevant experience, I am confident in my ability to contribute effectively to your team.

{experience}

I am particularly drawn to {company_name}'s commitment to innovation and excellence. My background aligns well with the requirements of the {job_title} role, and I am eager to bring my expertise to your organization. I would welcome the opportunity to discuss how my skills and experiences can benefit {company_name}.

Thank you for considering my application. I look forward to the possibility of contributing to your team and am available at your convenience for an interview. Please feel free to contact me at {your_email} or {your_phone}.

Sincerely,
{your_name}
";

/// Checks that every required field is non-empty, returning all the
/// missing field names at once so the user can fix them in one pass.
pub fn validate(req: &LetterRequest) -> Result<(), AppError> {
    let required = [
        ("your name", &req.your_name),
        ("your address", &req.your_address),
        ("your email", &req.your_email),
        ("your phone", &req.your_phone),
        ("company name", &req.company_name),
        ("company address", &req.company_address),
        ("job title", &req.job_title),
        ("skills", &req.skills),
        ("experience", &req.experience),
    ];
    let missing: Vec<String> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| (*label).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern compiles"))
}

/// Renders the letter for the given date. Assumes `validate` has
/// passed; substitutes every placeholder verbatim with no escaping.
/// A single pass over the template, so brace-wrapped text inside a
/// field value is never itself substituted.
/// Pure: identical inputs produce byte-identical output.
pub fn render(req: &LetterRequest, date: NaiveDate) -> String {
    placeholder_re()
        .replace_all(LETTER_TEMPLATE, |caps: &Captures| match &caps[1] {
            "your_name" => req.your_name.clone(),
            "your_address" => req.your_address.clone(),
            "your_email" => req.your_email.clone(),
            "your_phone" => req.your_phone.clone(),
            "company_name" => req.company_name.clone(),
            "company_address" => req.company_address.clone(),
            "date" => format_letter_date(date),
            "greeting" => greeting(req.hiring_manager.as_deref()),
            "job_title" => req.job_title.clone(),
            "skills_clause" => skills_clause(&req.skills),
            "experience" => req.experience.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Full month name, zero-padded day, four-digit year.
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Renders the comma-joined skills string as natural language: the
/// tokens joined with ", " and an "and" before the last one.
pub fn skills_clause(skills: &str) -> String {
    let items: Vec<&str> = skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    match items.as_slice() {
        [] => SKILLS_FALLBACK.to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// File name offered alongside the rendered letter.
pub fn suggested_file_name(your_name: &str) -> String {
    format!("cover_letter_{}.txt", your_name.replace(' ', "_"))
}

fn greeting(hiring_manager: Option<&str>) -> String {
    match hiring_manager {
        Some(name) if !name.is_empty() => format!("Dear {name},"),
        _ => "Dear Hiring Manager,".to_string(),
    }
}
