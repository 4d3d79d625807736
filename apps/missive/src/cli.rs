use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Parse resume documents and render tailored cover letters.
#[derive(Debug, Parser)]
#[command(name = "missive", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract contact fields, skills, and experience from a resume
    Parse(ParseArgs),

    /// Render a cover letter from provided fields and an optional resume
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to the resume file (.pdf or .docx)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Resume file used to fill any field not given as a flag
    #[arg(long, value_name = "FILE")]
    pub resume: Option<PathBuf>,

    /// Applicant name
    #[arg(long)]
    pub name: Option<String>,

    /// Applicant mailing address
    #[arg(long)]
    pub address: Option<String>,

    /// Applicant email address
    #[arg(long)]
    pub email: Option<String>,

    /// Applicant phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Company the letter is addressed to
    #[arg(long)]
    pub company: Option<String>,

    /// Company mailing address
    #[arg(long)]
    pub company_address: Option<String>,

    /// Hiring manager name for the greeting
    #[arg(long)]
    pub hiring_manager: Option<String>,

    /// Job title being applied for
    #[arg(long)]
    pub job_title: Option<String>,

    /// Comma-separated skills list
    #[arg(long)]
    pub skills: Option<String>,

    /// Experience summary paragraph
    #[arg(long)]
    pub experience: Option<String>,

    /// Write the letter to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Write the letter to cover_letter_<name>.txt in the current directory
    #[arg(long, conflicts_with = "out")]
    pub save: bool,
}

/// Output format for the parse subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one field per line
    Text,
    /// JSON object
    Json,
}
