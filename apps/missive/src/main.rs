mod cli;
mod errors;
mod extract;
mod generate_cmd;
mod letter;
mod parse_cmd;
mod resume;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize structured logging on stderr so stdout stays clean
    // for parsed fields and rendered letters.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse(ref args) => parse_cmd::run(args)?,
        Commands::Generate(ref args) => generate_cmd::run(args)?,
    }
    Ok(())
}
