use crate::cli::{OutputFormat, ParseArgs};
use crate::errors::AppError;
use crate::extract;
use crate::resume;

pub fn run(args: &ParseArgs) -> Result<(), AppError> {
    let text = extract::extract_from_file(&args.file)?;
    let fields = resume::parse(&text);

    match args.format {
        OutputFormat::Text => {
            println!("name: {}", fields.name);
            println!("email: {}", fields.email);
            println!("phone: {}", fields.phone);
            println!("skills: {}", fields.skills.join(", "));
            println!("experience: {}", fields.experience);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&fields).map_err(anyhow::Error::from)?;
            println!("{json}");
        }
    }
    Ok(())
}
