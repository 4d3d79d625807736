use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::errors::AppError;
use crate::extract;
use crate::letter::{self, LetterRequest};
use crate::resume;
use crate::session::FieldCache;

pub fn run(args: &GenerateArgs) -> Result<(), AppError> {
    // Flags seed the cache first so resume-parsed values never
    // override anything given explicitly.
    let mut cache = FieldCache {
        name: args.name.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        phone: args.phone.clone().unwrap_or_default(),
        skills: args.skills.clone().unwrap_or_default(),
        experience: args.experience.clone().unwrap_or_default(),
    };

    if let Some(path) = &args.resume {
        let text = extract::extract_from_file(path)?;
        let parsed = resume::parse(&text);
        cache.fill_if_empty(&parsed);
    }

    let request = LetterRequest {
        your_name: cache.name,
        your_address: args.address.clone().unwrap_or_default(),
        your_email: cache.email,
        your_phone: cache.phone,
        company_name: args.company.clone().unwrap_or_default(),
        company_address: args.company_address.clone().unwrap_or_default(),
        hiring_manager: args.hiring_manager.clone(),
        job_title: args.job_title.clone().unwrap_or_default(),
        skills: cache.skills,
        experience: cache.experience,
    };
    letter::validate(&request)?;

    let rendered = letter::render(&request, Local::now().date_naive());

    if let Some(path) = &args.out {
        fs::write(path, &rendered)?;
        info!("Wrote {} ({})", path.display(), letter::LETTER_MIME);
    } else if args.save {
        let path = PathBuf::from(letter::suggested_file_name(&request.your_name));
        fs::write(&path, &rendered)?;
        info!("Wrote {} ({})", path.display(), letter::LETTER_MIME);
    } else {
        // The template already ends with a newline.
        print!("{rendered}");
    }
    Ok(())
}
