//! One letter-generation session: profile → intake → template → layout → file.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::{load_profile, Config};
use crate::errors::LetterError;
use crate::intake::Intake;
use crate::layout::{default_page_config, LetterLayout};
use crate::models::{LetterRequest, UserProfile};
use crate::render::{letter_file_name, DocumentWriter, FontAssets};

/// Result of a successful session.
#[derive(Debug, Clone)]
pub struct SavedLetter {
    pub file_name: String,
    pub path: PathBuf,
}

/// Loads the profile (failing before any prompt if it is incomplete), runs
/// the interactive intake and writes the letter.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<SavedLetter, LetterError> {
    let profile = load_profile(&config.profile_path)?;
    info!("Loaded profile from {}", config.profile_path.display());

    let request = Intake::new(input, output).collect_request()?;

    let writer = DocumentWriter::new(&config.staging_dir, FontAssets::load(&config.fonts_dir));
    generate(&writer, config, &profile, &request)
}

/// Renders `request` and saves it in the destination directory.
pub fn generate(
    writer: &DocumentWriter,
    config: &Config,
    profile: &UserProfile,
    request: &LetterRequest,
) -> Result<SavedLetter, LetterError> {
    let template = request.field.template(request);
    info!(field = %request.field, template = template.name(), "Selected template");

    let layout = LetterLayout::new(default_page_config(writer.fonts().family()));
    let document = layout.render(template.as_ref(), request, profile)?;

    let file_name = letter_file_name(profile, request);
    let path = config.destination_dir.join(&file_name);
    writer.write(&document, &path)?;

    Ok(SavedLetter { file_name, path })
}
