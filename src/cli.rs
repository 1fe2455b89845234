//! Command implementations behind the `csvmd` binary.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{ConvertArgs, PreviewArgs};
use crate::convert::convert;
use crate::form::FormSession;

/// Converts the input CSV and writes `<output dir>/<stem>.md`.
///
/// Creates the output directory if missing and prints progress to stdout.
///
/// # Returns
///
/// Path of the written Markdown file
///
/// # Errors
///
/// Returns error if the input is missing or not a file, cannot be read,
/// fails to convert, or the output cannot be written.
pub fn run_convert(args: &ConvertArgs) -> Result<PathBuf> {
    args.validate()?;
    let output_path = args.output_path("md")?;
    create_output_dir(&args.output_dir())?;

    println!("Converting '{}'...", args.input.display());

    let bytes = read_input(&args.input)?;
    let markdown = convert(&bytes, args.display_name()?, &args.options())
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    fs::write(&output_path, markdown)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(output = %output_path.display(), "wrote markdown");
    println!("Successfully saved to '{}'", output_path.display());

    Ok(output_path)
}

/// Runs the input through an upload form session and writes the page.
///
/// The page is written to `<output dir>/<stem>.html`. A conversion
/// failure is shown inside the page rather than returned as an error.
/// Opens the page in the default browser unless `no_open` is set.
///
/// # Returns
///
/// Path of the written HTML page
///
/// # Errors
///
/// Returns error if the input is missing or not a file, cannot be read,
/// or the page cannot be written.
pub fn run_preview(args: &PreviewArgs) -> Result<PathBuf> {
    let convert_args = &args.convert;
    convert_args.validate()?;
    let page_path = convert_args.output_path("html")?;
    create_output_dir(&convert_args.output_dir())?;

    let bytes = read_input(&convert_args.input)?;
    let mut session = FormSession::new(convert_args.options());
    if let Some(message) = session.upload(convert_args.display_name()?, &bytes).error() {
        eprintln!("Warning: {}", message);
    }

    fs::write(&page_path, session.render_page().into_string())
        .with_context(|| format!("Failed to write {}", page_path.display()))?;

    info!(output = %page_path.display(), "wrote preview page");
    println!("Generated: {}", page_path.display());

    if !args.no_open {
        if let Err(e) = open::that(&page_path) {
            eprintln!("Warning: Failed to open browser: {:#}", e);
        }
    }

    Ok(page_path)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}
