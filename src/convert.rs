//! CSV to Markdown conversion entry point.

use tracing::debug;

use crate::document::{Document, LineBreak, title_from_name};
use crate::error::ConversionError;
use crate::table::Table;

/// Options controlling the produced Markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub line_break: LineBreak,
}

impl ConvertOptions {
    pub fn new(line_break: LineBreak) -> Self {
        Self { line_break }
    }
}

/// Converts CSV content into a structured Markdown document.
///
/// The input is decoded as UTF-8, its first non-blank record is taken as
/// the header, and every following record becomes a block of
/// `key: value` lines. The title is the stem of `display_name`.
///
/// # Arguments
///
/// * `input`: CSV content as text or raw bytes
/// * `display_name`: Name the content came from, e.g. `"contacts.csv"`
/// * `options`: Output layout options
///
/// # Errors
///
/// Returns `Decode` for invalid UTF-8, `EmptyInput` when there is no
/// header row, and `MalformedRow` for unparseable CSV syntax.
pub fn convert<I: AsRef<[u8]>>(
    input: I,
    display_name: &str,
    options: &ConvertOptions,
) -> Result<String, ConversionError> {
    let text = std::str::from_utf8(input.as_ref())?;
    let table = Table::parse(text)?;
    let document = Document::from_table(title_from_name(display_name), &table);

    debug!(
        file = display_name,
        columns = table.headers().len(),
        rows = table.len(),
        "converted CSV to markdown"
    );

    Ok(document.render(options.line_break))
}
