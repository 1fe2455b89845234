//! Tabular input parsed from CSV text.

use csv::{ReaderBuilder, Trim};

use crate::error::ConversionError;

/// Header row plus data rows, all values kept as trimmed text.
///
/// Every row holds exactly one value per header column. Short records are
/// padded with empty strings and fields beyond the header width are
/// dropped, so rows can be zipped with headers without bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses comma separated text whose first non-blank record is the header.
    ///
    /// Headers and cells are trimmed of surrounding whitespace, and a
    /// quote preceded only by whitespace still opens a quoted field.
    /// Quoted fields may contain commas, newlines, and doubled quotes.
    /// Lines that are empty or whitespace only are skipped, while a line
    /// holding an explicit `""` is a row with an empty value.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when no header row exists and `MalformedRow`
    /// when a quoted field is never closed or a record cannot be read.
    pub fn parse(text: &str) -> Result<Self, ConversionError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = normalize(text)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;

            match &headers {
                None => headers = Some(record.iter().map(String::from).collect()),
                Some(columns) => rows.push(
                    (0..columns.len())
                        .map(|i| record.get(i).unwrap_or_default().to_string())
                        .collect(),
                ),
            }
        }

        let headers = headers.ok_or(ConversionError::EmptyInput)?;
        Ok(Self { headers, rows })
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the input had a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows as `(column, value)` pairs in column order.
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(|row| {
            self.headers
                .iter()
                .zip(row)
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect()
        })
    }
}

/// Prepares input text for the CSV reader.
///
/// Whitespace between a field boundary and an opening quote is removed,
/// since the reader only recognizes a quote as a field's first byte.
/// Whitespace-only lines are emptied so the reader skips them. Line
/// breaks are never removed, so reader line numbers still match the input.
///
/// `""` inside quotes is an escaped quote. A quote after other field
/// content is literal.
///
/// # Errors
///
/// Returns `MalformedRow` with the 1-based line of the opening quote when
/// a quoted field is still open at end of input.
fn normalize(text: &str) -> Result<String, ConversionError> {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;
    let mut opened_at = 0;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut has_content = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    out.push('"');
                }
                '"' => in_quotes = false,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        if field_start && (c == ' ' || c == '\t') {
            pending.push(c);
            continue;
        }

        match c {
            '"' if field_start => {
                pending.clear();
                in_quotes = true;
                opened_at = line;
                field_start = false;
                has_content = true;
            }
            '\r' | '\n' => {
                if has_content {
                    out.push_str(&pending);
                }
                pending.clear();
                field_start = true;
                if c == '\n' {
                    line += 1;
                    has_content = false;
                }
            }
            ',' => {
                out.push_str(&pending);
                pending.clear();
                field_start = true;
                has_content = true;
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                field_start = false;
                has_content = true;
            }
        }
        out.push(c);
    }

    if in_quotes {
        return Err(ConversionError::MalformedRow {
            line: opened_at,
            message: "unterminated quoted field".to_string(),
        });
    }

    if has_content {
        out.push_str(&pending);
    }

    Ok(out)
}
