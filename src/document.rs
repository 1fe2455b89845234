//! Markdown document assembly.
//!
//! A document is a level-3 title heading followed by one block of
//! `key: value` lines per data row, with blocks separated by a horizontal
//! rule. Rendering is the only place output layout is decided.

use clap::ValueEnum;
use std::path::Path;

use crate::table::Table;

/// Separator placed between consecutive row blocks.
const ROW_SEPARATOR: &str = "\n---\n\n";

/// How each `key: value` line is terminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LineBreak {
    /// Newline only. Renderers join consecutive lines into one paragraph.
    #[default]
    Plain,
    /// Two trailing spaces before the newline, forcing a rendered line break.
    HardBreak,
}

impl LineBreak {
    fn line_end(self) -> &'static str {
        match self {
            Self::Plain => "\n",
            Self::HardBreak => "  \n",
        }
    }
}

/// Derives the document title from a display name.
///
/// Takes the final path component and strips its last type suffix, so
/// `"report.v2.csv"` becomes `"report.v2"` and `"dir/data.csv"` becomes
/// `"data"`. A leading dot (`".csv"`) or a trailing dot (`"a.b."`) is not
/// a suffix and is kept. Names without a file component yield an empty
/// title.
pub fn title_from_name(name: &str) -> String {
    let Some(file_name) = Path::new(name).file_name() else {
        return String::new();
    };
    let file_name = file_name.to_string_lossy();

    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < file_name.len() => file_name[..dot].to_string(),
        _ => file_name.into_owned(),
    }
}

/// Title plus row blocks, built once per conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    blocks: Vec<Vec<(String, String)>>,
}

impl Document {
    /// Builds a document with one block per table row.
    pub fn from_table(title: impl Into<String>, table: &Table) -> Self {
        let blocks = table
            .records()
            .map(|record| {
                record
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect()
            })
            .collect();

        Self {
            title: title.into(),
            blocks,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of row blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Renders the document as Markdown text.
    ///
    /// Layout is `### <title>`, a blank line, then the row blocks joined by
    /// a blank line, `---`, and a blank line. No rule follows the last block.
    pub fn render(&self, line_break: LineBreak) -> String {
        let line_end = line_break.line_end();
        let mut out = format!("### {}\n\n", self.title);

        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                out.push_str(ROW_SEPARATOR);
            }
            for (key, value) in block {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(line_end);
            }
        }

        out
    }
}
