//! Converts CSV files into structured Markdown.
//!
//! Each data row becomes a block of `key: value` lines under a title
//! taken from the input file name. The [`convert`] function is the whole
//! transformation; the command line and upload form shells build on it.

mod cli;
pub mod components;
mod config;
mod convert;
mod document;
mod error;
pub mod form;
mod markdown;
pub mod pages;
mod table;

pub use cli::{run_convert, run_preview};
pub use config::{Command, Config, ConvertArgs, PreviewArgs};
pub use convert::{ConvertOptions, convert};
pub use document::{Document, LineBreak, title_from_name};
pub use error::ConversionError;
pub use form::{Conversion, Download, FormSession, MARKDOWN_MIME};
pub use markdown::MarkdownRenderer;
pub use table::Table;
