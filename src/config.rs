//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::convert::ConvertOptions;
use crate::document::{LineBreak, title_from_name};

/// Command line configuration for csvmd.
#[derive(Debug, Clone, Parser)]
#[command(name = "csvmd", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a CSV file into a Markdown file
    Convert(ConvertArgs),
    /// Render the conversion as an HTML page with preview and download
    Preview(PreviewArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Line ending style for key: value lines
    #[arg(long, value_enum, default_value_t = LineBreak::Plain)]
    pub style: LineBreak,
}

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl ConvertArgs {
    /// Validates the input path.
    ///
    /// # Errors
    ///
    /// Returns error if the input does not exist or is not a regular file.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file not found: {}", self.input.display());
        }
        if !self.input.is_file() {
            bail!("Input path is not a file: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns the input file name used as the conversion display name.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no file name or contains invalid UTF8.
    pub fn display_name(&self) -> Result<&str> {
        self.input
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract file name from path: {}", self.input.display()))
    }

    /// Returns the input file name without its final extension.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no file name or contains invalid UTF8.
    pub fn stem(&self) -> Result<String> {
        Ok(title_from_name(self.display_name()?))
    }

    /// Returns the directory output files are written to.
    pub fn output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }

        match self.input.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Returns `<output dir>/<input stem>.<extension>`.
    ///
    /// # Errors
    ///
    /// Returns error if the input stem cannot be determined.
    pub fn output_path(&self, extension: &str) -> Result<PathBuf> {
        Ok(self
            .output_dir()
            .join(format!("{}.{}", self.stem()?, extension)))
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.style)
    }
}
