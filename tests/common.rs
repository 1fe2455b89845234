//! Shared test utilities for integration tests.
//!
//! Provides sample CSV fixtures and helpers for writing them into
//! temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Contacts sample with four columns and two rows.
pub const CONTACTS_CSV: &str = "Name,Email,Age,City
John Doe,john@example.com,30,New York
Jane Smith,jane@example.com,25,Los Angeles
";

/// Expected plain-style conversion of [`CONTACTS_CSV`] named `contacts.csv`.
pub const CONTACTS_MD: &str = "### contacts

Name: John Doe
Email: john@example.com
Age: 30
City: New York

---

Name: Jane Smith
Email: jane@example.com
Age: 25
City: Los Angeles
";

/// Writes CSV content to `dir/name` and returns the file path.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_csv(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Counts `key: value` lines in one rendered row block.
pub fn block_lines(block: &str) -> usize {
    block.lines().filter(|line| line.contains(": ")).count()
}
