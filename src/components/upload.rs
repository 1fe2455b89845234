//! Upload control and first-visit instructions

use maud::{Markup, html};

use crate::convert::{ConvertOptions, convert};

/// CSV shown in the expected-format example.
pub const SAMPLE_CSV: &str = "Name,Email,Age,City\n\
John Doe,john@example.com,30,New York\n\
Jane Smith,jane@example.com,25,Los Angeles\n";

/// Renders the single-file upload control accepting `.csv` files
pub fn upload_control() -> Markup {
    html! {
        form class="upload" method="post" enctype="multipart/form-data" {
            label for="csv-upload" { "Drop your CSV file here or click to browse" }
            br;
            input id="csv-upload" type="file" name="file" accept=".csv";
        }
    }
}

/// Renders the prompt and expected-format example shown before any upload
///
/// The example output is produced by running the converter on
/// [`SAMPLE_CSV`], so it always matches real conversion output.
pub fn instructions() -> Markup {
    let sample = convert(SAMPLE_CSV, "filename.csv", &ConvertOptions::default())
        .unwrap_or_default();

    html! {
        p class="notice notice-info" { "Please upload a CSV file to get started" }
        details {
            summary { "See expected CSV format" }
            p { "Your CSV should have a header row with column names. For example:" }
            pre class="raw" { code { (SAMPLE_CSV) } }
            p { "Will be converted to:" }
            pre class="raw" { code class="language-markdown" { (sample) } }
        }
    }
}
