//! Upload form page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::result::{
    download_button, error_notice, preview, raw_block, success_banner,
};
use crate::components::upload::{instructions, upload_control};
use crate::form::Conversion;

const PAGE_TITLE: &str = "CSV to Markdown Converter";

/// Generates the upload form page.
///
/// With no conversion the page shows the upload control and instructions.
/// A successful conversion adds a download link, the raw Markdown, and a
/// rendered preview. A failed conversion shows its error text inline.
///
/// # Arguments
///
/// * `conversion`: Current upload's conversion, if any
pub fn generate(conversion: Option<&Conversion>) -> Markup {
    let body = html! {
        h1 { (PAGE_TITLE) }
        p {
            "Upload a CSV file to convert it to structured Markdown. "
            "Each row becomes a block of key-value pairs."
        }
        (upload_control())
        @match conversion {
            None => {
                (instructions())
            }
            Some(conversion) => {
                (success_banner(conversion.file_name()))
                @if let Some(message) = conversion.error() {
                    (error_notice(message))
                }
                @if let (Some(markdown), Some(download)) = (conversion.markdown(), conversion.download()) {
                    hr;
                    div class="result-header" {
                        h2 { "Markdown Preview" }
                        (download_button(&download))
                    }
                    (raw_block(markdown))
                    (preview(markdown))
                }
            }
        }
    };

    page_wrapper(PAGE_TITLE, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormSession;

    #[test]
    fn test_empty_session_shows_instructions() {
        // Arrange
        let session = FormSession::default();

        // Act
        let html = generate(session.current()).into_string();

        // Assert
        assert!(html.contains("Please upload a CSV file"), "Got: {}", html);
        assert!(!html.contains("Markdown Preview"), "Got: {}", html);
    }

    #[test]
    fn test_successful_upload_shows_three_views() {
        // Arrange
        let mut session = FormSession::default();
        session.upload("contacts.csv", b"Name\nBob\n");

        // Act
        let html = generate(session.current()).into_string();

        // Assert
        assert!(html.contains("contacts.csv"), "Got: {}", html);
        assert!(html.contains(r#"download="contacts.md""#), "Got: {}", html);
        assert!(html.contains("<pre class=\"raw\"><code>### contacts"), "Got: {}", html);
        assert!(html.contains("<h3>contacts</h3>"), "Got: {}", html);
        assert!(!html.contains("Please upload a CSV file"), "Got: {}", html);
    }

    #[test]
    fn test_failed_upload_shows_inline_error() {
        // Arrange
        let mut session = FormSession::default();
        session.upload("empty.csv", b"");

        // Act
        let html = generate(session.current()).into_string();

        // Assert
        assert!(html.contains("notice-error"), "Got: {}", html);
        assert!(html.contains("Error processing CSV file"), "Got: {}", html);
        assert!(!html.contains("Download"), "Got: {}", html);
    }
}
