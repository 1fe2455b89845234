//! Upload form session state.
//!
//! A [`FormSession`] holds the single most recent upload and its
//! conversion. Re-uploading a file with the same name reuses the cached
//! result; a different name invalidates the slot and converts again.
//! Conversion failures are kept as display text so the session stays
//! usable for the next upload.

use base64::{Engine, engine::general_purpose::STANDARD};
use maud::Markup;
use tracing::{debug, warn};

use crate::convert::{ConvertOptions, convert};
use crate::document::title_from_name;
use crate::pages;

/// MIME type of downloaded Markdown files.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Result of converting one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    file_name: String,
    stem: String,
    result: Result<String, String>,
}

impl Conversion {
    fn new(file_name: &str, bytes: &[u8], options: &ConvertOptions) -> Self {
        let result = convert(bytes, file_name, options).map_err(|e| {
            warn!(file = file_name, error = %e, "upload conversion failed");
            format!("Error processing CSV file: {}", e)
        });

        Self {
            file_name: file_name.to_string(),
            stem: title_from_name(file_name),
            result,
        }
    }

    /// Uploaded file name, as supplied by the client.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Converted Markdown, if conversion succeeded.
    pub fn markdown(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    /// Error text, if conversion failed.
    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }

    /// Download payload named `<stem>.md`, if conversion succeeded.
    pub fn download(&self) -> Option<Download> {
        self.markdown().map(|body| Download {
            file_name: format!("{}.md", self.stem),
            mime: MARKDOWN_MIME,
            body: body.to_string(),
        })
    }
}

/// A file offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub body: String,
}

impl Download {
    /// Encodes the body as a base64 `data:` URL usable as a link target.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.mime,
            STANDARD.encode(self.body.as_bytes())
        )
    }
}

/// Single-slot cache of the last uploaded file and its conversion.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    options: ConvertOptions,
    last: Option<Conversion>,
    conversions: usize,
}

impl FormSession {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            last: None,
            conversions: 0,
        }
    }

    /// Accepts an upload and returns its conversion.
    ///
    /// The converter runs only when `file_name` differs from the cached
    /// upload's name. Otherwise the cached conversion is returned and
    /// `bytes` are ignored.
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) -> &Conversion {
        if self
            .last
            .as_ref()
            .is_some_and(|cached| cached.file_name != file_name)
        {
            debug!(file = file_name, "upload changed, invalidating cache");
            self.last = None;
        }

        let options = self.options;
        let conversions = &mut self.conversions;
        self.last.get_or_insert_with(|| {
            *conversions += 1;
            Conversion::new(file_name, bytes, &options)
        })
    }

    /// Current conversion, if a file has been uploaded.
    pub fn current(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    /// Forgets the uploaded file.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Number of times the converter has actually run.
    pub fn converted_count(&self) -> usize {
        self.conversions
    }

    /// Renders the form page for the current state.
    pub fn render_page(&self) -> Markup {
        pages::form::generate(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineBreak;

    #[test]
    fn test_upload_converts_once_per_name() {
        // Arrange
        let mut session = FormSession::default();

        // Act
        session.upload("a.csv", b"k\nv\n");
        session.upload("a.csv", b"k\nv\n");

        // Assert
        assert_eq!(session.converted_count(), 1);
    }

    #[test]
    fn test_same_name_returns_cached_result() {
        // Arrange
        let mut session = FormSession::default();
        session.upload("a.csv", b"k\nfirst\n");

        // Act
        let conversion = session.upload("a.csv", b"k\nsecond\n");

        // Assert
        assert_eq!(conversion.markdown(), Some("### a\n\nk: first\n"));
    }

    #[test]
    fn test_new_name_invalidates_cache() {
        // Arrange
        let mut session = FormSession::default();
        session.upload("a.csv", b"k\nfirst\n");

        // Act
        let conversion = session.upload("b.csv", b"k\nsecond\n");

        // Assert
        assert_eq!(conversion.markdown(), Some("### b\n\nk: second\n"));
        assert_eq!(session.converted_count(), 2);
    }

    #[test]
    fn test_upload_uses_session_line_break() {
        // Arrange
        let mut session = FormSession::new(ConvertOptions::new(LineBreak::HardBreak));

        // Act
        let conversion = session.upload("a.csv", b"k\nv\n");

        // Assert
        assert_eq!(conversion.markdown(), Some("### a\n\nk: v  \n"));
    }

    #[test]
    fn test_failed_upload_keeps_session_usable() {
        // Arrange
        let mut session = FormSession::default();

        // Act
        let failed = session.upload("empty.csv", b"").clone();
        let next = session.upload("ok.csv", b"k\nv\n");

        // Assert
        assert!(failed.markdown().is_none());
        assert!(
            failed
                .error()
                .is_some_and(|e| e.contains("empty or has no header row")),
            "Got: {:?}",
            failed.error()
        );
        assert!(failed.download().is_none());
        assert!(next.markdown().is_some());
    }

    #[test]
    fn test_clear_forgets_upload() {
        // Arrange
        let mut session = FormSession::default();
        session.upload("a.csv", b"k\nv\n");

        // Act
        session.clear();
        session.upload("a.csv", b"k\nv\n");

        // Assert
        assert_eq!(session.converted_count(), 2);
    }

    #[test]
    fn test_download_named_after_stem() {
        // Arrange
        let mut session = FormSession::default();

        // Act
        let download = session
            .upload("report.v2.csv", b"k\nv\n")
            .download()
            .expect("Should offer download");

        // Assert
        assert_eq!(download.file_name, "report.v2.md");
        assert_eq!(download.mime, "text/markdown");
        assert_eq!(download.body, "### report.v2\n\nk: v\n");
    }

    #[test]
    fn test_download_data_uri() {
        // Arrange
        let download = Download {
            file_name: "a.md".to_string(),
            mime: MARKDOWN_MIME,
            body: "hi".to_string(),
        };

        // Act
        let uri = download.data_uri();

        // Assert
        assert_eq!(uri, "data:text/markdown;charset=utf-8;base64,aGk=");
    }
}
