//! Markdown rendering for the conversion preview.
//!
//! Uses comrak with the GitHub Flavored Markdown extensions. Raw HTML in
//! the source is escaped, since cell values come from arbitrary uploads.

use comrak::Options;

/// Renders Markdown to HTML for display in the preview pane.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        // Uploaded content is untrusted
        options.render.unsafe_ = false;
        options.render.escape = true;

        Self { options }
    }

    /// Renders markdown content to an HTML fragment.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
