//! Conversion result views: banner, download, raw text, rendered preview

use maud::{Markup, PreEscaped, html};

use crate::form::Download;
use crate::markdown::MarkdownRenderer;

/// Confirms which file was uploaded
pub fn success_banner(file_name: &str) -> Markup {
    html! {
        p class="notice notice-ok" { "File uploaded: " strong { (file_name) } }
    }
}

/// Inline error text for a failed conversion
pub fn error_notice(message: &str) -> Markup {
    html! {
        p class="notice notice-error" role="alert" { (message) }
    }
}

/// Download link carrying the Markdown as a `data:` URL
pub fn download_button(download: &Download) -> Markup {
    html! {
        a class="download" href=(download.data_uri()) download=(download.file_name) type=(download.mime) {
            "Download"
        }
    }
}

/// Copyable raw Markdown block
pub fn raw_block(markdown: &str) -> Markup {
    html! {
        p { strong { "Copy markdown:" } }
        pre class="raw" { code { (markdown) } }
    }
}

/// Rendered Markdown preview
pub fn preview(markdown: &str) -> Markup {
    let rendered = MarkdownRenderer::new().render(markdown);

    html! {
        p { strong { "Rendered preview:" } }
        div class="preview markdown-body" { (PreEscaped(rendered)) }
    }
}
