//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

const FORM_CSS: &str = include_str!("../../assets/form.css");

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, and the bundled stylesheet inline
/// so the generated page is a single self-contained file.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `body`: Page-specific body markup
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(FORM_CSS)) }
            }
            body {
                div class="container" {
                    (body)
                }
                footer { "Generated by csvmd" }
            }
        }
    }
}
