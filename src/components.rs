//! Reusable HTML components for the upload form page.

pub mod layout;
pub mod result;
pub mod upload;
