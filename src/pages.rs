//! Page generation modules.

pub mod form;
