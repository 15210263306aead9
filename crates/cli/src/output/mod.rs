//! Output formatters

pub mod json;
pub mod sarif;
pub mod terminal;
