//! Terminal helpers for the recipegen command line
//!
//! - Status messages and formatting ([`output`])
//! - Recipe, search and grocery list rendering ([`render`])
//! - Spinners for network calls ([`progress`])

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod render;
