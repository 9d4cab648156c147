//! CLI command implementations

pub mod catalog;
pub mod grocery;
pub mod random;
pub mod search;
pub mod show;
