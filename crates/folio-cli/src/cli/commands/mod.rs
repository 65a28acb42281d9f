//! CLI command handlers.

pub mod ask;
pub mod config;
pub mod contact;
pub mod interactive;
pub mod print;
pub mod resume;
pub mod search;
