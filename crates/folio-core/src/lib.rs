//! Core library for folio: content, navigation, search, the assistant
//! gateway and the outbound clients (mail, résumé).

pub mod assistant;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod export;
pub mod logging;
pub mod resume;
pub mod router;
pub mod search;
pub mod theme;
