//! Shared building blocks for fedcard: configuration, domain types, the
//! storage/directory traits every backend implements, and error kinds.

pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
