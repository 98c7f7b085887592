//! Contact orchestration for fedcard.
//!
//! [`contacts::ContactService`] validates requests, resolves the target
//! address book, encodes and decodes cards, and talks to storage through the
//! backend traits. [`auth`] checks administrator credentials.

pub mod auth;
pub mod contacts;
pub mod error;
