//! vCard handling for fedcard.
//!
//! [`rfc::vcard`] is a small, generic vCard reader and writer. [`card`] builds
//! on it to encode and decode the contact cards fedcard stores.

pub mod card;
pub mod error;
pub mod rfc;
