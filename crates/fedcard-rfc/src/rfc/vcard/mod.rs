//! vCard implementation (RFC 6350 / RFC 2426).
//!
//! This module provides types, parsing, and serialization for the subset of
//! vCard that fedcard reads and writes: text-valued properties with optional
//! groups and parameters.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use fedcard_rfc::rfc::vcard::parse_single;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=INTERNET:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse_single(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use fedcard_rfc::rfc::vcard::{VCard, VCardProperty, VCardVersion, serialize_single};
//!
//! let mut card = VCard::with_version(VCardVersion::V3);
//! card.add_property(VCardProperty::text("FN", "Jane Doe"));
//!
//! let output = serialize_single(&card);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardParameter`)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;


// Re-export commonly used types
pub use build::serialize_single;
pub use self::core::{VCard, VCardParameter, VCardProperty, VCardVersion};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
