//! Contact card codec.
//!
//! Translates between [`ContactFields`] plus a uid and the vCard 3.0 text
//! fedcard writes into address books. The encoded layout is fixed:
//!
//! ```text
//! BEGIN:VCARD
//! VERSION:3.0
//! PRODID:-//fedcard//Contacts Admin API//EN
//! UID:<uid>
//! FN:<displayName>
//! EMAIL;TYPE=INTERNET:<email>
//! CLOUD:<cloudId>
//! X-CLOUD-ID:<cloudId>
//! ORG:<organization>        (only when present)
//! REV:<YYYYMMDDTHHMMSSZ>
//! END:VCARD
//! ```
//!
//! Every line, including the last, ends with CRLF.

mod decode;
mod encode;


pub use decode::{DecodedCard, decode};
pub use encode::{REV_FORMAT, encode, encode_at, to_vcard};

/// Product identifier written into every encoded card.
pub const PRODUCT_ID: &str = "-//fedcard//Contacts Admin API//EN";
