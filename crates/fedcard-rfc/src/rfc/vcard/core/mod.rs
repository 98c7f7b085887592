//! Core vCard types.

mod parameter;
mod property;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, names};
pub use vcard::{VCard, VCardVersion};
