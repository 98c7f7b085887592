//! vCard serialization.
//!
//! Properties are written in the order they were added, each line terminated
//! with CRLF. Lines are not folded.

mod escape;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use serializer::serialize_single;
