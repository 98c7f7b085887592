use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// vCard handling errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("vCard parse error: {0}")]
    VCardParse(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
