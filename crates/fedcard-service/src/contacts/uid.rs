use fedcard_core::backend::RandomSource;
use fedcard_core::error::BackendError;

use crate::error::ServiceResult;

const UID_BYTES: usize = 16;

/// ## Summary
/// Generates a contact uid from 16 random bytes.
///
/// The version nibble is set to 4 and the variant bits to RFC 4122, and the
/// result is rendered as 36 lowercase hyphenated hex characters. Uniqueness
/// is probabilistic; nothing checks the backend for collisions.
///
/// ## Errors
/// Returns `ServiceError::Backend` if the random source fails or returns the
/// wrong number of bytes.
pub fn generate_uid(random: &dyn RandomSource) -> ServiceResult<String> {
    let bytes = random.generate(UID_BYTES)?;

    let Ok(bytes) = <[u8; UID_BYTES]>::try_from(bytes.as_slice()) else {
        return Err(BackendError::Unavailable(format!(
            "random source returned {} bytes, expected {UID_BYTES}",
            bytes.len()
        ))
        .into());
    };

    Ok(uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string())
}
