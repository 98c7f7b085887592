use fedcard_core::backend::RandomSource;
use fedcard_core::error::{BackendError, BackendResult};
use rand::RngCore;
use rand::rngs::OsRng;

/// Random bytes from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn generate(&self, len: usize) -> BackendResult<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| BackendError::Unavailable(format!("OS random source failed: {e}")))?;
        Ok(bytes)
    }
}
