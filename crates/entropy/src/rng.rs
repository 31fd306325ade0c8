//! `rand` adapter for entropy sources

use ecid_api::EntropySource;
use ecid_params::utils::entropy::MAX_ENTROPY_ATTEMPTS;
use rand::{CryptoRng, RngCore};

/// Exposes an [`EntropySource`] as a `rand` generator
///
/// Underfills are retried up to `MAX_ENTROPY_ATTEMPTS` times. Prefer
/// `try_fill_bytes`; the infallible `RngCore` methods panic when the source
/// keeps failing, since returning unfilled bytes is not an option.
pub struct EntropyRng<'a, E: ?Sized> {
    source: &'a E,
}

impl<'a, E: EntropySource + ?Sized> EntropyRng<'a, E> {
    pub fn new(source: &'a E) -> Self {
        Self { source }
    }
}

impl<E: EntropySource + ?Sized> RngCore for EntropyRng<'_, E> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("entropy source failed: {}", err);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        let mut attempt = 1;
        loop {
            match self.source.fill(dest) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_retryable() && attempt < MAX_ENTROPY_ATTEMPTS => attempt += 1,
                Err(err) => return Err(rand::Error::new(err)),
            }
        }
    }
}

impl<E: EntropySource + ?Sized> CryptoRng for EntropyRng<'_, E> {}
