//! Hardware entropy for the ecid identity layer
//!
//! [`HardwareEntropy`] draws random bytes from the CPU's RDRAND instruction
//! after a one-time check that the CPU supports RDRAND and RDSEED. Nothing
//! in this crate falls back to a software generator.

pub mod capability;
pub mod hardware;
pub mod rng;

pub use capability::EntropyCapability;
pub use hardware::HardwareEntropy;
pub use rng::EntropyRng;

use ecid_api::{EntropySource, Result};

/// Fill `buf` from the hardware source
pub fn randombytes(buf: &mut [u8]) -> Result<()> {
    HardwareEntropy::new()?.fill(buf)
}
