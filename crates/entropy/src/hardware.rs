//! RDRAND-backed entropy source

use core::ffi::{c_int, c_void};

use ecid_api::{EntropySource, Error, RawGenerator, Result};
use tracing::warn;
use zeroize::Zeroize;

use crate::capability::EntropyCapability;

/// Entropy from the CPU's RDRAND instruction
///
/// Construction requires both RDRAND and RDSEED. There is no software
/// fallback: on a CPU without them [`HardwareEntropy::new`] fails.
#[derive(Debug)]
pub struct HardwareEntropy {
    _private: (),
}

impl HardwareEntropy {
    pub fn new() -> Result<Self> {
        Self::with_capability(EntropyCapability::detect())
    }

    pub(crate) fn with_capability(capability: EntropyCapability) -> Result<Self> {
        if let Some(missing) = capability.missing() {
            warn!(missing, "hardware entropy unavailable");
            return Err(Error::EntropyUnavailable { missing });
        }
        Ok(Self { _private: () })
    }

    /// Whether the host CPU can back a `HardwareEntropy`
    pub fn is_supported() -> bool {
        EntropyCapability::detect().is_supported()
    }
}

impl EntropySource for HardwareEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        if dest.is_empty() {
            return Ok(());
        }

        let produced = rdrand_get_bytes(dest);
        if produced < dest.len() {
            dest.zeroize();
            warn!(requested = dest.len(), produced, "hardware entropy underfill");
            return Err(Error::EntropyExhausted {
                requested: dest.len(),
                produced,
            });
        }
        Ok(())
    }

    fn generator(&self) -> RawGenerator<'_> {
        // SAFETY: the callback ignores its context, so a null context is valid
        // for any lifetime.
        unsafe { RawGenerator::from_raw(hardware_rng, core::ptr::null_mut()) }
    }
}

/// C-ABI callback over RDRAND
unsafe extern "C" fn hardware_rng(_context: *mut c_void, output: *mut u8, len: usize) -> c_int {
    if len == 0 {
        return 0;
    }
    if output.is_null() {
        return -1;
    }

    // SAFETY: the caller hands over `len` writable bytes at `output`.
    let dest = unsafe { core::slice::from_raw_parts_mut(output, len) };
    if rdrand_get_bytes(dest) < len {
        dest.zeroize();
        return -1;
    }
    0
}

/// Fill `dest` from RDRAND and return the number of bytes produced
///
/// Only reachable through a `HardwareEntropy`, which exists only once the
/// capability check found RDRAND.
fn rdrand_get_bytes(dest: &mut [u8]) -> usize {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        // SAFETY: RDRAND support was established by capability detection.
        unsafe { arch::rdrand_fill(dest) }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        let _ = dest;
        0
    }
}

#[cfg(target_arch = "x86_64")]
mod arch {
    use core::arch::x86_64::_rdrand64_step;
    use ecid_params::utils::entropy::RDRAND_RETRY_LIMIT;

    /// Fill word by word, giving each word `RDRAND_RETRY_LIMIT` attempts;
    /// stop at the first word the hardware cannot deliver.
    #[target_feature(enable = "rdrand")]
    pub(super) unsafe fn rdrand_fill(dest: &mut [u8]) -> usize {
        let mut produced = 0;
        for chunk in dest.chunks_mut(8) {
            let mut word = 0u64;
            let mut ok = false;
            for _ in 0..RDRAND_RETRY_LIMIT {
                if _rdrand64_step(&mut word) == 1 {
                    ok = true;
                    break;
                }
            }
            if !ok {
                break;
            }
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
            produced += chunk.len();
        }
        produced
    }
}

#[cfg(target_arch = "x86")]
mod arch {
    use core::arch::x86::_rdrand32_step;
    use ecid_params::utils::entropy::RDRAND_RETRY_LIMIT;

    #[target_feature(enable = "rdrand")]
    pub(super) unsafe fn rdrand_fill(dest: &mut [u8]) -> usize {
        let mut produced = 0;
        for chunk in dest.chunks_mut(4) {
            let mut word = 0u32;
            let mut ok = false;
            for _ in 0..RDRAND_RETRY_LIMIT {
                if _rdrand32_step(&mut word) == 1 {
                    ok = true;
                    break;
                }
            }
            if !ok {
                break;
            }
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
            produced += chunk.len();
        }
        produced
    }
}
