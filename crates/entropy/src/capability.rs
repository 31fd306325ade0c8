//! CPU random-number capability
//!
//! Detection runs at most once per process. Concurrent first callers block on
//! the same initialisation and all observe its result.

use once_cell::sync::OnceCell;
use tracing::info;

static CAPABILITY: OnceCell<EntropyCapability> = OnceCell::new();

#[cfg(test)]
pub(crate) static DETECTION_RUNS: core::sync::atomic::AtomicUsize =
    core::sync::atomic::AtomicUsize::new(0);

/// Hardware random-number features of the host CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyCapability {
    rdrand: bool,
    rdseed: bool,
}

impl EntropyCapability {
    /// Capability of the host CPU, detected on first use
    pub fn detect() -> Self {
        *CAPABILITY.get_or_init(Self::run_detection)
    }

    pub(crate) const fn from_features(rdrand: bool, rdseed: bool) -> Self {
        Self { rdrand, rdseed }
    }

    fn run_detection() -> Self {
        #[cfg(test)]
        DETECTION_RUNS.fetch_add(1, core::sync::atomic::Ordering::SeqCst);

        let capability = detect_cpu();
        info!(
            rdrand = capability.rdrand,
            rdseed = capability.rdseed,
            "hardware entropy capability detected"
        );
        capability
    }

    pub fn has_rdrand(&self) -> bool {
        self.rdrand
    }

    pub fn has_rdseed(&self) -> bool {
        self.rdseed
    }

    /// Both features present
    pub fn is_supported(&self) -> bool {
        self.missing().is_none()
    }

    /// Name of the missing feature set, if any
    pub fn missing(&self) -> Option<&'static str> {
        match (self.rdrand, self.rdseed) {
            (true, true) => None,
            (false, true) => Some("RDRAND"),
            (true, false) => Some("RDSEED"),
            (false, false) => Some("RDRAND / RDSEED"),
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_cpu() -> EntropyCapability {
    EntropyCapability::from_features(
        std::is_x86_feature_detected!("rdrand"),
        std::is_x86_feature_detected!("rdseed"),
    )
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn detect_cpu() -> EntropyCapability {
    EntropyCapability::from_features(false, false)
}
