//! Message digests paired with identity curves

use core::fmt;

use ecid_params::utils::hash::{SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Digest algorithm used when signing under a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Output size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            DigestAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
            DigestAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Hash `data` in one shot
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
