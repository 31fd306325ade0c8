//! Constants for hardware entropy

/// Per-word retry limit for RDRAND, as recommended by Intel's DRNG
/// software implementation guide
pub const RDRAND_RETRY_LIMIT: usize = 10;

/// Upper bound on whole-request retries after an entropy underfill
pub const MAX_ENTROPY_ATTEMPTS: usize = 3;
