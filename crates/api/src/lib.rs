//! Public API traits and types for the ecid identity layer
//!
//! This crate provides the shared surface of the ecid workspace: the error
//! type every component reports through, and the [`EntropySource`] trait that
//! key-generation code consumes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{EntropySource, RawGenerator, RngFn};

// Re-export trait modules for direct access
pub use traits::entropy;
