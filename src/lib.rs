//! # ecid
//!
//! A curve-agnostic identity key layer for TLS-capable services.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecid = "0.3"
//! ```
//!
//! ## Features
//!
//! - `ed25519` (default): Ed25519 identity keys
//! - `entropy` (default): RDRAND-backed hardware entropy
//! - `provider` (default): identity keys, libsecp256k1 sessions and key interop
//! - `identity-*`: pick the build's default identity curve (`secp384r1` otherwise)
//! - `serde`: (de)serialization of curve kinds and [`curve::IdentityConfig`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecid-api`]: Error type and the entropy source trait
//! - [`ecid-params`]: Sizes, PEM framing and retry limits
//! - [`ecid-curve`]: Curve classification and the curve registry
//! - [`ecid-entropy`]: Hardware entropy source
//! - [`ecid-provider`]: Provider sessions, identity keys and key interop

// Core re-exports (always available)
pub use ecid_api as api;
pub use ecid_curve as curve;
pub use ecid_params as params;

// Feature-gated re-exports
#[cfg(feature = "entropy")]
pub use ecid_entropy as entropy;

#[cfg(feature = "provider")]
pub use ecid_provider as provider;

/// Common imports for ecid users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::EntropySource;

    // Curve classification
    pub use crate::curve::{
        digest_for, profile_for, CurveGroup, CurveKind, CurveProfile, DigestAlgorithm,
        IdentityConfig, SERVICE_IDENTITY_CURVE,
    };

    #[cfg(feature = "entropy")]
    pub use crate::entropy::{EntropyRng, HardwareEntropy};

    #[cfg(feature = "provider")]
    pub use crate::provider::{
        convert_to_secondary, import_into_primary, IdentityKey, IdentityPublicKey,
        ProviderSession, SessionFlags,
    };
}
