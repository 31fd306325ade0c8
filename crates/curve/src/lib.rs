//! Curve classification for identity keys
//!
//! This crate answers, for every supported identity curve, which curve group
//! it belongs to, which digest signs under it, which providers implement it,
//! and how its keys are framed in PEM. All lookups are pure functions over
//! static data and may be called from any thread.
//!
//! ```
//! use ecid_curve::{profile_for, CurveKind, DigestAlgorithm};
//!
//! let profile = profile_for(CurveKind::Secp256k1Bitcoin);
//! assert_eq!(profile.digest, DigestAlgorithm::Sha256);
//! assert!(profile.has_secondary_provider());
//! ```

pub mod config;
pub mod digest;
pub mod group;
pub mod kind;
pub mod profile;

pub use config::IdentityConfig;
pub use digest::DigestAlgorithm;
pub use group::CurveGroup;
pub use kind::{CurveKind, SERVICE_IDENTITY_CURVE};
pub use profile::{
    digest_for, digest_for_raw, profile_for, profile_for_raw, CurveProfile, PemFraming, Provider,
    CERTIFICATE_PEM, EC_PRIVATE_KEY_PEM, PKCS8_PRIVATE_KEY_PEM, PREFER_LIBSECP256K1, PUBLIC_KEY_PEM,
};
