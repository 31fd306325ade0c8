//! Provider sessions and cross-provider key interop
//!
//! Identity keys live in the pure-Rust RustCrypto curve crates. secp256k1
//! keys can additionally be moved into libsecp256k1, whose native context is
//! wrapped by [`ProviderSession`].
//!
//! ```
//! use ecid_curve::CurveKind;
//! use ecid_provider::{convert_to_secondary, IdentityKey, ProviderSession, SessionFlags};
//! use rand::rngs::OsRng;
//!
//! let key = IdentityKey::generate(CurveKind::Secp256k1RustCrypto, &mut OsRng)?;
//! let signature = key.sign(b"hello")?;
//!
//! let session = ProviderSession::new(SessionFlags::VERIFY)?;
//! let imported = convert_to_secondary(&session, &key.public_key())?;
//! session.verify_message(b"hello", &signature, &imported)?;
//! # Ok::<(), ecid_api::Error>(())
//! ```

pub mod identity;
pub mod interop;
pub mod session;

pub use identity::{IdentityKey, IdentityPublicKey};
pub use interop::{
    convert_to_secondary, export_compressed_point, export_secondary_point, import_into_primary,
    import_into_secondary, PublicKeyPoint, SecondaryPublicKey,
};
pub use session::{ProviderSession, SessionFlags};

/// Secret key type of the secondary provider
pub use secp256k1::SecretKey as SecondarySecretKey;
