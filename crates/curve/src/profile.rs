//! Curve registry
//!
//! Static, exhaustive mapping from a [`CurveKind`] to everything a signer,
//! verifier or PEM codec needs to know about it. The tables are plain
//! `match` expressions without a fallback arm, so adding a curve kind or group
//! without classifying it fails to build.

use ecid_api::Result;
use ecid_params::traditional::pem::{
    PEM_CERTIFICATE_FOOTER, PEM_CERTIFICATE_HEADER, PEM_EC_PRIVATE_KEY_FOOTER,
    PEM_EC_PRIVATE_KEY_HEADER, PEM_PRIVATE_KEY_FOOTER, PEM_PRIVATE_KEY_HEADER,
    PEM_PUBLIC_KEY_FOOTER, PEM_PUBLIC_KEY_HEADER,
};

use crate::digest::DigestAlgorithm;
use crate::group::CurveGroup;
use crate::kind::CurveKind;

/// For secp256k1, which is available from two providers, a key or signature
/// that arrives as raw bytes is handled by libsecp256k1 when this is set and
/// by RustCrypto `k256` otherwise.
pub const PREFER_LIBSECP256K1: bool = true;

/// Library implementing a curve's arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Pure Rust RustCrypto curve crates (`p384`, `k256`, `ed25519-dalek`)
    RustCrypto,
    /// Native libsecp256k1 through the `secp256k1` crate
    Libsecp256k1,
}

impl Provider {
    pub const fn name(self) -> &'static str {
        match self {
            Provider::RustCrypto => "rustcrypto",
            Provider::Libsecp256k1 => "libsecp256k1",
        }
    }
}

/// PEM header/footer pair handed to the PEM codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PemFraming {
    pub header: &'static str,
    pub footer: &'static str,
}

/// SEC1 `EC PRIVATE KEY` framing
pub const EC_PRIVATE_KEY_PEM: PemFraming = PemFraming {
    header: PEM_EC_PRIVATE_KEY_HEADER,
    footer: PEM_EC_PRIVATE_KEY_FOOTER,
};

/// PKCS#8 `PRIVATE KEY` framing
pub const PKCS8_PRIVATE_KEY_PEM: PemFraming = PemFraming {
    header: PEM_PRIVATE_KEY_HEADER,
    footer: PEM_PRIVATE_KEY_FOOTER,
};

pub const PUBLIC_KEY_PEM: PemFraming = PemFraming {
    header: PEM_PUBLIC_KEY_HEADER,
    footer: PEM_PUBLIC_KEY_FOOTER,
};

pub const CERTIFICATE_PEM: PemFraming = PemFraming {
    header: PEM_CERTIFICATE_HEADER,
    footer: PEM_CERTIFICATE_FOOTER,
};

/// Everything associated with one curve kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveProfile {
    pub kind: CurveKind,
    pub group: CurveGroup,
    pub digest: DigestAlgorithm,
    /// Provider that owns keys of this kind
    pub provider: Provider,
    /// Other provider able to use keys of this curve group, if any
    pub alternate: Option<Provider>,
    /// Private key framing
    pub pem: PemFraming,
}

impl CurveProfile {
    /// Whether keys of this curve can be moved to a second provider
    pub const fn has_secondary_provider(&self) -> bool {
        self.alternate.is_some()
    }

    /// `(digest, group)` pair consumed by signers and verifiers
    pub const fn signing_pair(&self) -> (DigestAlgorithm, CurveGroup) {
        (self.digest, self.group)
    }
}

/// Profile for a curve kind
pub const fn profile_for(curve: CurveKind) -> CurveProfile {
    match curve {
        CurveKind::Secp384r1 => CurveProfile {
            kind: curve,
            group: CurveGroup::Secp384r1,
            digest: DigestAlgorithm::Sha384,
            provider: Provider::RustCrypto,
            alternate: None,
            pem: EC_PRIVATE_KEY_PEM,
        },
        #[cfg(feature = "ed25519")]
        CurveKind::Ed25519 => CurveProfile {
            kind: curve,
            group: CurveGroup::Curve25519,
            digest: DigestAlgorithm::Sha512,
            provider: Provider::RustCrypto,
            alternate: None,
            pem: PKCS8_PRIVATE_KEY_PEM,
        },
        CurveKind::Secp256k1RustCrypto => CurveProfile {
            kind: curve,
            group: CurveGroup::Secp256k1,
            digest: DigestAlgorithm::Sha256,
            provider: Provider::RustCrypto,
            alternate: Some(Provider::Libsecp256k1),
            pem: EC_PRIVATE_KEY_PEM,
        },
        CurveKind::Secp256k1Bitcoin => CurveProfile {
            kind: curve,
            group: CurveGroup::Secp256k1,
            digest: DigestAlgorithm::Sha256,
            provider: Provider::Libsecp256k1,
            alternate: Some(Provider::RustCrypto),
            pem: EC_PRIVATE_KEY_PEM,
        },
    }
}

/// Digest for a curve group
///
/// Used when only the group is known, e.g. after parsing a key from raw
/// bytes. Both secp256k1 providers resolve to the same digest.
pub const fn digest_for(group: CurveGroup) -> DigestAlgorithm {
    match group {
        CurveGroup::Secp256k1 => DigestAlgorithm::Sha256,
        CurveGroup::Secp384r1 => DigestAlgorithm::Sha384,
        #[cfg(feature = "ed25519")]
        CurveGroup::Curve25519 => DigestAlgorithm::Sha512,
    }
}

/// Profile for a raw curve kind tag
pub fn profile_for_raw(raw: u8) -> Result<CurveProfile> {
    CurveKind::try_from(raw).map(profile_for)
}

/// Digest for a raw curve group identifier
pub fn digest_for_raw(raw: u16) -> Result<DigestAlgorithm> {
    CurveGroup::try_from(raw).map(digest_for)
}

impl CurveKind {
    /// Curve group of this kind
    pub const fn group(self) -> CurveGroup {
        profile_for(self).group
    }

    /// Resolve a bare curve group to a curve kind
    ///
    /// secp256k1 resolves according to [`PREFER_LIBSECP256K1`].
    pub const fn for_group(group: CurveGroup) -> CurveKind {
        match group {
            CurveGroup::Secp256k1 if PREFER_LIBSECP256K1 => CurveKind::Secp256k1Bitcoin,
            CurveGroup::Secp256k1 => CurveKind::Secp256k1RustCrypto,
            CurveGroup::Secp384r1 => CurveKind::Secp384r1,
            #[cfg(feature = "ed25519")]
            CurveGroup::Curve25519 => CurveKind::Ed25519,
        }
    }
}
