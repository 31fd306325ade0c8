//! Curve identities
//!
//! [`CurveKind`] names the algorithm a node's identity key uses, including the
//! provider for curves that more than one library implements.

use core::fmt;
use core::str::FromStr;

use ecid_api::{Error, Result};

/// Supported identity curves
///
/// The discriminants are stable raw tags used in diagnostics and when a curve
/// kind crosses a serialization boundary as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurveKind {
    /// NIST P-384 through the RustCrypto `p384` crate
    Secp384r1 = 1,

    /// Ed25519 through `ed25519-dalek`
    #[cfg(feature = "ed25519")]
    Ed25519 = 2,

    /// secp256k1 through the RustCrypto `k256` crate
    Secp256k1RustCrypto = 3,

    /// secp256k1 through libsecp256k1 (the `secp256k1` crate)
    Secp256k1Bitcoin = 4,
}

impl CurveKind {
    /// Every curve kind compiled into this build
    pub const ALL: &'static [CurveKind] = &[
        CurveKind::Secp384r1,
        #[cfg(feature = "ed25519")]
        CurveKind::Ed25519,
        CurveKind::Secp256k1RustCrypto,
        CurveKind::Secp256k1Bitcoin,
    ];

    /// Stable raw tag
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Configuration name
    pub const fn as_str(self) -> &'static str {
        match self {
            CurveKind::Secp384r1 => "secp384r1",
            #[cfg(feature = "ed25519")]
            CurveKind::Ed25519 => "ed25519",
            CurveKind::Secp256k1RustCrypto => "secp256k1_rustcrypto",
            CurveKind::Secp256k1Bitcoin => "secp256k1_bitcoin",
        }
    }
}

impl TryFrom<u8> for CurveKind {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            1 => Ok(CurveKind::Secp384r1),
            #[cfg(feature = "ed25519")]
            2 => Ok(CurveKind::Ed25519),
            3 => Ok(CurveKind::Secp256k1RustCrypto),
            4 => Ok(CurveKind::Secp256k1Bitcoin),
            _ => Err(Error::UnsupportedCurve {
                context: "curve kind",
                raw: u32::from(raw),
            }),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        CurveKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownCurveName {
                name: name.to_string(),
            })
    }
}

/// Serialized as the configuration name; deserialized through [`FromStr`], so
/// configuration files accept the same spellings as [`str::parse`].
#[cfg(feature = "serde")]
impl serde::Serialize for CurveKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CurveKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Process-wide identity curve selected at build time
///
/// Chosen by the `identity-*` cargo features in the order secp384r1, ed25519,
/// secp256k1 (RustCrypto), secp256k1 (libsecp256k1). Without any of them the
/// identity curve is secp384r1.
#[cfg(feature = "identity-secp384r1")]
pub const SERVICE_IDENTITY_CURVE: CurveKind = CurveKind::Secp384r1;

#[cfg(all(not(feature = "identity-secp384r1"), feature = "identity-ed25519"))]
pub const SERVICE_IDENTITY_CURVE: CurveKind = CurveKind::Ed25519;

#[cfg(all(
    not(any(feature = "identity-secp384r1", feature = "identity-ed25519")),
    feature = "identity-secp256k1-rustcrypto"
))]
pub const SERVICE_IDENTITY_CURVE: CurveKind = CurveKind::Secp256k1RustCrypto;

#[cfg(all(
    not(any(
        feature = "identity-secp384r1",
        feature = "identity-ed25519",
        feature = "identity-secp256k1-rustcrypto"
    )),
    feature = "identity-secp256k1-bitcoin"
))]
pub const SERVICE_IDENTITY_CURVE: CurveKind = CurveKind::Secp256k1Bitcoin;

#[cfg(not(any(
    feature = "identity-secp384r1",
    feature = "identity-ed25519",
    feature = "identity-secp256k1-rustcrypto",
    feature = "identity-secp256k1-bitcoin"
)))]
pub const SERVICE_IDENTITY_CURVE: CurveKind = CurveKind::Secp384r1;
