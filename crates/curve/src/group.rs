//! Curve groups
//!
//! A [`CurveGroup`] is the provider-independent curve identity. It is what
//! remains known after parsing a key from raw bytes, when the provider that
//! produced the key is no longer known.

use core::fmt;

use ecid_api::{Error, Result};
use ecid_params::traditional::groups::{
    TLS_GROUP_CURVE25519, TLS_GROUP_SECP256K1, TLS_GROUP_SECP384R1,
};

/// Curve group, tagged with its TLS NamedGroup codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CurveGroup {
    Secp256k1 = TLS_GROUP_SECP256K1,
    Secp384r1 = TLS_GROUP_SECP384R1,
    #[cfg(feature = "ed25519")]
    Curve25519 = TLS_GROUP_CURVE25519,
}

impl CurveGroup {
    /// Every curve group compiled into this build
    pub const ALL: &'static [CurveGroup] = &[
        CurveGroup::Secp256k1,
        CurveGroup::Secp384r1,
        #[cfg(feature = "ed25519")]
        CurveGroup::Curve25519,
    ];

    /// Raw group identifier
    pub const fn id(self) -> u16 {
        self as u16
    }

    pub const fn name(self) -> &'static str {
        match self {
            CurveGroup::Secp256k1 => "secp256k1",
            CurveGroup::Secp384r1 => "secp384r1",
            #[cfg(feature = "ed25519")]
            CurveGroup::Curve25519 => "curve25519",
        }
    }
}

impl TryFrom<u16> for CurveGroup {
    type Error = Error;

    fn try_from(raw: u16) -> Result<Self> {
        match raw {
            TLS_GROUP_SECP256K1 => Ok(CurveGroup::Secp256k1),
            TLS_GROUP_SECP384R1 => Ok(CurveGroup::Secp384r1),
            #[cfg(feature = "ed25519")]
            TLS_GROUP_CURVE25519 => Ok(CurveGroup::Curve25519),
            _ => Err(Error::UnsupportedCurve {
                context: "curve group",
                raw: u32::from(raw),
            }),
        }
    }
}

impl fmt::Display for CurveGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
