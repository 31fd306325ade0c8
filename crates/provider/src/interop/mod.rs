//! Key interop between the RustCrypto and libsecp256k1 providers
//!
//! A public key leaves one provider as a compressed point in a fixed-capacity
//! [`PublicKeyPoint`] and is re-parsed by the other. Only curves whose
//! profile lists an alternate provider take part; for every other curve the
//! conversion fails with [`Error::NoSecondaryProvider`] before either
//! provider is called.
//!
//! The functions here never create sessions. Callers pass in the session the
//! conversion runs against and keep ownership of it.

use core::fmt;

use ecid_api::{Error, Result};
use ecid_curve::{profile_for, CurveGroup, CurveKind};
use ecid_params::traditional::ec::{ECP_NUM_SIZE, SECP256K1_POINT_COMPRESSED_SIZE};
use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;

use crate::identity::IdentityPublicKey;
use crate::session::ProviderSession;

/// Compressed public key point in transit between providers
///
/// The encoding is sealed with a SHA-256 tag when the point is exported and
/// checked again on import, so bytes changed in between are rejected rather
/// than parsed as a different valid key.
#[derive(Clone)]
pub struct PublicKeyPoint {
    group: CurveGroup,
    len: usize,
    bytes: [u8; ECP_NUM_SIZE],
    seal: [u8; 32],
}

impl PublicKeyPoint {
    pub(crate) fn from_encoded(group: CurveGroup, encoded: &[u8]) -> Result<Self> {
        if encoded.len() > ECP_NUM_SIZE {
            return Err(Error::EncodingOverflow {
                context: "public key point",
                needed: encoded.len(),
                capacity: ECP_NUM_SIZE,
            });
        }

        let mut bytes = [0u8; ECP_NUM_SIZE];
        bytes[..encoded.len()].copy_from_slice(encoded);
        Ok(Self {
            group,
            len: encoded.len(),
            bytes,
            seal: seal(group, encoded),
        })
    }

    pub fn group(&self) -> CurveGroup {
        self.group
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_seal(&self) -> Result<()> {
        let intact = self.len <= ECP_NUM_SIZE
            && bool::from(seal(self.group, &self.bytes[..self.len])[..].ct_eq(&self.seal[..]));
        if intact {
            Ok(())
        } else {
            Err(Error::MalformedPoint {
                context: "public key point",
                message: "encoding changed after export".to_string(),
            })
        }
    }
}

fn seal(group: CurveGroup, encoded: &[u8]) -> [u8; 32] {
    Sha256::new()
        .chain_update(group.id().to_be_bytes())
        .chain_update(encoded)
        .finalize()
        .into()
}

impl ConstantTimeEq for PublicKeyPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.group.id().ct_eq(&other.group.id())
            & (self.len as u64).ct_eq(&(other.len as u64))
            & self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for PublicKeyPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKeyPoint {}

impl AsRef<[u8]> for PublicKeyPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for PublicKeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKeyPoint")
            .field("group", &self.group)
            .field("encoded", &self.as_bytes())
            .finish()
    }
}

/// Public key held by libsecp256k1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryPublicKey(secp256k1::PublicKey);

impl SecondaryPublicKey {
    pub fn inner(&self) -> &secp256k1::PublicKey {
        &self.0
    }

    /// Compressed SEC1 encoding
    pub fn serialize(&self) -> [u8; SECP256K1_POINT_COMPRESSED_SIZE] {
        self.0.serialize()
    }
}

impl From<secp256k1::PublicKey> for SecondaryPublicKey {
    fn from(key: secp256k1::PublicKey) -> Self {
        Self(key)
    }
}

fn require_secondary(group: CurveGroup) -> Result<()> {
    if profile_for(CurveKind::for_group(group)).has_secondary_provider() {
        Ok(())
    } else {
        Err(Error::NoSecondaryProvider { curve: group.name() })
    }
}

/// Export a primary-provider key as a compressed point
pub fn export_compressed_point(key: &IdentityPublicKey) -> Result<PublicKeyPoint> {
    require_secondary(key.group())?;
    PublicKeyPoint::from_encoded(key.group(), &key.to_compressed_point())
        .map_err(|err| err.with_context("primary export"))
}

/// Import a point into libsecp256k1 through `session`
pub fn import_into_secondary(
    session: &ProviderSession,
    point: &PublicKeyPoint,
) -> Result<SecondaryPublicKey> {
    require_secondary(point.group())?;
    point.check_seal()?;

    if point.len() != SECP256K1_POINT_COMPRESSED_SIZE {
        return Err(Error::MalformedPoint {
            context: "secondary import",
            message: format!(
                "compressed secp256k1 point is {} bytes, got {}",
                SECP256K1_POINT_COMPRESSED_SIZE,
                point.len()
            ),
        });
    }

    let key = session
        .parse_public_key(point.as_bytes())
        .map_err(|err| err.with_context("secondary import"))?;

    if !bool::from(key.serialize()[..].ct_eq(point.as_bytes())) {
        return Err(Error::MalformedPoint {
            context: "secondary import",
            message: "point does not re-encode to the same bytes".to_string(),
        });
    }

    debug!(group = %point.group(), "public key imported into libsecp256k1");
    Ok(key)
}

/// Move a primary-provider key into libsecp256k1
pub fn convert_to_secondary(
    session: &ProviderSession,
    key: &IdentityPublicKey,
) -> Result<SecondaryPublicKey> {
    let point = export_compressed_point(key)?;
    import_into_secondary(session, &point)
}

/// Export a libsecp256k1 key as a compressed point
pub fn export_secondary_point(key: &SecondaryPublicKey) -> Result<PublicKeyPoint> {
    PublicKeyPoint::from_encoded(CurveGroup::Secp256k1, &key.serialize())
        .map_err(|err| err.with_context("secondary export"))
}

/// Import a point into the primary provider
pub fn import_into_primary(point: &PublicKeyPoint) -> Result<IdentityPublicKey> {
    require_secondary(point.group())?;
    point.check_seal()?;

    let key = IdentityPublicKey::from_encoded(point.group(), point.as_bytes())
        .map_err(|err| err.with_context("primary import"))?;
    debug!(group = %point.group(), "public key imported into rustcrypto");
    Ok(key)
}
