//! Primary-provider identity keys
//!
//! Keys of every curve in the closed set, backed by the RustCrypto crates.
//! ECDSA curves sign the prehash produced by their profile digest and emit
//! fixed-width `r || s` signatures; Ed25519 signs the message itself.

use core::fmt;

use ecid_api::{Error, Result};
use ecid_curve::{profile_for, CurveGroup, CurveKind, CurveProfile, Provider};
use ecid_params::traditional::ec::{
    ED25519_SECRET_KEY_SIZE, MAX_KEYGEN_ATTEMPTS, SECP256K1_SCALAR_SIZE, SECP384R1_SCALAR_SIZE,
};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};

const PROVIDER: &str = Provider::RustCrypto.name();

/// Map a generator failure onto the identity-layer error
///
/// Errors raised by an `ecid` entropy source come back unchanged; foreign
/// generator errors count as a complete underfill.
pub(crate) fn entropy_failure(err: rand::Error, requested: usize) -> Error {
    match err.inner().downcast_ref::<Error>() {
        Some(inner) => inner.clone(),
        None => Error::EntropyExhausted {
            requested,
            produced: 0,
        },
    }
}

/// Draw `N` bytes until `parse` accepts them as a secret
fn draw_secret<const N: usize, T, R>(rng: &mut R, parse: impl Fn(&[u8; N]) -> Option<T>) -> Result<T>
where
    R: CryptoRng + RngCore,
{
    let mut bytes = Zeroizing::new([0u8; N]);
    for _ in 0..MAX_KEYGEN_ATTEMPTS {
        rng.try_fill_bytes(&mut bytes[..])
            .map_err(|err| entropy_failure(err, N))?;
        if let Some(secret) = parse(&*bytes) {
            return Ok(secret);
        }
    }
    Err(Error::InvalidKey {
        context: "identity key generation",
        message: format!("no valid scalar in {} draws", MAX_KEYGEN_ATTEMPTS),
    })
}

fn signing_failure(err: impl fmt::Display) -> Error {
    Error::InvalidSignature {
        context: "identity signing",
        message: err.to_string(),
    }
}

fn verify_failure(err: impl fmt::Display) -> Error {
    Error::InvalidSignature {
        context: "identity verification",
        message: err.to_string(),
    }
}

/// Identity signing key
pub enum IdentityKey {
    Secp384r1(p384::ecdsa::SigningKey),
    #[cfg(feature = "ed25519")]
    Ed25519(ed25519_dalek::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
}

impl IdentityKey {
    /// Generate a key for `curve` from `rng`
    ///
    /// `Secp256k1Bitcoin` keys belong to libsecp256k1 and are generated
    /// through `ProviderSession::generate_keypair` instead.
    pub fn generate<R: CryptoRng + RngCore>(curve: CurveKind, rng: &mut R) -> Result<Self> {
        let key = match curve {
            CurveKind::Secp384r1 => draw_secret::<SECP384R1_SCALAR_SIZE, _, _>(rng, |bytes| {
                p384::ecdsa::SigningKey::from_slice(bytes).ok()
            })
            .map(IdentityKey::Secp384r1)?,
            #[cfg(feature = "ed25519")]
            CurveKind::Ed25519 => draw_secret::<ED25519_SECRET_KEY_SIZE, _, _>(rng, |bytes| {
                Some(ed25519_dalek::SigningKey::from_bytes(bytes))
            })
            .map(IdentityKey::Ed25519)?,
            CurveKind::Secp256k1RustCrypto => {
                draw_secret::<SECP256K1_SCALAR_SIZE, _, _>(rng, |bytes| {
                    k256::ecdsa::SigningKey::from_slice(bytes).ok()
                })
                .map(IdentityKey::Secp256k1)?
            }
            CurveKind::Secp256k1Bitcoin => {
                return Err(Error::IllegalArgument {
                    provider: PROVIDER,
                    message: format!("{} keys are generated by libsecp256k1", curve),
                })
            }
        };
        debug!(%curve, "identity key generated");
        Ok(key)
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            IdentityKey::Secp384r1(_) => CurveKind::Secp384r1,
            #[cfg(feature = "ed25519")]
            IdentityKey::Ed25519(_) => CurveKind::Ed25519,
            IdentityKey::Secp256k1(_) => CurveKind::Secp256k1RustCrypto,
        }
    }

    pub fn profile(&self) -> CurveProfile {
        profile_for(self.kind())
    }

    pub fn public_key(&self) -> IdentityPublicKey {
        match self {
            IdentityKey::Secp384r1(key) => IdentityPublicKey::Secp384r1(p384::ecdsa::VerifyingKey::from(key)),
            #[cfg(feature = "ed25519")]
            IdentityKey::Ed25519(key) => IdentityPublicKey::Ed25519(key.verifying_key()),
            IdentityKey::Secp256k1(key) => IdentityPublicKey::Secp256k1(k256::ecdsa::VerifyingKey::from(key)),
        }
    }

    /// Sign `message` under this key's profile
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest = self.profile().digest;
        match self {
            IdentityKey::Secp384r1(key) => {
                let signature: p384::ecdsa::Signature = key
                    .sign_prehash(&digest.digest(message))
                    .map_err(signing_failure)?;
                Ok(signature.to_bytes().to_vec())
            }
            #[cfg(feature = "ed25519")]
            IdentityKey::Ed25519(key) => {
                use ed25519_dalek::Signer;
                Ok(key.sign(message).to_bytes().to_vec())
            }
            IdentityKey::Secp256k1(key) => {
                let signature: k256::ecdsa::Signature = key
                    .sign_prehash(&digest.digest(message))
                    .map_err(signing_failure)?;
                Ok(signature.to_bytes().to_vec())
            }
        }
    }
}

impl fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityKey")
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

/// Identity verification key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityPublicKey {
    Secp384r1(p384::ecdsa::VerifyingKey),
    #[cfg(feature = "ed25519")]
    Ed25519(ed25519_dalek::VerifyingKey),
    Secp256k1(k256::ecdsa::VerifyingKey),
}

impl IdentityPublicKey {
    /// Parse a key of `group` from its point encoding
    ///
    /// ECDSA groups accept SEC1 encodings; Curve25519 takes the 32-byte
    /// Edwards encoding.
    pub fn from_encoded(group: CurveGroup, encoded: &[u8]) -> Result<Self> {
        let malformed = |message: String| Error::MalformedPoint {
            context: "rustcrypto public key parse",
            message,
        };
        match group {
            CurveGroup::Secp384r1 => p384::ecdsa::VerifyingKey::from_sec1_bytes(encoded)
                .map(IdentityPublicKey::Secp384r1)
                .map_err(|err| malformed(err.to_string())),
            #[cfg(feature = "ed25519")]
            CurveGroup::Curve25519 => {
                let bytes: &[u8; 32] = encoded.try_into().map_err(|_| {
                    malformed(format!("expected 32 bytes, got {}", encoded.len()))
                })?;
                ed25519_dalek::VerifyingKey::from_bytes(bytes)
                    .map(IdentityPublicKey::Ed25519)
                    .map_err(|err| malformed(err.to_string()))
            }
            CurveGroup::Secp256k1 => k256::ecdsa::VerifyingKey::from_sec1_bytes(encoded)
                .map(IdentityPublicKey::Secp256k1)
                .map_err(|err| malformed(err.to_string())),
        }
    }

    pub fn group(&self) -> CurveGroup {
        match self {
            IdentityPublicKey::Secp384r1(_) => CurveGroup::Secp384r1,
            #[cfg(feature = "ed25519")]
            IdentityPublicKey::Ed25519(_) => CurveGroup::Curve25519,
            IdentityPublicKey::Secp256k1(_) => CurveGroup::Secp256k1,
        }
    }

    /// Compressed point encoding (SEC1 for ECDSA groups)
    pub fn to_compressed_point(&self) -> Vec<u8> {
        match self {
            IdentityPublicKey::Secp384r1(key) => key.to_encoded_point(true).as_bytes().to_vec(),
            #[cfg(feature = "ed25519")]
            IdentityPublicKey::Ed25519(key) => key.to_bytes().to_vec(),
            IdentityPublicKey::Secp256k1(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        }
    }

    /// Verify `signature` over `message` with this group's digest
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let digest = ecid_curve::digest_for(self.group());
        match self {
            IdentityPublicKey::Secp384r1(key) => {
                let signature =
                    p384::ecdsa::Signature::from_slice(signature).map_err(verify_failure)?;
                key.verify_prehash(&digest.digest(message), &signature)
                    .map_err(verify_failure)
            }
            #[cfg(feature = "ed25519")]
            IdentityPublicKey::Ed25519(key) => {
                use ed25519_dalek::Verifier;
                let signature =
                    ed25519_dalek::Signature::from_slice(signature).map_err(verify_failure)?;
                key.verify(message, &signature).map_err(verify_failure)
            }
            IdentityPublicKey::Secp256k1(key) => {
                let signature =
                    k256::ecdsa::Signature::from_slice(signature).map_err(verify_failure)?;
                key.verify_prehash(&digest.digest(message), &signature)
                    .map_err(verify_failure)
            }
        }
    }
}
