//! Scoped libsecp256k1 sessions
//!
//! A [`ProviderSession`] owns one libsecp256k1 context created for a fixed
//! capability set. The context is destroyed when the session is dropped, on
//! every exit path, exactly once. Sessions are confined to the thread that
//! created them; concurrent callers each create their own.

mod sink;

use core::marker::PhantomData;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use bitflags::bitflags;
use ecid_api::{Error, Result};
use ecid_curve::{digest_for, CurveGroup, Provider};
use ecid_params::traditional::ec::{MAX_KEYGEN_ATTEMPTS, SECP256K1_SCALAR_SIZE};
use rand::{CryptoRng, RngCore};
use secp256k1::ecdsa::Signature;
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey, SignOnly, VerifyOnly};
use secp256k1_sys as ffi;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::identity::entropy_failure;
use crate::interop::SecondaryPublicKey;
use sink::ErrorSink;

const PROVIDER: &str = Provider::Libsecp256k1.name();

static LIVE_SESSIONS: AtomicUsize = AtomicUsize::new(0);

bitflags! {
    /// Capabilities a session context is created with
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SessionFlags: u32 {
        const SIGN = 0b01;
        const VERIFY = 0b10;
    }
}

enum Context {
    SignOnly(Secp256k1<SignOnly>),
    VerifyOnly(Secp256k1<VerifyOnly>),
    Full(Secp256k1<All>),
}

impl Context {
    fn create(flags: SessionFlags) -> Result<Self> {
        let sign = flags.contains(SessionFlags::SIGN);
        let verify = flags.contains(SessionFlags::VERIFY);
        match (sign, verify) {
            (true, true) => Ok(Context::Full(Secp256k1::new())),
            (true, false) => Ok(Context::SignOnly(Secp256k1::signing_only())),
            (false, true) => Ok(Context::VerifyOnly(Secp256k1::verification_only())),
            (false, false) => Err(Error::ProviderInitFailed {
                provider: PROVIDER,
                message: "empty capability set".to_string(),
            }),
        }
    }

    fn raw(&self) -> NonNull<ffi::Context> {
        match self {
            Context::SignOnly(ctx) => ctx.ctx(),
            Context::VerifyOnly(ctx) => ctx.ctx(),
            Context::Full(ctx) => ctx.ctx(),
        }
    }
}

/// Owned libsecp256k1 context
///
/// Illegal arguments detected by the library surface as
/// [`Error::IllegalArgument`] from the session method that triggered them,
/// instead of aborting the process.
pub struct ProviderSession {
    // Declared before `sink`: the context, whose callback points into the
    // sink, is destroyed first.
    context: Context,
    sink: Box<ErrorSink>,
    flags: SessionFlags,
    _thread_bound: PhantomData<*const ()>,
}

impl ProviderSession {
    /// Create a session with the given capabilities
    pub fn new(flags: SessionFlags) -> Result<Self> {
        let context = Context::create(flags)?;
        let sink = Box::new(ErrorSink::new());

        // SAFETY: the context is live, and the sink is boxed so its address is
        // stable for the session's lifetime, which outlasts the context.
        unsafe { sink::install(context.raw(), &sink) };

        LIVE_SESSIONS.fetch_add(1, Ordering::SeqCst);
        debug!(?flags, "libsecp256k1 session created");
        Ok(Self {
            context,
            sink,
            flags,
            _thread_bound: PhantomData,
        })
    }

    /// Number of sessions currently alive in this process
    pub fn live_sessions() -> usize {
        LIVE_SESSIONS.load(Ordering::SeqCst)
    }

    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    #[cfg(test)]
    pub(crate) fn raw_context(&self) -> NonNull<ffi::Context> {
        self.context.raw()
    }

    /// Turn a diagnostic reported during the last library call into an error
    pub(crate) fn check(&self) -> Result<()> {
        match self.sink.take() {
            None => Ok(()),
            Some(message) => {
                warn!(%message, "libsecp256k1 reported an illegal argument");
                Err(Error::IllegalArgument {
                    provider: PROVIDER,
                    message,
                })
            }
        }
    }

    fn missing_capability(&self, capability: &str) -> Error {
        Error::IllegalArgument {
            provider: PROVIDER,
            message: format!("session created with {:?} cannot {}", self.flags, capability),
        }
    }

    /// Re-blind the context with a fresh seed
    pub fn randomize(&mut self, seed: &[u8; 32]) -> Result<()> {
        match &mut self.context {
            Context::SignOnly(ctx) => ctx.seeded_randomize(seed),
            Context::VerifyOnly(ctx) => ctx.seeded_randomize(seed),
            Context::Full(ctx) => ctx.seeded_randomize(seed),
        }
        self.check()
    }

    /// Parse a serialized public key on this session's context
    pub fn parse_public_key(&self, encoded: &[u8]) -> Result<SecondaryPublicKey> {
        // SAFETY: pointer and length come from a live slice.
        unsafe { self.parse_raw(encoded.as_ptr(), encoded.len()) }
    }

    /// # Safety
    ///
    /// `input` is null or points to `len` readable bytes.
    unsafe fn parse_raw(&self, input: *const u8, len: usize) -> Result<SecondaryPublicKey> {
        // SAFETY: only used as an out-pointer below.
        let mut key = unsafe { ffi::PublicKey::new() };
        // SAFETY: the context is live; the library checks `input` for null.
        let parsed = unsafe {
            ffi::secp256k1_ec_pubkey_parse(self.context.raw().as_ptr(), &mut key, input, len)
        };
        self.check()?;
        if parsed != 1 {
            return Err(Error::MalformedPoint {
                context: "libsecp256k1 public key parse",
                message: format!("{}-byte encoding is not a valid secp256k1 point", len),
            });
        }
        Ok(PublicKey::from(key).into())
    }

    /// Public key of `secret`
    pub fn public_key(&self, secret: &SecretKey) -> Result<SecondaryPublicKey> {
        let key = match &self.context {
            Context::SignOnly(ctx) => PublicKey::from_secret_key(ctx, secret),
            Context::Full(ctx) => PublicKey::from_secret_key(ctx, secret),
            Context::VerifyOnly(_) => return Err(self.missing_capability("derive public keys")),
        };
        self.check()?;
        Ok(key.into())
    }

    /// Generate a key pair from `rng`
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(SecretKey, SecondaryPublicKey)> {
        let mut bytes = Zeroizing::new([0u8; SECP256K1_SCALAR_SIZE]);
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes[..])
                .map_err(|err| entropy_failure(err, SECP256K1_SCALAR_SIZE))?;
            // Zero or >= n: draw again
            if let Ok(secret) = SecretKey::from_slice(&bytes[..]) {
                let public = self.public_key(&secret)?;
                return Ok((secret, public));
            }
        }
        Err(Error::InvalidKey {
            context: "libsecp256k1 key generation",
            message: format!("no valid scalar in {} draws", MAX_KEYGEN_ATTEMPTS),
        })
    }

    /// ECDSA-sign a 32-byte digest; returns the compact `r || s` encoding
    pub fn sign(&self, digest: &[u8], secret: &SecretKey) -> Result<[u8; 64]> {
        let message = message_from_digest(digest)?;
        let signature = match &self.context {
            Context::SignOnly(ctx) => ctx.sign_ecdsa(&message, secret),
            Context::Full(ctx) => ctx.sign_ecdsa(&message, secret),
            Context::VerifyOnly(_) => return Err(self.missing_capability("sign")),
        };
        self.check()?;
        Ok(signature.serialize_compact())
    }

    /// Verify a compact ECDSA signature over a 32-byte digest
    ///
    /// High-S signatures are normalized first, since the other provider does
    /// not always produce low-S form.
    pub fn verify(&self, digest: &[u8], signature: &[u8], key: &SecondaryPublicKey) -> Result<()> {
        let message = message_from_digest(digest)?;
        let mut signature = Signature::from_compact(signature).map_err(|err| {
            Error::InvalidSignature {
                context: "libsecp256k1 compact signature",
                message: err.to_string(),
            }
        })?;
        signature.normalize_s();

        let verified = match &self.context {
            Context::VerifyOnly(ctx) => ctx.verify_ecdsa(&message, &signature, key.inner()),
            Context::Full(ctx) => ctx.verify_ecdsa(&message, &signature, key.inner()),
            Context::SignOnly(_) => return Err(self.missing_capability("verify")),
        };
        self.check()?;
        verified.map_err(|err| Error::InvalidSignature {
            context: "libsecp256k1 verification",
            message: err.to_string(),
        })
    }

    /// Sign `message` under the secp256k1 digest
    pub fn sign_message(&self, message: &[u8], secret: &SecretKey) -> Result<[u8; 64]> {
        let digest = digest_for(CurveGroup::Secp256k1).digest(message);
        self.sign(&digest, secret)
    }

    /// Verify a signature over `message` under the secp256k1 digest
    pub fn verify_message(
        &self,
        message: &[u8],
        signature: &[u8],
        key: &SecondaryPublicKey,
    ) -> Result<()> {
        let digest = digest_for(CurveGroup::Secp256k1).digest(message);
        self.verify(&digest, signature, key)
    }
}

impl Drop for ProviderSession {
    fn drop(&mut self) {
        LIVE_SESSIONS.fetch_sub(1, Ordering::SeqCst);
        debug!(flags = ?self.flags, "libsecp256k1 session released");
    }
}

impl core::fmt::Debug for ProviderSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProviderSession")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

fn message_from_digest(digest: &[u8]) -> Result<Message> {
    Message::from_digest_slice(digest).map_err(|_| Error::IllegalArgument {
        provider: PROVIDER,
        message: format!("digest must be 32 bytes, got {}", digest.len()),
    })
}
