//! Encoded sizes for the supported curves

/// Capacity of the transient buffer a point is serialized into during key
/// interop. Any encoding longer than this is rejected, never truncated.
pub const ECP_NUM_SIZE: usize = 100;

/// Size of a compressed secp256k1 point (0x02/0x03 || X)
pub const SECP256K1_POINT_COMPRESSED_SIZE: usize = 33;

/// Size of an uncompressed secp256k1 point (0x04 || X || Y)
pub const SECP256K1_POINT_UNCOMPRESSED_SIZE: usize = 65;

/// Size of a secp256k1 secret scalar
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of a compact secp256k1 ECDSA signature (r || s)
pub const SECP256K1_SIGNATURE_SIZE: usize = 64;

/// Size of a compressed P-384 point (0x02/0x03 || X)
pub const SECP384R1_POINT_COMPRESSED_SIZE: usize = 49;

/// Size of a P-384 secret scalar
pub const SECP384R1_SCALAR_SIZE: usize = 48;

/// Size of a fixed-width P-384 ECDSA signature (r || s)
pub const SECP384R1_SIGNATURE_SIZE: usize = 96;

/// Size of an Ed25519 public key (compressed Edwards y with sign bit)
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 secret seed
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Size of an Ed25519 signature
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Upper bound on attempts to draw a valid secret scalar from random bytes
pub const MAX_KEYGEN_ATTEMPTS: usize = 16;
