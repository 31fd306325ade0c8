//! Curve group identifiers
//!
//! Values are the TLS NamedGroup codepoints from the IANA registry, which
//! gives every group a stable raw identifier for diagnostics.

/// secp256k1 NamedGroup codepoint
pub const TLS_GROUP_SECP256K1: u16 = 0x0016;

/// secp384r1 NamedGroup codepoint
pub const TLS_GROUP_SECP384R1: u16 = 0x0018;

/// x25519 NamedGroup codepoint, used for the Curve25519 family
pub const TLS_GROUP_CURVE25519: u16 = 0x001D;
