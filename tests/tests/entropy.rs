//! Hardware entropy as a key generation source

use ecid::prelude::*;
use ecid_entropy::{randombytes, EntropyCapability};

/// The hardware source, or `None` on CPUs without RDRAND and RDSEED
fn hardware() -> Option<HardwareEntropy> {
    match HardwareEntropy::new() {
        Ok(source) => Some(source),
        Err(err) => {
            assert!(matches!(err, Error::EntropyUnavailable { .. }));
            assert!(!EntropyCapability::detect().is_supported());
            None
        }
    }
}

#[test]
fn test_capability_matches_construction() {
    assert_eq!(hardware().is_some(), EntropyCapability::detect().is_supported());
}

#[test]
fn test_identity_keys_from_hardware_entropy() {
    let Some(source) = hardware() else { return };
    let mut rng = EntropyRng::new(&source);

    for kind in [CurveKind::Secp384r1, CurveKind::Ed25519, CurveKind::Secp256k1RustCrypto] {
        let key = IdentityKey::generate(kind, &mut rng).unwrap();
        let signature = key.sign(b"entropy").unwrap();
        key.public_key().verify(b"entropy", &signature).unwrap();
    }
}

#[test]
fn test_session_keys_from_hardware_entropy() {
    let Some(source) = hardware() else { return };
    let mut rng = EntropyRng::new(&source);

    let mut session = ProviderSession::new(SessionFlags::SIGN | SessionFlags::VERIFY).unwrap();
    let seed: [u8; 32] = source.random(32).unwrap().try_into().unwrap();
    session.randomize(&seed).unwrap();

    let (secret, public) = session.generate_keypair(&mut rng).unwrap();
    let signature = session.sign_message(b"blinded", &secret).unwrap();
    session.verify_message(b"blinded", &signature, &public).unwrap();
}

#[test]
fn test_randombytes() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    match (randombytes(&mut a), randombytes(&mut b)) {
        (Ok(()), Ok(())) => assert_ne!(a, b),
        (Err(err), _) | (_, Err(err)) => {
            assert!(matches!(err, Error::EntropyUnavailable { .. }), "{}", err)
        }
    }
}

#[test]
fn test_zero_length_request() {
    let Some(source) = hardware() else { return };
    assert!(source.random(0).unwrap().is_empty());
}
