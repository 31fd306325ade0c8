//! Key interop between the RustCrypto and libsecp256k1 providers

use ecid::prelude::*;
use ecid_provider::{
    export_compressed_point, export_secondary_point, import_into_secondary, SecondarySecretKey,
};
use ecid_tests::vectors::secp256k1_points;
use rand::rngs::OsRng;

fn session() -> ProviderSession {
    ProviderSession::new(SessionFlags::SIGN | SessionFlags::VERIFY).unwrap()
}

#[test]
fn test_generator_multiples_agree() {
    let session = session();
    for vector in secp256k1_points().unwrap() {
        let secret = SecondarySecretKey::from_slice(&vector.secret_bytes().unwrap()).unwrap();
        let expected = vector.compressed_bytes().unwrap();

        let secondary = session.public_key(&secret).unwrap();
        assert_eq!(&secondary.serialize()[..], &expected[..]);

        let primary = import_into_primary(&export_secondary_point(&secondary).unwrap()).unwrap();
        assert_eq!(primary.to_compressed_point(), expected);
        assert_eq!(primary.group(), CurveGroup::Secp256k1);
    }
}

#[test]
fn test_primary_signature_verifies_in_secondary() {
    let session = session();
    for _ in 0..16 {
        let key = IdentityKey::generate(CurveKind::Secp256k1RustCrypto, &mut OsRng).unwrap();
        let signature = key.sign(b"certificate verify").unwrap();

        let imported = convert_to_secondary(&session, &key.public_key()).unwrap();
        session
            .verify_message(b"certificate verify", &signature, &imported)
            .unwrap();
    }
}

#[test]
fn test_secondary_signature_verifies_in_primary() {
    let session = session();
    for _ in 0..16 {
        let (secret, public) = session.generate_keypair(&mut OsRng).unwrap();
        let signature = session.sign_message(b"server hello", &secret).unwrap();

        let imported = import_into_primary(&export_secondary_point(&public).unwrap()).unwrap();
        imported.verify(b"server hello", &signature).unwrap();
        assert!(imported.verify(b"client hello", &signature).is_err());
    }
}

#[test]
fn test_separate_sign_and_verify_sessions() {
    let signer = ProviderSession::new(SessionFlags::SIGN).unwrap();
    let verifier = ProviderSession::new(SessionFlags::VERIFY).unwrap();

    let (secret, public) = signer.generate_keypair(&mut OsRng).unwrap();
    let point = export_secondary_point(&public).unwrap();
    let reimported = import_into_secondary(&verifier, &point).unwrap();

    let signature = signer.sign_message(b"finished", &secret).unwrap();
    verifier.verify_message(b"finished", &signature, &reimported).unwrap();
}

#[test]
fn test_profile_digest_matches_both_providers() {
    // A signature from either provider is checked under the group digest.
    let primary = profile_for(CurveKind::Secp256k1RustCrypto);
    let secondary = profile_for(CurveKind::Secp256k1Bitcoin);
    assert_eq!(primary.signing_pair(), secondary.signing_pair());
    assert_eq!(digest_for(CurveGroup::Secp256k1), primary.digest);
}

#[test]
fn test_single_provider_curves_refuse_interop() {
    let session = session();
    let p384 = IdentityKey::generate(CurveKind::Secp384r1, &mut OsRng).unwrap();

    assert_eq!(
        export_compressed_point(&p384.public_key()).unwrap_err(),
        Error::NoSecondaryProvider { curve: "secp384r1" }
    );
    assert_eq!(
        convert_to_secondary(&session, &p384.public_key()).unwrap_err(),
        Error::NoSecondaryProvider { curve: "secp384r1" }
    );
}

mod seeded {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_signatures_cross_in_both_directions(seed in any::<u64>(), message in proptest::collection::vec(any::<u8>(), 0..256)) {
            let session = session();
            let mut rng = ChaCha20Rng::seed_from_u64(seed);

            let primary = IdentityKey::generate(CurveKind::Secp256k1RustCrypto, &mut rng).unwrap();
            let imported = convert_to_secondary(&session, &primary.public_key()).unwrap();
            let signature = primary.sign(&message).unwrap();
            prop_assert!(session.verify_message(&message, &signature, &imported).is_ok());

            let (secret, public) = session.generate_keypair(&mut rng).unwrap();
            let exported = import_into_primary(&export_secondary_point(&public).unwrap()).unwrap();
            let signature = session.sign_message(&message, &secret).unwrap();
            prop_assert!(exported.verify(&message, &signature).is_ok());
        }
    }
}
