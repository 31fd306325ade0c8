//! Curve registry against the TOML expectation table

use ecid_curve::{digest_for, digest_for_raw, profile_for, profile_for_raw, CurveGroup, CurveKind};
use ecid_tests::vectors::curve_vectors;

#[test]
fn test_every_curve_has_a_vector() {
    let vectors = curve_vectors().unwrap();
    assert_eq!(vectors.len(), CurveKind::ALL.len());
    for kind in CurveKind::ALL {
        assert!(vectors.iter().any(|v| v.name == kind.as_str()), "{}", kind);
    }
}

#[test]
fn test_profiles_match_vectors() {
    for vector in curve_vectors().unwrap() {
        let kind: CurveKind = vector.name.parse().unwrap();
        assert_eq!(kind.raw(), vector.raw);

        let profile = profile_for(kind);
        assert_eq!(profile.group.id(), vector.group, "{}", kind);
        assert_eq!(profile.digest.name(), vector.digest, "{}", kind);
        assert_eq!(profile.digest.output_size(), vector.digest_size, "{}", kind);
        assert_eq!(profile.pem.header, vector.pem_header, "{}", kind);
        assert_eq!(profile.pem.footer, vector.pem_footer, "{}", kind);
        assert_eq!(profile.has_secondary_provider(), vector.secondary, "{}", kind);

        assert_eq!(profile_for_raw(vector.raw).unwrap(), profile);
        assert_eq!(digest_for_raw(vector.group).unwrap(), profile.digest);
    }
}

#[test]
fn test_group_digest_agrees_with_profile() {
    for vector in curve_vectors().unwrap() {
        let group = CurveGroup::try_from(vector.group).unwrap();
        let kind: CurveKind = vector.name.parse().unwrap();
        assert_eq!(digest_for(group), profile_for(kind).digest);
    }
}
