//! Startup configuration of the identity curve

use ecid_api::Error;
use ecid_curve::{CurveKind, IdentityConfig, SERVICE_IDENTITY_CURVE};
use serde::Deserialize;

/// Service configuration embedding the identity section
#[derive(Debug, Deserialize)]
struct ServiceConfig {
    listen: String,
    #[serde(default)]
    identity: IdentityConfig,
}

#[test]
fn test_identity_section_selects_curve() {
    let config: ServiceConfig = toml::from_str(
        r#"
        listen = "0.0.0.0:8443"

        [identity]
        curve = "secp256k1_bitcoin"
        "#,
    )
    .unwrap();

    assert_eq!(config.listen, "0.0.0.0:8443");
    assert_eq!(config.identity.resolve(), CurveKind::Secp256k1Bitcoin);
    assert!(config.identity.profile().has_secondary_provider());
}

#[test]
fn test_missing_section_uses_build_default() {
    let config: ServiceConfig = toml::from_str(r#"listen = "[::]:443""#).unwrap();
    assert_eq!(config.identity.curve, None);
    assert_eq!(config.identity.resolve(), SERVICE_IDENTITY_CURVE);
}

#[test]
fn test_empty_section_uses_build_default() {
    let config: ServiceConfig = toml::from_str(
        r#"
        listen = "[::]:443"
        [identity]
        "#,
    )
    .unwrap();
    assert_eq!(config.identity.resolve(), SERVICE_IDENTITY_CURVE);
}

#[test]
fn test_toml_and_parse_accept_the_same_names() {
    for name in ["secp384r1", "SECP384R1", "Secp256k1_RustCrypto"] {
        let config: ServiceConfig = toml::from_str(&format!(
            "listen = \"[::]:443\"\n[identity]\ncurve = \"{}\"\n",
            name
        ))
        .unwrap();
        assert_eq!(config.identity, IdentityConfig::from_name(Some(name)).unwrap(), "{}", name);
    }
}

#[test]
fn test_unknown_curve_is_rejected() {
    let parsed = toml::from_str::<ServiceConfig>(
        r#"
        listen = "[::]:443"
        [identity]
        curve = "brainpoolP256r1"
        "#,
    );
    assert!(parsed.is_err());

    let err = IdentityConfig::from_name(Some("brainpoolP256r1")).unwrap_err();
    assert!(matches!(err, Error::UnknownCurveName { .. }));
    assert!(err.is_configuration_defect());
}

#[test]
fn test_unknown_fields_are_rejected() {
    let parsed = toml::from_str::<IdentityConfig>(r#"curv = "ed25519""#);
    assert!(parsed.is_err());
}

#[test]
fn test_config_round_trips_through_toml() {
    for kind in CurveKind::ALL {
        let text = toml::to_string(&IdentityConfig::new(*kind)).unwrap();
        let parsed: IdentityConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.resolve(), *kind);
    }
}
