use isr_revalidate::{DeliveryContract, RevalidateError, RevalidationConfig};
use std::collections::HashMap;
use std::time::Duration;

fn config_from(vars: &[(&str, &str)]) -> Result<RevalidationConfig, RevalidateError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RevalidationConfig::from_lookup(|key| env.get(key).cloned())
}

// ── Defaults ────────────────────────────────────────────────────

#[test]
fn default_config_is_disabled() {
    let cfg = RevalidationConfig::default();
    assert!(!cfg.is_enabled());
    assert_eq!(cfg.contract, DeliveryContract::Paths);
    assert_eq!(cfg.default_locale, "en");
    assert!(cfg.credential.is_none());
    assert!(cfg.request_timeout().is_none());
}

#[test]
fn empty_environment_is_disabled() {
    let cfg = config_from(&[]).unwrap();
    assert!(!cfg.is_enabled());
    assert_eq!(cfg.frontend_url, "");
}

#[test]
fn whitespace_frontend_url_is_disabled() {
    let cfg = config_from(&[("FRONTEND_URL", "   ")]).unwrap();
    assert!(!cfg.is_enabled());
}

#[test]
fn bare_slash_frontend_url_is_disabled() {
    let cfg = config_from(&[("FRONTEND_URL", "/")]).unwrap();
    assert!(!cfg.is_enabled());

    let literal = RevalidationConfig {
        frontend_url: "/".to_string(),
        ..Default::default()
    };
    assert!(!literal.is_enabled());
}

#[test]
fn frontend_url_trailing_slash_is_trimmed_on_load() {
    let cfg = config_from(&[("FRONTEND_URL", "https://shop.example.com/")]).unwrap();
    assert!(cfg.is_enabled());
    assert_eq!(cfg.frontend_url, "https://shop.example.com");
    assert_eq!(cfg.revalidate_url(), "https://shop.example.com/api/revalidate");
}

// ── Contract and credentials ────────────────────────────────────

#[test]
fn paths_contract_reads_secret() {
    let cfg = config_from(&[
        ("FRONTEND_URL", "https://shop.example.com"),
        ("REVALIDATE_SECRET", "s3cret"),
        ("REVALIDATE_TOKEN", "tok"),
    ])
    .unwrap();
    assert_eq!(cfg.contract, DeliveryContract::Paths);
    assert_eq!(cfg.credential.as_deref(), Some("s3cret"));
}

#[test]
fn type_contract_reads_token() {
    let cfg = config_from(&[
        ("FRONTEND_URL", "https://shop.example.com"),
        ("REVALIDATE_CONTRACT", "type"),
        ("REVALIDATE_SECRET", "s3cret"),
        ("REVALIDATE_TOKEN", "tok"),
    ])
    .unwrap();
    assert_eq!(cfg.contract, DeliveryContract::Type);
    assert_eq!(cfg.credential.as_deref(), Some("tok"));
}

#[test]
fn type_contract_ignores_secret_when_token_missing() {
    let cfg = config_from(&[
        ("REVALIDATE_CONTRACT", "TYPE"),
        ("REVALIDATE_SECRET", "s3cret"),
    ])
    .unwrap();
    assert!(cfg.credential.is_none());
}

#[test]
fn empty_secret_is_no_credential() {
    let cfg = config_from(&[("REVALIDATE_SECRET", "")]).unwrap();
    assert!(cfg.credential.is_none());
}

#[test]
fn unknown_contract_is_rejected() {
    let err = config_from(&[("REVALIDATE_CONTRACT", "graphql")]).unwrap_err();
    assert!(matches!(err, RevalidateError::Config(_)));
    assert!(err.to_string().contains("graphql"));
}

// ── Other settings ──────────────────────────────────────────────

#[test]
fn timeout_and_default_locale_are_read() {
    let cfg = config_from(&[("REVALIDATE_TIMEOUT_SECS", "15"), ("DEFAULT_LOCALE", "it")]).unwrap();
    assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(cfg.default_locale, "it");
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = config_from(&[("REVALIDATE_TIMEOUT_SECS", "soon")]).unwrap_err();
    assert!(err.to_string().contains("REVALIDATE_TIMEOUT_SECS"));
}

#[test]
fn revalidate_url_strips_trailing_slash() {
    let cfg = RevalidationConfig {
        frontend_url: "https://shop.example.com/".to_string(),
        ..Default::default()
    };
    assert_eq!(cfg.revalidate_url(), "https://shop.example.com/api/revalidate");
}

#[test]
fn config_serde_roundtrip() {
    let cfg = RevalidationConfig {
        frontend_url: "http://localhost:3000".to_string(),
        contract: DeliveryContract::Type,
        ..Default::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"contract\":\"type\""));
    let back: RevalidationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frontend_url, "http://localhost:3000");
    assert_eq!(back.contract, DeliveryContract::Type);
}
