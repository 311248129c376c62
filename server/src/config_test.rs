use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_env_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.activities_api_url, DEFAULT_ACTIVITIES_API_URL);
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
}

#[test]
fn from_env_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("ACTIVITIES_API_URL", "https://api.example.test/v1/"),
        ("UPSTREAM_TIMEOUT_SECS", "3"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.activities_api_url, "https://api.example.test/v1");
    assert_eq!(cfg.upstream_timeout_secs, 3);
}

#[test]
fn from_env_rejects_bad_port() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_env_rejects_non_http_upstream() {
    let err = config_from(&[("ACTIVITIES_API_URL", "localhost:8000")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "ACTIVITIES_API_URL", .. }));
}

#[test]
fn from_env_ignores_unusable_timeout() {
    assert_eq!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]).unwrap().upstream_timeout_secs, 10);
    assert_eq!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")]).unwrap().upstream_timeout_secs, 10);
}
