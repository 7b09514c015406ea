use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PLACELEADS_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.places_api_key.is_none());
    assert_eq!(cfg.store_path, PathBuf::from("./placeleads.json"));
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "placeleads/0.1 (lead-generation)");
    assert_eq!(cfg.page_delay_ms, 2000);
    assert_eq!(cfg.max_target_count, 60);
    assert_eq!(cfg.legacy_base_url, "https://maps.googleapis.com/");
    assert_eq!(cfg.places_base_url, "https://places.googleapis.com/");
}

#[test]
fn build_app_config_reads_api_key() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "  secret-key ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.places_api_key.as_deref(), Some("secret-key"));
}

#[test]
fn build_app_config_treats_blank_api_key_as_absent() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.places_api_key.is_none());
}

#[test]
fn build_app_config_page_delay_override() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_PAGE_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_ms, 0);
}

#[test]
fn build_app_config_page_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_PAGE_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACELEADS_PAGE_DELAY_MS"),
        "expected InvalidEnvVar(PLACELEADS_PAGE_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACELEADS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACELEADS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_max_target_count_override() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_MAX_TARGET_COUNT", "100");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_target_count, 100);
}

#[test]
fn build_app_config_max_target_count_above_provider_cap_fails() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_MAX_TARGET_COUNT", "101");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACELEADS_MAX_TARGET_COUNT"),
        "expected InvalidEnvVar(PLACELEADS_MAX_TARGET_COUNT), got: {result:?}"
    );
}

#[test]
fn build_app_config_max_target_count_zero_fails() {
    let mut map = HashMap::new();
    map.insert("PLACELEADS_MAX_TARGET_COUNT", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
