//! Tests for config types

use super::*;
use proptest::prelude::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.api.base_url, None);
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.search.max_suggestions, 8);
    assert!(config.search.catalog.is_none());
}

#[test]
fn test_full_config_parses() {
    let toml_content = r#"
[api]
base_url = "https://srm.example.com/"
timeout_secs = 3

[search]
debounce_ms = 80
max_suggestions = 5
catalog = "/srv/srm/catalog.json"
"#;
    let config: Config = toml::from_str(toml_content).unwrap();
    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.search.debounce_ms, 80);
    assert_eq!(config.search.max_suggestions, 5);
    assert_eq!(
        config.search.catalog,
        Some(PathBuf::from("/srv/srm/catalog.json"))
    );
    assert_eq!(config.base_url(), Some("https://srm.example.com"));
}

#[test]
fn test_base_url_override_replaces_file_value() {
    let config: Config = toml::from_str("[api]\nbase_url = \"http://file\"").unwrap();
    let config = config.with_base_url_override(Some("http://env".to_string()));
    assert_eq!(config.base_url(), Some("http://env"));
}

#[test]
fn test_blank_override_is_ignored() {
    let config: Config = toml::from_str("[api]\nbase_url = \"http://file\"").unwrap();
    let config = config.with_base_url_override(Some("   ".to_string()));
    assert_eq!(config.base_url(), Some("http://file"));
}

#[test]
fn test_blank_base_url_is_none() {
    let config: Config = toml::from_str("[api]\nbase_url = \"  \"").unwrap();
    assert_eq!(config.base_url(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_debounce_roundtrips(ms in 0u64..10_000) {
        let toml_content = format!("[search]\ndebounce_ms = {}", ms);
        let config: Config = toml::from_str(&toml_content).unwrap();
        prop_assert_eq!(config.search.debounce_ms, ms);
        prop_assert_eq!(config.search.max_suggestions, 8);
    }
}
