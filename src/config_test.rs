use super::*;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "owo-gallery");
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_zero_timeout_disables_timeout() {
    let config = GalleryConfig {
        timeout_secs: Some(0),
        ..Default::default()
    };
    assert_eq!(config.http().timeout, None);
}

#[test]
fn test_parse_full_config() {
    let content = r#"
catalog = "https://example.com/artalk.json"
timeout_secs = 5
user_agent = "test-agent"

[generate]
artalk_base_url = "https://cdn.example.com/owo"
folders = ["qingzhu", "zhheo"]
"#;
    let config = GalleryConfig::parse(content, Path::new("config.toml")).unwrap();
    assert_eq!(config.catalog.as_deref(), Some("https://example.com/artalk.json"));
    assert_eq!(config.http().user_agent, "test-agent");
    assert_eq!(config.http().timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        config.generate.folders,
        Some(vec!["qingzhu".to_string(), "zhheo".to_string()])
    );
    assert_eq!(config.generate.twikoo_base_url, None);
}

#[test]
fn test_parse_empty_config_is_default() {
    let config = GalleryConfig::parse("", Path::new("config.toml")).unwrap();
    assert_eq!(config, GalleryConfig::default());
}

#[test]
fn test_parse_invalid_config() {
    let err = GalleryConfig::parse("catalog = [", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidConfig { .. }));
    assert!(!err.is_load_failure());
}

#[test]
fn test_parse_unknown_field_rejected() {
    let err = GalleryConfig::parse("catalgo = \"x\"", Path::new("typo.toml")).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidConfig { .. }));
}

#[test]
fn test_load_from_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = GalleryConfig::load_from(&dir.path().join("none.toml")).unwrap();
    assert_eq!(config, GalleryConfig::default());
}

#[test]
fn test_load_explicit_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result = GalleryConfig::load(Some(&dir.path().join("none.toml")));
    assert!(matches!(result, Err(GalleryError::InvalidConfig { .. })));
}

#[test]
fn test_load_explicit_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "catalog = \"emoji.json\"").unwrap();
    let config = GalleryConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.catalog.as_deref(), Some("emoji.json"));
}

// =========================================================================
// catalog_source の優先順位
// =========================================================================

#[test]
#[serial]
fn test_catalog_source_cli_wins() {
    std::env::set_var(EnvVar::CATALOG, "env.json");
    let config = GalleryConfig {
        catalog: Some("config.json".to_string()),
        ..Default::default()
    };
    let source = config.catalog_source(Some("cli.json"));
    std::env::remove_var(EnvVar::CATALOG);
    assert_eq!(source, CatalogSource::File(PathBuf::from("cli.json")));
}

#[test]
#[serial]
fn test_catalog_source_env_over_config() {
    std::env::set_var(EnvVar::CATALOG, "https://example.com/env.json");
    let config = GalleryConfig {
        catalog: Some("config.json".to_string()),
        ..Default::default()
    };
    let source = config.catalog_source(None);
    std::env::remove_var(EnvVar::CATALOG);
    assert_eq!(
        source,
        CatalogSource::Url("https://example.com/env.json".to_string())
    );
}

#[test]
#[serial]
fn test_catalog_source_config_then_default() {
    std::env::remove_var(EnvVar::CATALOG);
    let config = GalleryConfig {
        catalog: Some("config.json".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.catalog_source(None),
        CatalogSource::File(PathBuf::from("config.json"))
    );
    assert_eq!(
        GalleryConfig::default().catalog_source(None),
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG))
    );
}
