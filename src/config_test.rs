use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_http_config_default_has_no_timeout() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "artq-cli");
    assert!(config.timeout.is_none());
}

#[test]
fn test_load_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let file = ConfigFile::load_from(&temp.path().join("config.toml")).unwrap();
    assert!(file.api_key.is_none());
    assert!(file.base_url.is_none());
}

#[test]
fn test_load_file_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "api_key = \"abc\"\nbase_url = \"http://localhost:9000\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let file = ConfigFile::load_from(&path).unwrap();
    assert_eq!(file.api_key.as_deref(), Some("abc"));
    assert_eq!(file.timeout_secs, Some(5));
}

#[test]
fn test_unknown_key_is_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "apikey = \"typo\"\n").unwrap();

    match ConfigFile::load_from(&path) {
        Err(ArtqError::Config(msg)) => assert!(msg.contains("config.toml")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_resolve_env_overrides_file() {
    let file = ConfigFile {
        api_key: Some("from-file".to_string()),
        base_url: Some("http://file".to_string()),
        ..Default::default()
    };

    let settings = Settings::resolve(
        file,
        Some(PathBuf::from("/home/u/.artq")),
        Some("from-env".to_string()),
        None,
    )
    .unwrap();

    assert_eq!(settings.api_key, "from-env");
    assert_eq!(settings.base_url, "http://file");
    assert_eq!(settings.cache_dir, PathBuf::from("/home/u/.artq/cache"));
}

#[test]
fn test_resolve_defaults() {
    let settings =
        Settings::resolve(ConfigFile::default(), Some(PathBuf::from("/r")), None, None).unwrap();

    assert_eq!(settings.api_key, "");
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert!(settings.http.timeout.is_none());
}

#[test]
fn test_resolve_timeout_and_agent() {
    let file = ConfigFile {
        timeout_secs: Some(12),
        user_agent: Some("custom".to_string()),
        ..Default::default()
    };
    let settings = Settings::resolve(file, Some(PathBuf::from("/r")), None, None).unwrap();

    assert_eq!(settings.http.timeout, Some(Duration::from_secs(12)));
    assert_eq!(settings.http.user_agent, "custom");
}

#[test]
fn test_resolve_without_home_needs_cache_dir() {
    let result = Settings::resolve(ConfigFile::default(), None, None, None);
    assert!(matches!(result, Err(ArtqError::Config(_))));

    let file = ConfigFile {
        cache_dir: Some(PathBuf::from("/var/cache/artq")),
        ..Default::default()
    };
    let settings = Settings::resolve(file, None, None, None).unwrap();
    assert_eq!(settings.cache_dir, PathBuf::from("/var/cache/artq"));
}
