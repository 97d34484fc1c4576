use std::collections::HashMap;
use std::fs;

use lockquiz::config::{Config, COLLECTOR_ENV, SECRET_ENV};
use lockquiz::passcode::WINDOW_MS;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.secret, "gsaarc");
    assert_eq!(config.window_secs, 300);
    assert_eq!(config.collector_url, None);
    assert!(config.shuffle);
    assert!(config.validate().is_ok());
    assert_eq!(config.passcodes().window_ms(), WINDOW_MS);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let config = Config::from_yaml(
        "secret: campus-2024\ncollector_url: https://collector.example.org/results\n",
    )
    .unwrap();
    assert_eq!(config.secret, "campus-2024");
    assert_eq!(
        config.collector_url.as_deref(),
        Some("https://collector.example.org/results")
    );
    assert_eq!(config.probe_addr, "1.1.1.1:53");
    assert_eq!(config.window_secs, 300);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = Config::from_yaml("secrte: typo\n").unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [
        (SECRET_ENV, "from-env"),
        (COLLECTOR_ENV, "http://localhost:8080/collect"),
    ]
    .into_iter()
    .collect();

    let mut config = Config::default();
    config.apply_env(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.secret, "from-env");
    assert_eq!(
        config.collector_url.as_deref(),
        Some("http://localhost:8080/collect")
    );

    // Empty values leave the config alone
    let mut config = Config::default();
    config.apply_env(|_| Some(String::new()));
    assert_eq!(config, Config::default());
}

#[test]
fn test_validation() {
    let mut config = Config::default();
    config.window_secs = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.secret.clear();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.collector_url = Some("ftp://example.org".to_string());
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.probe_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_explicit_file() {
    let tmp_dir = std::env::temp_dir().join("lockquiz_test_config");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();

    let path = tmp_dir.join("config.yaml");
    fs::write(&path, "window_secs: 60\nshuffle: false\n").unwrap();
    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.window_secs, 60);
    assert!(!config.shuffle);
    assert_eq!(config.passcodes().window_ms(), 60_000);

    let missing = tmp_dir.join("missing.yaml");
    assert!(Config::load(Some(&missing)).is_err());

    let _ = fs::remove_dir_all(&tmp_dir);
}
