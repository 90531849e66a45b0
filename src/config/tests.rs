use super::*;

#[test]
fn test_missing_file_yields_defaults() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("config.json");
    let config = load_config(Some(&path)).expect("load config");
    assert_eq!(config.response_delay_ms, 1000);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_camel_case_keys_round_trip() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("config.json");

    let config = Config {
        response_delay_ms: 50,
        log_filter: "debug".to_string(),
    };
    save_config(&config, Some(&path)).expect("save config");

    let raw = std::fs::read_to_string(&path).expect("read config file");
    assert!(raw.contains("responseDelayMs"), "{raw}");
    assert!(raw.contains("logFilter"), "{raw}");

    let loaded = load_config(Some(&path)).expect("load config");
    assert_eq!(loaded.response_delay_ms, 50);
    assert_eq!(loaded.log_filter, "debug");
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("config.json");
    std::fs::write(&path, r#"{"responseDelayMs": 250}"#).expect("write config");

    let config = load_config(Some(&path)).expect("load config");
    assert_eq!(config.response_delay_ms, 250);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_malformed_json_is_an_error() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("config.json");
    std::fs::write(&path, "{not json").expect("write config");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"), "{err}");
}

#[test]
fn test_save_creates_parent_directory() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("nested").join("config.json");
    save_config(&Config::default(), Some(&path)).expect("save config");
    assert!(path.exists());
}
