//! Loading configuration files from disk.

use std::io::Write;

use cosmic_config::{ConfigError, CosmicConfig, DEFAULT_TRANSIT_TIMEOUT_MS};
use cosmic_fusion::Influence;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"remote":{{"bazi_engine_url":"http://127.0.0.1:9000"}},"symbol":{{"influence":"western"}}}}"#
    )
    .unwrap();

    let cfg = CosmicConfig::load(file.path()).unwrap();
    assert_eq!(cfg.remote.bazi_engine_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.remote.transit_timeout_ms, DEFAULT_TRANSIT_TIMEOUT_MS);
    assert_eq!(cfg.symbol.influence, Influence::Western);
    assert_eq!(
        cfg.remote.bazi_endpoint("/api/symbol"),
        "http://127.0.0.1:9000/api/symbol"
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    match CosmicConfig::load(&missing) {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn written_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cosmic.json");
    let mut cfg = CosmicConfig::default();
    cfg.remote.enabled = false;
    std::fs::write(&path, cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(CosmicConfig::load(&path).unwrap(), cfg);
}
