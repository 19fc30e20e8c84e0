use std::path::Path;

use webworker::config::{Config, ConfigError};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.site.document_root, Path::new("."));
    assert_eq!(cfg.site.server_header, "Jon's very own server");
    assert_eq!(cfg.site.marker_server_name, "Geralds Server");
    assert!(cfg.site.read_timeout().is_none());
}

#[test]
fn test_config_from_yaml() {
    let raw = r#"
server:
  listen_addr: "0.0.0.0:3000"
site:
  document_root: /srv/www
  marker_server_name: Test Server
  read_timeout_secs: 5
"#;
    let cfg = Config::from_yaml(raw).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.site.document_root, Path::new("/srv/www"));
    assert_eq!(cfg.site.marker_server_name, "Test Server");
    assert_eq!(cfg.site.read_timeout().unwrap().as_secs(), 5);
    // Unset fields keep their defaults
    assert_eq!(cfg.site.server_header, "Jon's very own server");
}

#[test]
fn test_config_empty_yaml_is_default() {
    let cfg = Config::from_yaml("").unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_invalid_yaml() {
    let result = Config::from_yaml("server: 42");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_missing_file() {
    let result = Config::from_file("/nonexistent/webworker.yaml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_load_from_env() {
    // The only test that touches the environment
    unsafe {
        std::env::remove_var("WEBWORKER_CONFIG");
        std::env::remove_var("LISTEN");
    }
    assert_eq!(Config::load().server.listen_addr, "127.0.0.1:8080");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:5000");
    }
    assert_eq!(Config::load().server.listen_addr, "0.0.0.0:5000");

    unsafe {
        std::env::set_var("WEBWORKER_CONFIG", "/nonexistent/webworker.yaml");
    }
    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");
    assert_eq!(cfg.site.document_root, Path::new("."));

    unsafe {
        std::env::remove_var("WEBWORKER_CONFIG");
        std::env::remove_var("LISTEN");
    }
}
