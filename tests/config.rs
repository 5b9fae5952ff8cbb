use bellboard::config::{Config, ConfigError, ENV_ADMIN_TOKEN, ENV_API_URL};
use std::io::Write;

#[test]
fn defaults_point_at_the_local_server() {
    let config = Config::default();
    assert_eq!(config.api_url, "http://127.0.0.1:8000");
    assert!(config.admin_token.is_none());
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("bellboard/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_file(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.api_url, Config::default().api_url);
}

#[test]
fn file_values_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"api_url = "https://school.example.org""#).unwrap();
    writeln!(file, r#"admin_token = "from-file""#).unwrap();

    let config = Config::load_file(&path).unwrap();
    assert_eq!(config.api_url, "https://school.example.org");
    assert_eq!(config.admin_token.as_deref(), Some("from-file"));
}

#[test]
fn unparseable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_url = [oops").unwrap();

    match Config::load_file(&path) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn env_overrides_file_values() {
    let mut config = Config {
        api_url: "http://file.example".to_string(),
        admin_token: None,
    };
    config.apply_env(|name| match name {
        ENV_API_URL => Some("http://env.example".to_string()),
        ENV_ADMIN_TOKEN => Some("env-token".to_string()),
        _ => None,
    });

    assert_eq!(config.api_url, "http://env.example");
    assert_eq!(config.admin_token.as_deref(), Some("env-token"));
}

#[test]
fn empty_env_values_are_ignored() {
    let mut config = Config::default();
    config.apply_env(|_| Some(String::new()));
    assert_eq!(config.api_url, Config::default().api_url);
    assert!(config.admin_token.is_none());
}

#[test]
fn validation_rejects_non_http_url() {
    let config = Config {
        api_url: "ftp://school".to_string(),
        admin_token: None,
    };
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("http"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn validation_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}
