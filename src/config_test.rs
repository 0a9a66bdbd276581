use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK` so env mutation does not race other tests.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ASSETS_DIR");
    }
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("-1")).is_err());
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8123");
        std::env::set_var("ASSETS_DIR", "/srv/portfolio");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/portfolio"));

    unsafe { clear_server_env() };
}

#[test]
fn config_error_messages_name_the_input() {
    let err = ConfigError::InvalidPort { value: "abc".into() };
    assert_eq!(err.to_string(), "invalid PORT value \"abc\"");
}
