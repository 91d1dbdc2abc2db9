use std::path::Path;
use std::time::Duration;

use cryptotrader::config::{Config, LoggingConfig};
use cryptotrader::error::AppError;

#[test]
fn parse_default_toml() {
    let toml_str = r#"
[ticker]
interval_ms = 1500
price_jitter = 0.004
change_jitter = 0.25
seed = 42

[ui]
refresh_rate_ms = 50

[logging]
level = "debug"
file = "dash.log"
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.ticker.interval(), Duration::from_millis(1_500));
    assert!((config.ticker.price_jitter - 0.004).abs() < f64::EPSILON);
    assert!((config.ticker.change_jitter - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.ticker.seed, Some(42));
    assert_eq!(config.ui.refresh_rate_ms, 50);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "dash.log");

    let params = config.ticker.jitter_params();
    assert!((params.price_jitter - 0.004).abs() < f64::EPSILON);
    assert!((params.change_jitter - 0.25).abs() < f64::EPSILON);
}

#[test]
fn missing_sections_and_keys_fall_back_to_defaults() {
    let config = Config::from_toml_str("[ticker]\nseed = 7\n").unwrap();
    assert_eq!(config.ticker.interval_ms, 3_000);
    assert!((config.ticker.price_jitter - 0.002).abs() < f64::EPSILON);
    assert!((config.ticker.change_jitter - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.ticker.seed, Some(7));
    assert_eq!(config.ui.refresh_rate_ms, 100);
    assert_eq!(config.logging.level, "info");

    let empty = Config::from_toml_str("").unwrap();
    assert_eq!(empty.ticker.interval_ms, 3_000);
}

#[test]
fn rejects_invalid_values() {
    assert!(matches!(
        Config::from_toml_str("[ticker]\ninterval_ms = 0\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[ticker]\nprice_jitter = 2.5\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[ticker]\nchange_jitter = -1.0\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[ui]\nrefresh_rate_ms = 0\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn rejects_malformed_toml() {
    assert!(matches!(
        Config::from_toml_str("[ticker]\ninterval_ms = \"fast\"\n"),
        Err(AppError::Toml(_))
    ));
}

#[test]
fn load_from_missing_file_is_an_error() {
    let err = Config::load_from(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read does/not/exist.toml"));
}

#[test]
fn bundled_default_config_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ticker.interval_ms, 3_000);
    assert_eq!(config.ticker.seed, None);
}

#[test]
/// Verifies an unusable log path names the file in the error chain.
fn create_log_file_reports_bad_path() {
    let logging = LoggingConfig {
        level: "info".to_string(),
        file: "no/such/dir/cryptotrader.log".to_string(),
    };
    let err = logging.create_log_file().unwrap_err();
    assert!(format!("{:#}", err).contains("failed to create log file no/such/dir/cryptotrader.log"));
}
