use std::time::Duration;

use rust_decimal::Decimal;
use std::str::FromStr;
use treasury_server::config::Config;

const KEYS: [&str; 6] = [
    "TD_LISTEN_ADDR",
    "PORT",
    "TD_ANNUAL_TARGET",
    "TD_CORS_ALLOW_ORIGINS",
    "TD_REQUEST_TIMEOUT_MS",
    "TD_STATIC_DIR",
];

fn cleanup_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

// Environment variables are process-wide, so every scenario runs in one test.
#[test]
fn config_reads_environment() {
    cleanup_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.annual_target, Decimal::from(500_000_000));
    assert_eq!(config.cors_allow, vec!["*".to_string()]);
    assert_eq!(config.request_timeout, Duration::from_millis(30000));
    assert_eq!(config.static_dir, "dist");

    std::env::set_var("PORT", "9090");
    let config = Config::from_env().unwrap();
    assert_eq!(config.listen_addr.to_string(), "0.0.0.0:9090");

    std::env::set_var("TD_LISTEN_ADDR", "127.0.0.1:3000");
    std::env::set_var("TD_ANNUAL_TARGET", "124658254.42");
    std::env::set_var("TD_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,");
    std::env::set_var("TD_REQUEST_TIMEOUT_MS", "1500");
    let config = Config::from_env().unwrap();
    assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(
        config.annual_target,
        Decimal::from_str("124658254.42").unwrap()
    );
    assert_eq!(
        config.cors_allow,
        vec!["http://a.test".to_string(), "http://b.test".to_string()]
    );
    assert_eq!(config.request_timeout, Duration::from_millis(1500));

    std::env::set_var("TD_REQUEST_TIMEOUT_MS", "not-a-number");
    assert!(Config::from_env().is_err());
    std::env::set_var("TD_REQUEST_TIMEOUT_MS", "-5");
    assert!(Config::from_env().is_err());
    std::env::remove_var("TD_REQUEST_TIMEOUT_MS");

    std::env::set_var("TD_ANNUAL_TARGET", "five hundred million");
    assert!(Config::from_env().is_err());

    std::env::set_var("TD_ANNUAL_TARGET", "1000");
    std::env::set_var("TD_LISTEN_ADDR", "nowhere");
    assert!(Config::from_env().is_err());

    cleanup_env();
}
