use fruitapp::config::Config;
use fruitapp::constants::{DEFAULT_DATABASE_URL, SERVICE_LATENCY_MS};

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.network.service_latency_ms, SERVICE_LATENCY_MS);
    assert!(config.logging.enabled);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [network]
        service_latency_ms = 0
        "#,
    )
    .unwrap();

    assert_eq!(config.network.service_latency_ms, 0);
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert!(config.validate().is_ok());
}

#[test]
fn excessive_latency_is_rejected() {
    let mut config = Config::default();
    config.network.service_latency_ms = 120_000;
    assert!(config.validate().is_err());
}

#[test]
fn empty_database_url_is_rejected() {
    let mut config = Config::default();
    config.database.url = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn bogus_log_level_is_rejected() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn log_level_parses_into_a_filter() {
    let mut config = Config::default();
    config.logging.level = "debug".to_string();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}
