use std::io::Write;

use finite_automaton::{
    config::{FaConfig, LoggerConfig},
    logger::LogLevel,
};

#[test]
fn test_default_config() {
    let config = FaConfig::default();
    let logger = config.get_logger();

    assert!(!*logger.get_enabled());
    assert!(!*logger.get_log_file());
    assert_eq!(logger.get_log_dir(), "./logs");
    assert_eq!(*logger.get_log_level(), LogLevel::Warn);
}

#[test]
fn test_config_from_toml() {
    let config = FaConfig::from_toml_str(
        r#"
        [logger]
        enabled = true
        log_level = "Debug"
        "#,
    )
    .unwrap();

    let logger = config.get_logger();
    assert!(*logger.get_enabled());
    assert!(!*logger.get_log_file());
    assert_eq!(logger.get_log_dir(), "./logs");
    assert_eq!(*logger.get_log_level(), LogLevel::Debug);
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(FaConfig::from_toml_str("").unwrap(), FaConfig::default());
}

#[test]
fn test_invalid_toml() {
    assert!(FaConfig::from_toml_str("[logger]\nenabled = 3").is_err());
    assert!(FaConfig::from_toml_str("[logger]\nlog_level = \"Loud\"").is_err());
}

#[test]
fn test_builders() {
    let logger = LoggerConfig::default()
        .with_enabled(true)
        .with_log_file(true)
        .with_log_dir("/tmp/fa")
        .with_log_level(LogLevel::Info);
    let config = FaConfig::default().with_logger(logger.clone());

    assert_eq!(config.get_logger(), &logger);
    assert!(*logger.get_log_file());
    assert_eq!(logger.get_log_dir(), "/tmp/fa");
    assert_eq!(*logger.get_log_level(), LogLevel::Info);
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("fa_config_{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[logger]\nlog_file = true\nlog_dir = \"out\"").unwrap();
    drop(file);

    let config = FaConfig::from_optional_file(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(*config.get_logger().get_log_file());
    assert_eq!(config.get_logger().get_log_dir(), "out");

    assert_eq!(
        FaConfig::from_optional_file(None::<&str>).unwrap(),
        FaConfig::default()
    );
    assert!(FaConfig::from_file("./does/not/exist.toml").is_err());
}
