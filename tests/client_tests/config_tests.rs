//! Config Tests

use std::time::Duration;

use source_rcon::{Config, PacketMode, RconError, DEFAULT_TIMEOUT};

#[test]
fn test_defaults() {
    let config = Config::builder().build().unwrap();

    assert_eq!(config.address, "127.0.0.1:27015");
    assert_eq!(config.password, None);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.packet_mode, PacketMode::Multi);
}

#[test]
fn test_default_port_appended() {
    let config = Config::builder().address("game.example.com").build().unwrap();
    assert_eq!(config.address, "game.example.com:27015");
}

#[test]
fn test_explicit_port_kept() {
    let config = Config::builder().address("10.0.0.1:25575").build().unwrap();
    assert_eq!(config.address, "10.0.0.1:25575");
}

#[test]
fn test_builder_options() {
    let config = Config::builder()
        .password("hunter2")
        .timeout_ms(250)
        .single_packet()
        .build()
        .unwrap();

    assert_eq!(config.auth_password(), Some("hunter2"));
    assert_eq!(config.timeout, Duration::from_millis(250));
    assert_eq!(config.packet_mode, PacketMode::Single);
}

#[test]
fn test_empty_password_means_no_auth() {
    let config = Config::builder().password("").build().unwrap();
    assert_eq!(config.auth_password(), None);
}

#[test]
fn test_empty_address_rejected() {
    let result = Config::builder().address("").build();
    assert!(matches!(result, Err(RconError::Config(_))));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = Config::builder().timeout(Duration::ZERO).build();
    assert!(matches!(result, Err(RconError::Config(_))));
}

#[test]
fn test_debug_redacts_password() {
    let config = Config::builder().password("hunter2").build().unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("REDACTED"));
}
