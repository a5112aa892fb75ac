//! Handshake Tests
//!
//! These tests verify:
//! - No password skips the handshake entirely
//! - Source servers (echo then result) authenticate
//! - Minecraft servers (result only) authenticate
//! - Wrong ids and types fail with AuthFailure

use std::time::Duration;

use source_rcon::network::{authenticate, Connection, HandshakeState};
use source_rcon::protocol::{Packet, PacketType};
use source_rcon::RconError;

use crate::support::{auth_response, response, ScriptLog, ScriptedTransport};

// =============================================================================
// Helper Functions
// =============================================================================

fn run(server: &[Packet], password: Option<&str>) -> (source_rcon::Result<HandshakeState>, ScriptLog) {
    let (transport, log) = ScriptedTransport::from_packets(server);
    let mut conn = Connection::new(transport, Duration::from_secs(1));
    (authenticate(&mut conn, password), log)
}

fn assert_auth_failure(result: source_rcon::Result<HandshakeState>) {
    match result {
        Err(RconError::AuthFailure) => {}
        other => panic!("Expected AuthFailure, got {:?}", other),
    }
}

// =============================================================================
// Success Paths
// =============================================================================

#[test]
fn test_no_password_sends_nothing() {
    let (result, log) = run(&[], None);

    assert_eq!(result.unwrap(), HandshakeState::NoAuthNeeded);
    assert!(log.written().is_empty());
}

#[test]
fn test_echo_then_result() {
    let (result, log) = run(&[response(0, ""), auth_response(0)], Some("secret"));

    assert_eq!(result.unwrap(), HandshakeState::Authenticated);

    let written = log.written_packets();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].id, 0);
    assert_eq!(written[0].packet_type, PacketType::AUTH);
    assert_eq!(written[0].body, b"secret");
}

#[test]
fn test_result_without_echo() {
    let (result, _log) = run(&[auth_response(0)], Some("secret"));
    assert_eq!(result.unwrap(), HandshakeState::Authenticated);
}

// =============================================================================
// Failure Paths
// =============================================================================

#[test]
fn test_wrong_password_id() {
    let (result, _log) = run(&[auth_response(-1)], Some("wrong"));
    assert_auth_failure(result);
}

#[test]
fn test_echo_then_wrong_password() {
    let (result, _log) = run(&[response(0, ""), auth_response(-1)], Some("wrong"));
    assert_auth_failure(result);
}

#[test]
fn test_unexpected_type() {
    let (result, _log) = run(&[Packet::new(PacketType::AUTH, 0, "")], Some("secret"));
    assert_auth_failure(result);
}

#[test]
fn test_echo_followed_by_wrong_type() {
    let (result, _log) = run(&[response(0, ""), response(0, "")], Some("secret"));
    assert_auth_failure(result);
}

#[test]
fn test_eof_during_handshake_is_io_error() {
    let (result, _log) = run(&[response(0, "")], Some("secret"));
    assert!(matches!(result, Err(RconError::Io(_))));
}

// =============================================================================
// State Machine Tests
// =============================================================================

#[test]
fn test_state_transitions() {
    let echo = response(0, "");
    let result = auth_response(0);

    assert_eq!(
        HandshakeState::AwaitingAuthEcho.on_packet(&echo, 0),
        HandshakeState::AwaitingAuthResult
    );
    assert_eq!(
        HandshakeState::AwaitingAuthEcho.on_packet(&result, 0),
        HandshakeState::Authenticated
    );
    assert_eq!(
        HandshakeState::AwaitingAuthResult.on_packet(&result, 0),
        HandshakeState::Authenticated
    );
    assert_eq!(
        HandshakeState::AwaitingAuthResult.on_packet(&echo, 0),
        HandshakeState::Failed
    );
    assert_eq!(
        HandshakeState::AwaitingAuthEcho.on_packet(&auth_response(3), 0),
        HandshakeState::Failed
    );
}

#[test]
fn test_terminal_states_are_stable() {
    let packet = auth_response(0);
    for state in [
        HandshakeState::NoAuthNeeded,
        HandshakeState::Authenticated,
        HandshakeState::Failed,
    ] {
        assert_eq!(state.on_packet(&packet, 0), state);
    }
    assert!(HandshakeState::Authenticated.is_ready());
    assert!(HandshakeState::NoAuthNeeded.is_ready());
    assert!(!HandshakeState::Failed.is_ready());
}
