//! Authentication handshake
//!
//! ```text
//!            no password
//!   start ───────────────────────────────▶ NoAuthNeeded
//!     │
//!     │ send AUTH(id=0, password)
//!     ▼
//!   AwaitingAuthEcho ── AUTH_RESPONSE ──▶ Authenticated
//!     │
//!     │ RESPONSE_VALUE (echo)
//!     ▼
//!   AwaitingAuthResult ─ AUTH_RESPONSE ─▶ Authenticated
//!
//!   wrong id or type anywhere ──────────▶ Failed
//! ```
//!
//! Source servers send an empty RESPONSE_VALUE echo before the auth result.
//! Minecraft skips the echo. Both are accepted without configuration.

use super::{Connection, Transport};
use crate::error::{RconError, Result};
use crate::protocol::{Packet, PacketType};

/// Handshake progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    /// No password configured; terminal
    NoAuthNeeded,

    /// Auth packet sent, waiting for the echo or the result
    AwaitingAuthEcho,

    /// Echo received, waiting for the result
    AwaitingAuthResult,

    /// Terminal
    Authenticated,

    /// Terminal
    Failed,
}

impl HandshakeState {
    /// Whether the connection may now be used for commands
    pub fn is_ready(self) -> bool {
        matches!(self, HandshakeState::NoAuthNeeded | HandshakeState::Authenticated)
    }

    /// Advance on one received packet
    ///
    /// `auth_id` is the id of the auth request. Terminal states are returned
    /// unchanged.
    pub fn on_packet(self, packet: &Packet, auth_id: i32) -> HandshakeState {
        match self {
            HandshakeState::AwaitingAuthEcho => {
                if packet.id != auth_id {
                    HandshakeState::Failed
                } else if packet.packet_type == PacketType::RESPONSE_VALUE {
                    HandshakeState::AwaitingAuthResult
                } else if packet.packet_type == PacketType::AUTH_RESPONSE {
                    HandshakeState::Authenticated
                } else {
                    HandshakeState::Failed
                }
            }
            HandshakeState::AwaitingAuthResult => {
                if packet.id == auth_id && packet.packet_type == PacketType::AUTH_RESPONSE {
                    HandshakeState::Authenticated
                } else {
                    HandshakeState::Failed
                }
            }
            terminal => terminal,
        }
    }
}

/// Run the handshake on a fresh connection
///
/// Returns `NoAuthNeeded` or `Authenticated`; any rejection is
/// `RconError::AuthFailure`. Must be the first exchange on the connection.
pub fn authenticate<T: Transport>(
    conn: &mut Connection<T>,
    password: Option<&str>,
) -> Result<HandshakeState> {
    let Some(password) = password else {
        return Ok(HandshakeState::NoAuthNeeded);
    };

    let auth_id = conn.write_packet(PacketType::AUTH, password.as_bytes())?;
    let mut state = HandshakeState::AwaitingAuthEcho;

    loop {
        match state {
            HandshakeState::NoAuthNeeded | HandshakeState::Authenticated => {
                tracing::debug!("RCON authentication succeeded");
                return Ok(state);
            }
            HandshakeState::Failed => {
                tracing::warn!("RCON authentication failed");
                return Err(RconError::AuthFailure);
            }
            HandshakeState::AwaitingAuthEcho | HandshakeState::AwaitingAuthResult => {
                let packet = conn.read_packet()?;
                state = state.on_packet(&packet, auth_id);
            }
        }
    }
}
