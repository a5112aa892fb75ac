//! Packet definitions
//!
//! A single RCON wire packet and its type codes.

use std::borrow::Cow;
use std::fmt;

use crate::error::{RconError, Result};

/// Bytes counted by `size` besides the body: id (4) + type (4) + terminator (2)
pub const PACKET_OVERHEAD: i32 = 10;

/// Value of the `size` field for a body of `body_len` bytes
///
/// Fails when the result does not fit the signed 32-bit field.
pub fn packet_size(body_len: usize) -> Result<i32> {
    i32::try_from(body_len)
        .ok()
        .and_then(|len| len.checked_add(PACKET_OVERHEAD))
        .ok_or(RconError::PacketTooLarge(body_len))
}

/// Packet type discriminator
///
/// Type codes are not unique: `2` means exec-command when the client sends
/// it and auth-response when the server sends it. Which one applies is
/// decided by direction and handshake phase, so this is a plain newtype
/// rather than an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacketType(pub i32);

impl PacketType {
    /// Server -> client command output
    pub const RESPONSE_VALUE: PacketType = PacketType(0);

    /// Client -> server command
    pub const EXEC_COMMAND: PacketType = PacketType(2);

    /// Server -> client auth result
    pub const AUTH_RESPONSE: PacketType = PacketType(2);

    /// Client -> server auth request
    pub const AUTH: PacketType = PacketType(3);
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded (or about to be encoded) packet
///
/// The two-byte terminator is never part of `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Correlation id chosen by the sender
    pub id: i32,

    /// Packet type
    pub packet_type: PacketType,

    /// Raw body; may contain embedded zero bytes
    pub body: Vec<u8>,
}

impl Packet {
    /// Create a packet
    pub fn new(packet_type: PacketType, id: i32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            packet_type,
            body: body.into(),
        }
    }

    /// Value of the `size` field on the wire
    pub fn size(&self) -> Result<i32> {
        packet_size(self.body.len())
    }

    /// Body as text, replacing invalid UTF-8
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
