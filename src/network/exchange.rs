//! Response reassembly
//!
//! Drives one request/response exchange.
//!
//! The protocol has no end-of-response marker, so in multi-packet mode an
//! empty RESPONSE_VALUE "sentinel" is sent right after the command. The
//! server answers strictly in order, and answers the sentinel with an empty
//! echo followed by a packet whose body is `00 01 00 00`. Once that marker
//! arrives, every packet of the real response has been seen.
//!
//! ```text
//! client:  EXEC(id=N, cmd)   RESPONSE_VALUE(id=N+1, "")
//! server:  RV(N, part 1) .. RV(N, part k)  RV(N+1, "")  RV(N+1, 00 01 00 00)
//! ```

use super::{Connection, Transport};
use crate::error::{RconError, Result};
use crate::protocol::PacketType;

/// Body the server sends as the second reply to the sentinel
pub const SENTINEL_MARKER: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

/// How responses are read, fixed for the lifetime of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketMode {
    /// Responses may span packets; uses the sentinel exchange
    #[default]
    Multi,

    /// Exactly one response packet per request (Minecraft, Starbound)
    Single,
}

impl PacketMode {
    /// Send `body` as an exec command and read its full response
    pub fn execute<T: Transport>(self, conn: &mut Connection<T>, body: &str) -> Result<String> {
        match self {
            PacketMode::Multi => execute_multi(conn, body),
            PacketMode::Single => execute_single(conn, body),
        }
    }
}

fn execute_single<T: Transport>(conn: &mut Connection<T>, body: &str) -> Result<String> {
    let id = conn.write_packet(PacketType::EXEC_COMMAND, body.as_bytes())?;
    tracing::debug!(id, "executing command (single-packet)");

    let packet = conn.read_packet()?;
    if packet.id != id {
        return Err(unexpected_id(packet.id));
    }

    Ok(packet.body_str().into_owned())
}

fn execute_multi<T: Transport>(conn: &mut Connection<T>, body: &str) -> Result<String> {
    let id = conn.write_packet(PacketType::EXEC_COMMAND, body.as_bytes())?;
    let sentinel_id = conn.write_packet(PacketType::RESPONSE_VALUE, b"")?;
    tracing::debug!(id, sentinel_id, "executing command (multi-packet)");

    // Bytes are joined before decoding so a UTF-8 sequence split across
    // packets survives.
    let mut response = Vec::new();
    let mut sentinel_replies = 0;

    loop {
        let packet = conn.read_packet()?;
        if packet.packet_type != PacketType::RESPONSE_VALUE {
            return Err(malformed(format!(
                "unexpected type {}",
                packet.packet_type
            )));
        }

        if packet.id == id {
            response.extend_from_slice(&packet.body);
        } else if packet.id == sentinel_id {
            sentinel_replies += 1;
            if sentinel_replies == 1 {
                if !packet.body.is_empty() {
                    return Err(malformed("non-empty body".to_string()));
                }
            } else {
                if packet.body != SENTINEL_MARKER {
                    return Err(malformed(format!("unexpected body {:?}", packet.body_str())));
                }
                tracing::trace!(id, len = response.len(), "response complete");
                return Ok(String::from_utf8_lossy(&response).into_owned());
            }
        } else {
            return Err(unexpected_id(packet.id));
        }
    }
}

fn unexpected_id(id: i32) -> RconError {
    malformed(format!("unexpected packet id {}", id))
}

fn malformed(reason: String) -> RconError {
    tracing::warn!(%reason, "malformed response");
    RconError::malformed(reason)
}
