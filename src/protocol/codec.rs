//! Packet codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! All integers are signed 32-bit little-endian.
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────────┬───────────┐
//! │ Size (4) │  Id (4)  │ Type (4) │  Body (size-10)  │ 0x00 0x00 │
//! └──────────┴──────────┴──────────┴──────────────────┴───────────┘
//! ```
//! `size` counts every byte after the size field itself.

use std::io::{self, Read, Write};

use bytes::{Buf, BufMut, BytesMut};

use super::packet::{Packet, PacketType, PACKET_OVERHEAD};
use crate::error::{RconError, Result};

/// Size field: 4 bytes
pub const SIZE_FIELD_LEN: usize = 4;

/// Id + type: 8 bytes
pub const HEADER_LEN: usize = 8;

/// Mandatory body terminator
pub const TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Largest `size` the decoder accepts (16 MB)
pub const MAX_PACKET_SIZE: i32 = 16 * 1024 * 1024;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a packet to bytes
///
/// Format: size (4) + id (4) + type (4) + body + 0x00 0x00
///
/// Fails with `PacketTooLarge` if the size does not fit in an `i32`.
pub fn encode_packet(packet: &Packet) -> Result<Vec<u8>> {
    let size = packet.size()?;

    let mut buf = BytesMut::with_capacity(SIZE_FIELD_LEN + size as usize);
    buf.put_i32_le(size);
    buf.put_i32_le(packet.id);
    buf.put_i32_le(packet.packet_type.0);
    buf.put_slice(&packet.body);
    buf.put_slice(&TERMINATOR);

    Ok(buf.to_vec())
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one packet from the front of `bytes`
///
/// Trailing bytes after the packet are ignored.
pub fn decode_packet(bytes: &[u8]) -> Result<Packet> {
    let mut reader = bytes;
    read_packet(&mut reader).map_err(|e| match e {
        RconError::Io(ref io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
            RconError::malformed(format!("incomplete packet: got {} bytes", bytes.len()))
        }
        other => other,
    })
}

/// Read a complete packet from a stream
///
/// Blocks until the whole packet is read. Short reads are retried until
/// the payload is complete; EOF before that is an `Io` error. After any
/// error the stream position is undefined and the connection should be
/// dropped.
pub fn read_packet<R: Read>(reader: &mut R) -> Result<Packet> {
    let mut size_buf = [0u8; SIZE_FIELD_LEN];
    reader.read_exact(&mut size_buf)?;
    let size = i32::from_le_bytes(size_buf);

    if size < PACKET_OVERHEAD {
        return Err(RconError::malformed(format!("size too small: {}", size)));
    }
    if size > MAX_PACKET_SIZE {
        return Err(RconError::malformed(format!(
            "size too large: {} (max {})",
            size, MAX_PACKET_SIZE
        )));
    }

    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    let mut header = &header[..];
    let id = header.get_i32_le();
    let packet_type = PacketType(header.get_i32_le());

    // Body plus terminator. The body may itself contain zero bytes, so the
    // terminator is located by length, not by scanning.
    let mut payload = vec![0u8; size as usize - HEADER_LEN];
    reader.read_exact(&mut payload)?;

    if !payload.ends_with(&TERMINATOR) {
        return Err(RconError::malformed("invalid trailer"));
    }
    payload.truncate(payload.len() - TERMINATOR.len());

    Ok(Packet {
        id,
        packet_type,
        body: payload,
    })
}

/// Write a packet to a stream
pub fn write_packet<W: Write>(writer: &mut W, packet: &Packet) -> Result<()> {
    let bytes = encode_packet(packet)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
