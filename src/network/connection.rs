//! Connection
//!
//! Per-connection session state: the transport, the read buffer and the
//! request id counter.

use std::io::{BufReader, Write};
use std::time::Duration;

use super::transport::DeadlineStream;
use super::Transport;
use crate::error::Result;
use crate::protocol::{encode_packet, read_packet, Packet, PacketType};

/// Read buffer size; the largest packet a Source server sends
pub const READ_BUFFER_SIZE: usize = 4096;

/// A single RCON connection
///
/// Exchanges are strictly sequential: one request and its full response
/// before the next request. Correlation ids depend on it.
pub struct Connection<T: Transport> {
    /// Transport, buffered for reads. Writes bypass the buffer.
    reader: BufReader<DeadlineStream<T>>,

    /// Time allowed for each whole packet read or write
    timeout: Duration,

    /// Id for the next packet written
    next_id: i32,
}

impl<T: Transport> Connection<T> {
    /// Wrap an established transport
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, DeadlineStream::new(transport)),
            timeout,
            next_id: 0,
        }
    }

    /// Start the id counter at `id` instead of 0
    pub fn with_next_id(mut self, id: i32) -> Self {
        self.next_id = id;
        self
    }

    /// Id the next written packet will carry
    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    /// Write one packet with the next id
    ///
    /// Advances the id counter by one and returns the id used.
    pub fn write_packet(&mut self, packet_type: PacketType, body: &[u8]) -> Result<i32> {
        let id = self.next_id;
        let bytes = encode_packet(&Packet::new(packet_type, id, body))?;
        self.next_id = self.next_id.wrapping_add(1);

        let stream = self.reader.get_mut();
        stream.arm(self.timeout);
        stream.write_all(&bytes)?;
        stream.flush()?;

        tracing::trace!(id, packet_type = packet_type.0, len = body.len(), "packet written");
        Ok(id)
    }

    /// Read and decode one packet
    ///
    /// The whole packet must arrive within the timeout, however it is
    /// split across reads.
    pub fn read_packet(&mut self) -> Result<Packet> {
        self.reader.get_mut().arm(self.timeout);
        let packet = read_packet(&mut self.reader)?;

        tracing::trace!(
            id = packet.id,
            packet_type = packet.packet_type.0,
            len = packet.body.len(),
            "packet read"
        );
        Ok(packet)
    }

    /// Close the transport
    pub fn close(mut self) -> Result<()> {
        self.reader.get_mut().close()?;
        Ok(())
    }
}
