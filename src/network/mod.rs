//! Network Module
//!
//! Connection plumbing and the two RCON exchanges.
//!
//! ## Architecture
//! - `Transport`: blocking byte stream with deadlines (TCP in production)
//! - `Connection`: owns the transport and the request id counter
//! - `handshake`: authentication state machine
//! - `exchange`: single- and multi-packet response reassembly

mod transport;
mod connection;
mod handshake;
mod exchange;

pub use transport::Transport;
pub use connection::{Connection, READ_BUFFER_SIZE};
pub use handshake::{authenticate, HandshakeState};
pub use exchange::{PacketMode, SENTINEL_MARKER};
