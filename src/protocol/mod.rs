//! Protocol Module
//!
//! Defines the Source RCON wire protocol.
//!
//! ## Packet Format
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────────┬───────────┐
//! │ Size (4) │  Id (4)  │ Type (4) │       Body       │ 0x00 0x00 │
//! └──────────┴──────────┴──────────┴──────────────────┴───────────┘
//! ```
//!
//! ### Packet Types
//! - 0: RESPONSE_VALUE - server -> client command output
//! - 2: EXEC_COMMAND   - client -> server
//! - 2: AUTH_RESPONSE  - server -> client auth result
//! - 3: AUTH           - client -> server

mod command;
mod packet;
mod codec;

pub use command::Command;
pub use packet::{packet_size, Packet, PacketType, PACKET_OVERHEAD};
pub use codec::{
    encode_packet, decode_packet, read_packet, write_packet,
    MAX_PACKET_SIZE, TERMINATOR,
};
