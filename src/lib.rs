//! # source-rcon
//!
//! A blocking client for the Source RCON protocol:
//! - Length-prefixed little-endian packet codec
//! - Auth handshake that accepts servers with and without the auth echo
//! - Multi-packet response reassembly via an echoed sentinel packet
//! - Single-packet mode for servers without multi-packet support
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Client                              │
//! │              (exec / exec_cmd / close)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Handshake  │          │  Exchange   │
//!   │   (auth)    │          │(reassembly) │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!               ┌──────────────┐
//!               │  Connection  │
//!               │ (id counter) │
//!               └──────┬───────┘
//!                      ▼
//!               ┌──────────────┐
//!               │ Packet Codec │
//!               └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use source_rcon::{Client, Config};
//!
//! # fn main() -> source_rcon::Result<()> {
//! let config = Config::builder()
//!     .address("127.0.0.1")
//!     .password("secret")
//!     .build()?;
//! let mut client = Client::connect(&config)?;
//! println!("{}", client.exec("status")?);
//! client.close()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RconError, Result};
pub use config::{Config, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use client::{Client, SharedClient};
pub use network::PacketMode;
pub use protocol::Command;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of source-rcon
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
