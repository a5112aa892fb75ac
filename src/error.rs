//! Error types for source-rcon
//!
//! Provides a unified error type for all client operations.

use std::io;

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for RCON client operations
///
/// Every variant is terminal for the connection it came from. Nothing in
/// this crate retries; reconnecting is up to the caller.
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Dial, read or write failure, including deadline expiry and EOF
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Framing or protocol invariant violation. The stream is desynchronized.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Authentication failure")]
    AuthFailure,

    // -------------------------------------------------------------------------
    // Input Validation Errors
    // -------------------------------------------------------------------------
    #[error("Non-ASCII command body")]
    NonAscii,

    /// Body too long for the 32-bit size field
    #[error("Packet too large: {0} byte body")]
    PacketTooLarge(usize),
}

impl RconError {
    /// Shorthand for building a `MalformedResponse`
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RconError::MalformedResponse(reason.into())
    }

    /// True if this is a transport error caused by an expired deadline
    ///
    /// Unix reports socket timeouts as `WouldBlock`, Windows as `TimedOut`.
    pub fn is_timeout(&self) -> bool {
        match self {
            RconError::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}
