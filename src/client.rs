//! Client
//!
//! Public entry point: connect, authenticate, execute commands.

use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{RconError, Result};
use crate::network::{authenticate, Connection, HandshakeState, PacketMode, Transport};
use crate::protocol::Command;

/// A connected, authenticated RCON client
///
/// One client owns one connection. Calls take `&mut self`, which gives the
/// one-request-at-a-time discipline the id correlation needs; use
/// [`SharedClient`] to share a client between threads.
pub struct Client<T: Transport = TcpStream> {
    conn: Connection<T>,
    mode: PacketMode,
    auth: HandshakeState,
}

impl Client<TcpStream> {
    /// Dial `config.address` and authenticate
    ///
    /// Each resolved address is tried in turn with `config.timeout`.
    pub fn connect(config: &Config) -> Result<Self> {
        let stream = dial(config)?;
        stream.set_nodelay(true)?;
        tracing::debug!(address = %config.address, "connected to RCON server");
        Self::with_transport(stream, config)
    }
}

impl<T: Transport> Client<T> {
    /// Authenticate over an already established transport
    ///
    /// The transport is closed if authentication fails.
    pub fn with_transport(transport: T, config: &Config) -> Result<Self> {
        let mut conn = Connection::new(transport, config.timeout);

        let auth = match authenticate(&mut conn, config.auth_password()) {
            Ok(state) => state,
            Err(e) => {
                if let Err(close_err) = conn.close() {
                    tracing::debug!("error closing after failed handshake: {}", close_err);
                }
                return Err(e);
            }
        };

        Ok(Self {
            conn,
            mode: config.packet_mode,
            auth,
        })
    }

    /// Execute a raw command string and return the full response
    ///
    /// Fails with `NonAscii`, before anything is written, if `command`
    /// contains non-ASCII characters.
    pub fn exec(&mut self, command: &str) -> Result<String> {
        if !command.is_ascii() {
            return Err(RconError::NonAscii);
        }
        self.mode.execute(&mut self.conn, command)
    }

    /// Execute a `Command`
    pub fn exec_cmd(&mut self, command: &Command) -> Result<String> {
        self.exec(&command.to_string())
    }

    /// True when a password was configured and accepted
    pub fn is_authenticated(&self) -> bool {
        self.auth == HandshakeState::Authenticated
    }

    pub fn packet_mode(&self) -> PacketMode {
        self.mode
    }

    /// Close the connection
    pub fn close(self) -> Result<()> {
        self.conn.close()
    }
}

fn dial(config: &Config) -> Result<TcpStream> {
    let mut last_err = None;

    for addr in config.address.to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, config.timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!(%addr, "dial failed: {}", e);
                last_err = Some(e);
            }
        }
    }

    Err(match last_err {
        Some(e) => RconError::Io(e),
        None => RconError::Config(format!(
            "address {:?} resolved to no socket addresses",
            config.address
        )),
    })
}

/// A client shared between threads
///
/// Every call locks the client for the whole exchange, so requests from
/// different threads never interleave on the wire.
pub struct SharedClient<T: Transport = TcpStream> {
    inner: Arc<Mutex<Client<T>>>,
}

impl<T: Transport> Clone for SharedClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> SharedClient<T> {
    pub fn new(client: Client<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// See [`Client::exec`]
    pub fn exec(&self, command: &str) -> Result<String> {
        self.inner.lock().exec(command)
    }

    /// See [`Client::exec_cmd`]
    pub fn exec_cmd(&self, command: &Command) -> Result<String> {
        self.inner.lock().exec_cmd(command)
    }

    /// Take the client back if this is the last handle
    pub fn into_inner(self) -> Option<Client<T>> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

impl<T: Transport> From<Client<T>> for SharedClient<T> {
    fn from(client: Client<T>) -> Self {
        SharedClient::new(client)
    }
}
