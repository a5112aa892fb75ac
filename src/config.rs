//! Configuration for source-rcon
//!
//! Everything the client needs is resolved here, once, before any
//! network activity.

use std::fmt;
use std::time::Duration;

use crate::error::{RconError, Result};
use crate::network::PacketMode;

/// Default Source RCON port, appended to addresses that carry none
pub const DEFAULT_PORT: u16 = 27015;

/// Default dial / read / write timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration
#[derive(Clone)]
pub struct Config {
    /// Server address as `host:port`
    pub address: String,

    /// RCON password; `None` skips the auth handshake
    pub password: Option<String>,

    /// Deadline applied to the dial and before every packet read and write
    pub timeout: Duration,

    /// Response handling, fixed for the lifetime of the connection
    pub packet_mode: PacketMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: format!("127.0.0.1:{}", DEFAULT_PORT),
            password: None,
            timeout: DEFAULT_TIMEOUT,
            packet_mode: PacketMode::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("packet_mode", &self.packet_mode)
            .finish()
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Password to authenticate with, if any
    ///
    /// An empty password means no authentication.
    pub fn auth_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address
    ///
    /// `DEFAULT_PORT` is appended when the address has no port.
    pub fn address(mut self, addr: impl Into<String>) -> Self {
        let addr = addr.into();
        self.config.address = if addr.contains(':') {
            addr
        } else {
            format!("{}:{}", addr, DEFAULT_PORT)
        };
        self
    }

    /// Set the RCON password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set the dial / read / write timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout (in milliseconds)
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }

    /// Select single- or multi-packet response handling
    pub fn packet_mode(mut self, mode: PacketMode) -> Self {
        self.config.packet_mode = mode;
        self
    }

    /// Disable multi-packet responses (Minecraft, Starbound)
    pub fn single_packet(self) -> Self {
        self.packet_mode(PacketMode::Single)
    }

    /// Validate and produce the config
    pub fn build(self) -> Result<Config> {
        let config = self.config;

        if config.address.is_empty() || config.address.starts_with(':') {
            return Err(RconError::Config(format!(
                "invalid address {:?}: missing host",
                config.address
            )));
        }
        if config.timeout.is_zero() {
            return Err(RconError::Config("timeout must be non-zero".to_string()));
        }

        Ok(config)
    }
}
