//! Transport
//!
//! The byte stream a connection runs over.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::{Duration, Instant};

/// A blocking byte stream with per-operation deadlines
pub trait Transport: Read + Write {
    /// Bound each subsequent read or write call by `timeout`; `None` blocks forever
    fn set_deadline(&mut self, timeout: Option<Duration>) -> io::Result<()>;

    /// Release the underlying stream
    fn close(&mut self) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn set_deadline(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.set_read_timeout(timeout)?;
        self.set_write_timeout(timeout)
    }

    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            // Peer already hung up
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

/// Wraps a transport so a whole operation shares one deadline
///
/// `arm` fixes an absolute deadline; every read and write underneath gets
/// only the time left. Once it has passed, calls fail with `TimedOut`
/// without touching the transport.
pub(crate) struct DeadlineStream<T> {
    inner: T,
    deadline: Option<Instant>,
}

impl<T: Transport> DeadlineStream<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner,
            deadline: None,
        }
    }

    /// Start a new deadline `timeout` from now
    pub(crate) fn arm(&mut self, timeout: Duration) {
        self.deadline = Some(Instant::now() + timeout);
    }

    pub(crate) fn close(&mut self) -> io::Result<()> {
        self.inner.close()
    }

    fn apply_remaining(&mut self) -> io::Result<()> {
        let Some(deadline) = self.deadline else {
            return self.inner.set_deadline(None);
        };

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded"));
        }
        self.inner.set_deadline(Some(remaining))
    }
}

impl<T: Transport> Read for DeadlineStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.apply_remaining()?;
        self.inner.read(buf)
    }
}

impl<T: Transport> Write for DeadlineStream<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.apply_remaining()?;
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.apply_remaining()?;
        self.inner.flush()
    }
}
