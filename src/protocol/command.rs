//! Command definitions
//!
//! A verb plus arguments, rendered to the string sent in an exec packet.

use std::fmt;

/// An RCON command
///
/// ```
/// use source_rcon::protocol::Command;
///
/// let cmd = Command::new("echo").arg("test me").arg(42);
/// assert_eq!(cmd.to_string(), "echo test me 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: String,
    args: Vec<String>,
}

impl Command {
    /// Create a command with no arguments
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Append several arguments, in order
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl From<&str> for Command {
    fn from(verb: &str) -> Self {
        Command::new(verb)
    }
}

impl From<String> for Command {
    fn from(verb: String) -> Self {
        Command::new(verb)
    }
}
