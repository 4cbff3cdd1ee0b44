use std::io;

/// All error types that can occur when interacting with Flux lights.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The protocol client could not be constructed against the bulb's
    /// address. The device is not ready; construction can be retried later.
    #[error("connection to {host} failed: {source:?}")]
    Connection { host: String, source: io::Error },

    /// A fetch or command call to the bulb failed at runtime. Cached state
    /// is left untouched; the next successful refresh reconciles.
    #[error("communication error during {action}: {source:?}")]
    Communication {
        action: &'static str,
        source: io::Error,
    },

    /// A custom pattern was given an empty or oversized color list.
    #[error("custom pattern needs 1 to 16 colors, got {0}")]
    InvalidColorCount(usize),

    /// An effect speed outside 0-100 percent.
    #[error("effect speed {0} is out of range [0, 100]")]
    InvalidSpeed(u8),

    /// An unrecognized transition literal in configuration.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// An unrecognized device mode literal in configuration.
    #[error("invalid device mode: {0}")]
    InvalidMode(String),

    /// An unrecognized effect name in a command.
    #[error("invalid effect name: {0}")]
    InvalidEffectName(String),
}

impl Error {
    /// Create a new connection error
    pub fn connection(host: &str, source: io::Error) -> Self {
        Error::Connection {
            host: host.to_string(),
            source,
        }
    }

    /// Create a new communication error
    pub fn communication(action: &'static str, source: io::Error) -> Self {
        Error::Communication { action, source }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
