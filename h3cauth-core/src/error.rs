//! Error types for h3cauth

use thiserror::Error;

/// Result type alias for h3cauth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for h3cauth
#[derive(Error, Debug)]
pub enum Error {
    /// Network I/O error
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed frame; the frame is dropped and the session continues
    #[error("Frame decode error: {0}")]
    Decode(String),

    /// The credential provider could not compute a response
    #[error("Challenge computation failed: {0}")]
    Challenge(String),

    /// Frame transmission or capture filter installation failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Capture error
    #[error("Packet capture error: {0}")]
    Capture(String),

    /// Packet construction error
    #[error("Packet construction error: {0}")]
    PacketConstruction(String),

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The session already ended on a challenge or transport failure
    #[error("Session aborted: {0}")]
    SessionAborted(String),
}

impl Error {
    /// Create a decode error with a custom message
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode(msg.into())
    }

    /// Create a challenge computation error with a custom message
    pub fn challenge<S: Into<String>>(msg: S) -> Self {
        Error::Challenge(msg.into())
    }

    /// Create a transport error with a custom message
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error ends the authentication session.
    ///
    /// Decode errors only cost the offending frame; everything else leaves
    /// the session unable to make progress.
    pub fn is_session_fatal(&self) -> bool {
        !matches!(self, Error::Decode(_))
    }
}
