//! Bridge error types
//!
//! The address formatter itself is total; these errors describe failures
//! around it (platform lookup, parsing, channel envelopes, configuration).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The platform could not report an IPv4 address
    Unavailable(String),
    /// Text that is not a dotted-decimal IPv4 address
    InvalidAddress(String),
    /// Malformed method call or reply envelope
    Codec(String),
    /// Invalid configuration value
    Config(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Unavailable(msg) => write!(f, "Address unavailable: {}", msg),
            BridgeError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            BridgeError::Codec(msg) => write!(f, "Codec error: {}", msg),
            BridgeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Codec(e.to_string())
    }
}

impl From<local_ip_address::Error> for BridgeError {
    fn from(e: local_ip_address::Error) -> Self {
        BridgeError::Unavailable(e.to_string())
    }
}
