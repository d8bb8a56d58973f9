//! Transport error type for the PUT attempt.

use std::fmt;

/// Error raised by the HTTP client itself during the PUT (DNS/connection
/// failure, timeout, malformed request). An HTTP error status returned by
/// the server is not a transport error and never produces one.
#[derive(Debug)]
pub struct TransportError(curl::Error);

impl TransportError {
    /// The underlying curl error.
    pub fn cause(&self) -> &curl::Error {
        &self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        Self(e)
    }
}
