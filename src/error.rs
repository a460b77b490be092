//! Error types

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

use crate::models::ItemType;

/// Result type used throughout this crate
pub type ServeResult<T> = Result<T, Error>;

/// Errors returned by the `bw serve` client
#[derive(Debug)]
pub enum Error {
    /// The HTTP exchange itself failed (connection refused, timeout, ...)
    Transport(TransportError),
    /// The request could not be built, typically because the base URL does not parse
    InvalidRequest(hyper::http::Error),
    /// The request body could not be encoded to JSON
    Serialization(serde_json::Error),
    /// A successful response body could not be decoded into the expected shape
    Decoding(serde_json::Error),
    /// The server answered `404 Not Found`
    NotFound,
    /// The server answered `400 Bad Request`
    BadRequest,
    /// The server answered with any other non-200 status code
    UnexpectedStatus(u16),
    /// The server rejected the master password on unlock
    WrongPassword,
    /// The item exists but is of a different kind than requested
    WrongItemType {
        /// Kind the caller asked for
        expected: ItemType,
        /// Kind the server returned
        found: ItemType,
    },
    /// The item kind matches but its payload is absent
    EmptyContent(ItemType),
    /// Spawning or signalling the `bw serve` process failed
    Process(std::io::Error),
    /// The `bw serve` process exited before it started listening
    ServeExited(ExitStatus),
    /// The `bw serve` process did not answer within the startup budget
    ServeNotReady {
        /// Number of probes made before giving up
        attempts: u32,
    },
}

impl Error {
    /// Returns `true` when the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::InvalidRequest(err) => Some(err),
            Error::Serialization(err) | Error::Decoding(err) => Some(err),
            Error::Process(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::InvalidRequest(err) => write!(f, "invalid request: {}", err),
            Error::Serialization(err) => write!(f, "failed to encode request body: {}", err),
            Error::Decoding(err) => write!(f, "failed to decode response body: {}", err),
            Error::NotFound => write!(f, "item not found"),
            Error::BadRequest => write!(f, "bad request"),
            Error::UnexpectedStatus(code) => write!(f, "unexpected status code: {}", code),
            Error::WrongPassword => write!(f, "wrong password"),
            Error::WrongItemType { expected, found } => {
                write!(f, "item is not a {} (found {})", expected, found)
            }
            Error::EmptyContent(kind) => write!(f, "{} is empty", kind),
            Error::Process(err) => write!(f, "bw serve process error: {}", err),
            Error::ServeExited(status) => {
                write!(f, "bw serve exited before it was ready: {}", status)
            }
            Error::ServeNotReady { attempts } => write!(
                f,
                "bw serve was not ready after {} attempts",
                attempts
            ),
        }
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Self {
        Error::Transport(TransportError::Hyper(err))
    }
}

impl From<hyper::http::Error> for Error {
    fn from(err: hyper::http::Error) -> Self {
        Error::InvalidRequest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Process(err)
    }
}

/// Failure of a single HTTP exchange, as reported by an [`HTTPClient`](crate::client::HTTPClient)
#[derive(Debug)]
pub enum TransportError {
    /// Error raised by `hyper` while connecting, sending or reading the body
    Hyper(hyper::Error),
    /// The exchange did not complete within the configured timeout
    TimedOut(Duration),
    /// Error raised by a custom transport, passed through unchanged
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Returns `true` when the exchange was abandoned because it took too long.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::TimedOut(_))
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Hyper(err) => Some(err),
            TransportError::TimedOut(_) => None,
            TransportError::Other(err) => Some(err.as_ref()),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Hyper(err) => write!(f, "{}", err),
            TransportError::TimedOut(after) => {
                write!(f, "request timed out after {}ms", after.as_millis())
            }
            TransportError::Other(err) => write!(f, "{}", err),
        }
    }
}
