use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur within the `SkyFlyClient`.
///
/// The possible errors are:
///
/// - `MissingToken`: no session token was found in the token source.
/// - `Connection`: the request could not be sent or the response body could
///   not be read (DNS, TCP, TLS or mid-transfer failures).
/// - `Status`: the backend answered with a non-2xx status code.
/// - `Deserialization`: the response body was not the expected JSON shape.
/// - `InvalidImage`: an image payload could not be read or its format was
///   not recognized.
/// - `Runtime`: the async runtime driving the HTTP client could not be built.
#[derive(Debug, PartialEq)]
pub enum ClientError {
    MissingToken,
    Connection,
    Status(u16),
    Deserialization,
    InvalidImage(String),
    Runtime,
}

impl Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingToken => {
                write!(f, "[MissingToken]: No session token found, log in first")
            }
            ClientError::Connection => {
                write!(f, "[Connection]: The request could not reach the backend")
            }
            ClientError::Status(code) => {
                write!(f, "[Status]: The backend rejected the request ({})", code)
            }
            ClientError::Deserialization => {
                write!(f, "[Deserialization]: Unexpected response body")
            }
            ClientError::InvalidImage(msg) => write!(f, "[InvalidImage]: {}", msg),
            ClientError::Runtime => {
                write!(f, "[Runtime]: The async runtime could not be started")
            }
        }
    }
}

impl std::error::Error for ClientError {}
