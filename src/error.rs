//! Error types for the playlist client and the interaction controller.

use thiserror::Error;

/// Errors that can occur when talking to the playlist server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body was not what the endpoint promises
    #[error("{0}")]
    Parse(String),

    /// Server answered with a non-OK status
    #[error("Server error ({status})")]
    Server { status: u16, message: Option<String> },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// How a flow of the interaction controller ended when it did not succeed.
///
/// The controller has already shown a notice for every variant by the time
/// the error is returned, except for a failed finish request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// A required field was empty, nothing was sent
    #[error("{0}")]
    Validation(String),

    /// The server reported an application error
    #[error("{0}")]
    Server(String),

    /// Network failure or a malformed response
    #[error("{0}")]
    Transport(String),
}
