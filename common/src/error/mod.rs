//! Error taxonomy for the two remote operations. Every failure is recoverable
//! by pressing the triggering button again; nothing is retried automatically.

use thiserror::Error;

/// Failure while decoding the transmitted file body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("content is not valid base64: {0}")]
    Base64(String),
    #[error("content is not a JSON array of records: {0}")]
    Json(String),
}

/// Failure while reading the remote file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteReadError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("remote returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response is not a valid contents payload: {0}")]
    Malformed(String),
    #[error("response carries no revision marker")]
    MissingRevision,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure while writing the remote file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteWriteError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("the file changed upstream since it was loaded; reload the page to pick up the latest version, then redo the edit")]
    Conflict,
    #[error("remote rejected the update with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("response is not a valid update payload: {0}")]
    Malformed(String),
    #[error("update response carries no new revision marker")]
    MissingRevision,
}
