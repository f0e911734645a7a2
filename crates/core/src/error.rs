//! Error types for oc-core
//!
//! A single error enum shared across the workspace. Operation failures
//! carry the HTTP status and raw response body so callers can diagnose
//! what the service actually said.

use thiserror::Error;

/// Result type alias for oc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for oc operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid path format
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Alias not found
    #[error("Alias not found: {0}")]
    AliasNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error (policy document encoding)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP exchange could not complete (DNS, refused, timeout)
    #[error("Connection error: {0}")]
    Transport(String),

    /// Upload returned a status outside 200/201
    #[error("upload failed with status {status}: {body}")]
    Upload { status: u16, body: String },

    /// Download returned a status other than 200
    #[error("download failed with status {status}: {body}")]
    Download { status: u16, body: String },

    /// Listing returned a status other than 200
    #[error("list objects failed with status {status}: {body}")]
    List { status: u16, body: String },

    /// Delete returned a status other than 204
    #[error("delete failed with status {status}: {body}")]
    Delete { status: u16, body: String },

    /// Listing response could not be decoded
    #[error("failed to parse listing response: {0}")]
    Decode(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// The HTTP status carried by this error, if the service responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upload { status, .. }
            | Error::Download { status, .. }
            | Error::List { status, .. }
            | Error::Delete { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the appropriate CLI exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidPath(_) | Error::Config(_) => 2, // UsageError
            Error::Transport(_) => 3,                      // NetworkError
            Error::AliasNotFound(_) => 5,                  // NotFound
            _ => match self.status() {
                Some(401 | 403) => 4, // AuthError
                Some(404) => 5,       // NotFound
                Some(_) => 1,
                None => 1, // GeneralError
            },
        }
    }
}
