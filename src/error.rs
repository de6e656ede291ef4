use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library. All of them end the current invocation;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input file '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file '{}' contains no text", path.display())]
    EmptyInput { path: PathBuf },

    #[error("cannot write output file '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no credentials in environment: set GOOGLE_API_KEY or GOOGLE_ACCESS_TOKEN")]
    MissingCredentials,

    /// Non-2xx reply from the service. The message is the service's own.
    #[error("text-to-speech service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("request to text-to-speech service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed service response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
