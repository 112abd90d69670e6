use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {path} could not complete: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned status {status}: {body}")]
    Server {
        path: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to deserialize the response of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session cannot be sent as a header: {0}")]
    InvalidSession(String),

    #[error("Failed to build the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
