//! Error types for the wallet RPC client

use crate::protocol::Response;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The daemon does not know the requested method.
    #[error("Unexpected method while requesting the server: {request}")]
    MethodNotFound { request: String },

    /// The daemon answered with an error object other than "Method not found".
    #[error("Wallet RPC error: {message}")]
    Remote {
        message: String,
        response: Box<Response>,
    },

    #[error("Unexpected returned status code: {0}")]
    StatusCode(Box<Response>),
}

pub type Result<T> = std::result::Result<T, Error>;
