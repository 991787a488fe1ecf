//! Error types for the server crate.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that stop the web app from starting or serving.
#[derive(Error, Debug)]
pub enum ServerError {
    /// An embedded template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
