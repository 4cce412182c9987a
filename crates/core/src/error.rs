//! Error types shared across crates

use thiserror::Error;

/// Errors at the edges of the responder.
///
/// Detection, matching and reply selection are total; only delivery and
/// configuration can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
