use std::result::Result as StdResult;

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// Errors raised while running an [`Engine`](crate::Engine) or serving a
/// single connection.
///
/// [`Error::Protocol`] closes the offending connection but leaves the
/// engine running; [`Error::Configuration`] is fatal to the engine itself;
/// [`Error::Connection`] and [`Error::Timeout`] are fatal to the one
/// connection that raised them.
#[derive(Debug, Error)]
pub enum Error {
    /// The peer sent a malformed frame, or spoke an unsupported version.
    #[error("protocol error: {0}")]
    Protocol(#[from] spop_core::Error),

    /// The engine was misconfigured (e.g. started twice, or with no handler).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The underlying socket failed.
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),

    /// The connection sat idle past its negotiated deadline.
    #[error("connection timed out after {0:?}")]
    Timeout(std::time::Duration),
}
