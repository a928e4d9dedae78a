//! The connection state machine and engine that host SPOP over TCP.
//!
//! `spop-core` speaks only bytes; this crate owns the socket, the
//! handshake, and dispatching NOTIFY messages to a [`Handler`].

mod conn;
mod engine;
mod error;
mod handler;

pub use self::conn::Connection;
pub use self::engine::{Builder, Engine};
pub use self::error::{Error, Result};
pub use self::handler::{Handler, HandlerError};

pub use spop_core as core;
