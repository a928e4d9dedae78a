//! Capability negotiation.
//!
//! HAProxy's real agent protocol advertises `fragmentation`, `pipelining`
//! and `async` as independent capabilities. This protocol only recognizes
//! `pipelining`; any other name present in a peer's capability list is
//! accepted and ignored rather than rejected, so future capabilities can
//! be introduced without breaking older peers.

/// The capability name that enables decoupled NOTIFY/ACK framing.
pub const PIPELINING: &str = "pipelining";

/// Returns whether `caps` advertises pipelining.
pub fn supports_pipelining<S: AsRef<str>>(caps: &[S]) -> bool {
    caps.iter().any(|c| c.as_ref() == PIPELINING)
}
