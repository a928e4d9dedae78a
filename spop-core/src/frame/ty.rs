use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The one-byte frame kind that follows the length prefix.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Type {
    /// Sent by HAProxy when it opens a connection on an agent.
    HaproxyHello = 1,
    /// Sent by HAProxy when it wants to close the connection, or in reply
    /// to an AGENT-DISCONNECT frame.
    HaproxyDisconnect = 2,
    /// Sent by HAProxy to pass information to an agent.
    HaproxyNotify = 3,
    /// Reply to a HAPROXY-HELLO frame, when the connection is established.
    AgentHello = 101,
    /// Sent by an agent just before closing the connection.
    AgentDisconnect = 102,
    /// Sent to acknowledge a NOTIFY frame.
    AgentAck = 103,
}
