//! The frames sent by HAProxy.

use crate::frame::{self, FrameId, Message, StreamId};
use crate::version::Version;

/// Sent by HAProxy when it wants to close the connection, or in reply to
/// an AGENT-DISCONNECT frame.
pub type Disconnect = frame::Disconnect;

/// The first frame HAProxy sends once the connection is established.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hello {
    /// SPOP versions HAProxy is willing to speak, in the order offered.
    pub supported_versions: Vec<Version>,
    /// The maximum frame size HAProxy is willing to accept or send.
    pub max_frame_size: u32,
    /// Capabilities HAProxy advertises.
    pub capabilities: Vec<String>,
}

/// A batch of messages HAProxy wants processed for one stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Notify {
    pub stream_id: StreamId,
    pub frame_id: FrameId,
    pub messages: Vec<Message>,
}
