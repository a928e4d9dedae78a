//! The frames sent by the agent.

use crate::action::Action;
use crate::frame::{self, Flags, FrameId, Metadata, StreamId};
use crate::version::Version;

/// Sent by the agent just before closing the connection.
pub type Disconnect = frame::Disconnect;

/// Sent in reply to a HAPROXY-HELLO frame to finish the handshake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hello {
    /// The SPOP version the agent has negotiated.
    pub version: Version,
    /// The maximum frame size the agent accepts or sends.
    pub max_frame_size: u32,
    /// Capabilities the agent has agreed to.
    pub capabilities: Vec<String>,
}

/// Sent in reply to a NOTIFY frame, carrying the actions gathered from
/// dispatching its messages.
#[derive(Clone, Debug, PartialEq)]
pub struct Ack {
    pub aborted: bool,
    pub stream_id: StreamId,
    pub frame_id: FrameId,
    pub actions: Vec<Action>,
}

impl Ack {
    pub fn new(stream_id: StreamId, frame_id: FrameId) -> Self {
        Ack {
            aborted: false,
            stream_id,
            frame_id,
            actions: vec![],
        }
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            flags: if self.aborted {
                Flags::ABORT
            } else {
                Flags::empty()
            },
            stream_id: self.stream_id,
            frame_id: self.frame_id,
        }
    }
}
