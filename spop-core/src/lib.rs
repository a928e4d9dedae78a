//! Wire format for HAProxy's Stream Processing Offload Protocol (SPOP).
//!
//! This crate only speaks bytes: frame envelopes, the varint encoding and
//! the typed value model. It knows nothing about sockets or scheduling;
//! see `spop-agent` for the connection and engine that sit on top of it.

mod action;
mod caps;
mod error;
mod frame;
mod value;
mod varint;
mod version;

pub use self::action::{Action, Scope};
pub use self::caps::{supports_pipelining, PIPELINING};
pub use self::error::{Error, Result};
pub use self::frame::{
    agent::{Ack as AgentAck, Hello as AgentHello},
    disconnect::{Disconnect, Status as DisconnectStatus},
    haproxy::{Hello as HaproxyHello, Notify as HaproxyNotify},
    BufCodec, Codec, Flags, Frame, FrameId, Framer, Message, MessageBuilder, Metadata, StreamId,
    DEFAULT_MAX_FRAME_SIZE,
};
pub use self::value::{Type, Value};
pub use self::version::Version;
