pub mod agent;
mod codec;
mod decode;
pub mod disconnect;
mod encode;
mod framer;
mod frames;
pub mod haproxy;
mod kv;
mod metadata;
mod msg;
mod ty;

pub use self::codec::{BufCodec, Codec};
pub use self::disconnect::Disconnect;
pub use self::framer::Framer;
pub use self::frames::Frame;
pub use self::metadata::{Flags, FrameId, Metadata, StreamId};
pub use self::msg::{Builder as MessageBuilder, Message};
pub use self::ty::Type;

/// The frame size HAProxy and this agent negotiate toward when neither
/// side constrains it further.
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16384;
