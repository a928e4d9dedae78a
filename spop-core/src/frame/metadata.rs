use bitflags::bitflags;

/// The stream identifier.
pub type StreamId = u64;
/// The frame identifier inside the stream.
pub type FrameId = u64;

bitflags! {
    /// Flags set on the frame envelope.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// The frame is one of several physical fragments of a logical frame.
        const FRAGMENTED = 0x01;
        /// Processing of the current stream/frame must be cancelled.
        const ABORT = 0x02;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub flags: Flags,
    pub stream_id: StreamId,
    pub frame_id: FrameId,
}

impl Metadata {
    pub const fn new(flags: Flags, stream_id: StreamId, frame_id: FrameId) -> Self {
        Metadata {
            flags,
            stream_id,
            frame_id,
        }
    }

    /// Whether the FRAGMENTED bit is set on this frame.
    pub const fn is_fragmented(&self) -> bool {
        self.flags.contains(Flags::FRAGMENTED)
    }

    /// Whether the ABORT bit is set on this frame.
    pub const fn is_aborted(&self) -> bool {
        self.flags.contains(Flags::ABORT)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            flags: Flags::empty(),
            stream_id: 0,
            frame_id: 0,
        }
    }
}
