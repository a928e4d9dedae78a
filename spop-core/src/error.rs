use std::result::Result as StdResult;

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// Errors raised while decoding or encoding the wire protocol.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("unexpected end of input while decoding")]
    UnexpectedEof,

    #[error("unknown frame kind: {0}")]
    UnknownFrameKind(u8),

    #[error("unknown value type: {0}")]
    UnknownValueType(u8),

    #[error("declared length overruns the remaining buffer")]
    LengthOverrun,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("varint exceeds the target width")]
    VarintOverflow,

    #[error("required key {0:?} not found")]
    MissingKey(&'static str),

    #[error("unsupported version")]
    BadVersion,

    #[error("frame is larger than the negotiated max-frame-size")]
    TooBig,

    #[error("fragmented NOTIFY frames are not supported")]
    FragmentNotSupported,

    #[error("frame is malformed")]
    Malformed,

    #[error("I/O error: {0}")]
    Io(String),
}
