use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The status code carried in a DISCONNECT frame.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Status {
    Ok = 0,
    Retry = 1,
    Stop = 2,
    Abort = 3,
}

/// Sent by either side to close the connection, carrying a reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disconnect {
    pub status: Status,
    pub message: String,
}

impl Disconnect {
    pub fn new<S: Into<String>>(status: Status, message: S) -> Self {
        Disconnect {
            status,
            message: message.into(),
        }
    }
}
