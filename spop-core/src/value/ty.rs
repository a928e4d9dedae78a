use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The full-byte type tag that precedes every encoded `Value`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Type {
    Null,
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Ipv4,
    Ipv6,
    Str,
    Bin,
}
