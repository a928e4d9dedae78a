use std::net::{Ipv4Addr, Ipv6Addr};

use derive_more::{From, IsVariant};

use crate::value::Type;

/// A typed value carried as a message argument or an action's payload.
///
/// Equality on `Ipv4`, `Ipv6`, `Str` and `Bin` compares the bytes they
/// carry, not identity, since these are plain owned values.
#[derive(Clone, Debug, PartialEq, Eq, From, IsVariant)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Str(String),
    Bin(Vec<u8>),
}

impl Value {
    /// The type tag this value encodes as.
    pub const fn ty(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int32(_) => Type::Int32,
            Value::UInt32(_) => Type::UInt32,
            Value::Int64(_) => Type::Int64,
            Value::UInt64(_) => Type::UInt64,
            Value::Ipv4(_) => Type::Ipv4,
            Value::Ipv6(_) => Type::Ipv6,
            Value::Str(_) => Type::Str,
            Value::Bin(_) => Type::Bin,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bin(b.to_vec())
    }
}
