use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::value::{Type, Value};
use crate::varint;

/// Reads varint-length-prefixed UTF-8 strings and typed values off a buffer.
pub trait BufExt: Buf {
    fn get_string(&mut self) -> Result<String> {
        let len = varint::get_u32(self)? as usize;
        if self.remaining() < len {
            return Err(Error::LengthOverrun);
        }
        let mut bytes = vec![0; len];
        self.copy_to_slice(&mut bytes);
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }

    fn get_bin(&mut self) -> Result<Vec<u8>> {
        let len = varint::get_u32(self)? as usize;
        if self.remaining() < len {
            return Err(Error::LengthOverrun);
        }
        let mut bytes = vec![0; len];
        self.copy_to_slice(&mut bytes);
        Ok(bytes)
    }

    fn get_value(&mut self) -> Result<Value> {
        if !self.has_remaining() {
            return Err(Error::UnexpectedEof);
        }
        let tag = self.get_u8();
        let ty = Type::try_from(tag).map_err(|_| Error::UnknownValueType(tag))?;

        Ok(match ty {
            Type::Null => Value::Null,
            Type::Bool => {
                if !self.has_remaining() {
                    return Err(Error::UnexpectedEof);
                }
                Value::Bool(self.get_u8() != 0)
            }
            Type::Int32 => Value::Int32(varint::get_u32(self)? as i32),
            Type::UInt32 => Value::UInt32(varint::get_u32(self)?),
            Type::Int64 => Value::Int64(varint::get(self)? as i64),
            Type::UInt64 => Value::UInt64(varint::get(self)?),
            Type::Ipv4 => {
                if self.remaining() < 4 {
                    return Err(Error::UnexpectedEof);
                }
                let mut octets = [0u8; 4];
                self.copy_to_slice(&mut octets);
                Value::Ipv4(Ipv4Addr::from(octets))
            }
            Type::Ipv6 => {
                if self.remaining() < 16 {
                    return Err(Error::UnexpectedEof);
                }
                let mut octets = [0u8; 16];
                self.copy_to_slice(&mut octets);
                Value::Ipv6(Ipv6Addr::from(octets))
            }
            Type::Str => Value::Str(self.get_string()?),
            Type::Bin => Value::Bin(self.get_bin()?),
        })
    }
}

impl<B: Buf + ?Sized> BufExt for B {}

/// Writes varint-length-prefixed UTF-8 strings and typed values onto a buffer.
pub trait BufMutExt: BufMut {
    fn put_string(&mut self, s: &str) {
        varint::put(self, s.len() as u64);
        self.put_slice(s.as_bytes());
    }

    fn put_bin(&mut self, b: &[u8]) {
        varint::put(self, b.len() as u64);
        self.put_slice(b);
    }

    fn put_value(&mut self, value: &Value) {
        self.put_u8(value.ty() as u8);

        match value {
            Value::Null => {}
            Value::Bool(b) => self.put_u8(*b as u8),
            Value::Int32(n) => {
                varint::put(self, *n as u32 as u64);
            }
            Value::UInt32(n) => {
                varint::put(self, *n as u64);
            }
            Value::Int64(n) => {
                varint::put(self, *n as u64);
            }
            Value::UInt64(n) => {
                varint::put(self, *n);
            }
            Value::Ipv4(addr) => self.put_slice(&addr.octets()),
            Value::Ipv6(addr) => self.put_slice(&addr.octets()),
            Value::Str(s) => self.put_string(s),
            Value::Bin(b) => self.put_bin(b),
        }
    }
}

impl<B: BufMut + ?Sized> BufMutExt for B {}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: Value) {
        let mut buf = Vec::new();
        buf.put_value(&value);
        assert_eq!(buf.as_slice().get_value().unwrap(), value);
    }

    #[test]
    fn roundtrips_every_variant() {
        roundtrip(Value::Null);
        roundtrip(Value::Bool(true));
        roundtrip(Value::Bool(false));
        roundtrip(Value::Int32(-42));
        roundtrip(Value::UInt32(42));
        roundtrip(Value::Int64(-1));
        roundtrip(Value::UInt64(u64::MAX));
        roundtrip(Value::Ipv4(Ipv4Addr::new(8, 8, 8, 8)));
        roundtrip(Value::Ipv6(Ipv6Addr::LOCALHOST));
        roundtrip(Value::Str("hello".into()));
        roundtrip(Value::Bin(vec![1, 2, 3]));
    }

    #[test]
    fn bytes_compare_by_content() {
        assert_eq!(
            Value::Ipv4(Ipv4Addr::new(1, 2, 3, 4)),
            Value::Ipv4(Ipv4Addr::new(1, 2, 3, 4))
        );
        assert_eq!(Value::Bin(vec![1, 2]), Value::Bin(vec![1, 2]));
        assert_eq!(Value::Str("a".into()), Value::Str("a".into()));
    }

    #[test]
    fn rejects_unknown_type_tag() {
        let buf: &[u8] = &[0xFF];
        assert_eq!(
            buf.clone().get_value().unwrap_err(),
            Error::UnknownValueType(0xFF)
        );
    }

    #[test]
    fn rejects_truncated_string() {
        let mut buf = Vec::new();
        varint::put(&mut buf, 5);
        buf.extend_from_slice(b"ab");
        assert_eq!(
            buf.as_slice().get_string().unwrap_err(),
            Error::LengthOverrun
        );
    }
}
