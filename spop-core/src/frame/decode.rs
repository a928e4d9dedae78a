use bytes::Buf;

use crate::action::{Action, Scope};
use crate::error::{Error, Result};
use crate::frame::disconnect::Status;
use crate::frame::{self, agent, haproxy, kv, Message, Metadata, Type};
use crate::value::BufExt;
use crate::varint;
use crate::version::Version;

/// Decodes one complete frame body (envelope already stripped of its
/// 4-byte length prefix).
pub fn frame(mut buf: &[u8]) -> Result<frame::Frame> {
    if !buf.has_remaining() {
        return Err(Error::UnexpectedEof);
    }
    let kind = buf.get_u8();
    let ty = Type::try_from(kind).map_err(|_| Error::UnknownFrameKind(kind))?;
    let meta = metadata(&mut buf)?;

    Ok(match ty {
        Type::HaproxyHello => frame::Frame::HaproxyHello(haproxy_hello(&mut buf)?),
        Type::HaproxyDisconnect => frame::Frame::HaproxyDisconnect(disconnect(&mut buf)?),
        Type::HaproxyNotify => frame::Frame::HaproxyNotify(haproxy_notify(&mut buf, meta)?),
        Type::AgentHello => frame::Frame::AgentHello(agent_hello(&mut buf)?),
        Type::AgentDisconnect => frame::Frame::AgentDisconnect(disconnect(&mut buf)?),
        Type::AgentAck => frame::Frame::AgentAck(agent_ack(&mut buf, meta)?),
    })
}

pub fn metadata<B: Buf>(buf: &mut B) -> Result<Metadata> {
    if !buf.has_remaining() {
        return Err(Error::UnexpectedEof);
    }
    let flags = frame::Flags::from_bits_truncate(buf.get_u8());
    let stream_id = varint::get(buf)?;
    let frame_id = varint::get(buf)?;
    Ok(Metadata::new(flags, stream_id, frame_id))
}

fn string_list<B: Buf>(buf: &mut B) -> Result<Vec<String>> {
    let n = varint::get_u32(buf)? as usize;
    (0..n).map(|_| buf.get_string()).collect()
}

pub fn haproxy_hello<B: Buf>(buf: &mut B) -> Result<haproxy::Hello> {
    let mut supported_versions = None;
    let mut max_frame_size = None;
    let mut capabilities = None;

    while buf.has_remaining() {
        let key = buf.get_string()?;

        match key.as_str() {
            kv::SUPPORTED_VERSIONS_KEY => {
                let versions = string_list(buf)?
                    .into_iter()
                    .map(|s| s.parse::<Version>().map_err(|_| Error::BadVersion))
                    .collect::<Result<Vec<_>>>()?;
                supported_versions = Some(versions);
            }
            kv::MAX_FRAME_SIZE_KEY => {
                max_frame_size = Some(varint::get_u32(buf)?);
            }
            kv::CAPABILITIES_KEY => {
                capabilities = Some(string_list(buf)?);
            }
            _ => return Err(Error::Malformed),
        }
    }

    Ok(haproxy::Hello {
        supported_versions: supported_versions
            .ok_or(Error::MissingKey(kv::SUPPORTED_VERSIONS_KEY))?,
        max_frame_size: max_frame_size.ok_or(Error::MissingKey(kv::MAX_FRAME_SIZE_KEY))?,
        capabilities: capabilities.unwrap_or_default(),
    })
}

pub fn agent_hello<B: Buf>(buf: &mut B) -> Result<agent::Hello> {
    let version = buf
        .get_string()?
        .parse::<Version>()
        .map_err(|_| Error::BadVersion)?;
    let max_frame_size = varint::get_u32(buf)?;
    let capabilities = string_list(buf)?;

    Ok(agent::Hello {
        version,
        max_frame_size,
        capabilities,
    })
}

pub fn haproxy_notify<B: Buf>(buf: &mut B, meta: Metadata) -> Result<haproxy::Notify> {
    if meta.is_fragmented() {
        return Err(Error::FragmentNotSupported);
    }

    let n = varint::get_u32(buf)? as usize;
    let messages = (0..n).map(|_| message(buf)).collect::<Result<Vec<_>>>()?;

    Ok(haproxy::Notify {
        stream_id: meta.stream_id,
        frame_id: meta.frame_id,
        messages,
    })
}

fn message<B: Buf>(buf: &mut B) -> Result<Message> {
    let name = buf.get_string()?;
    let n = varint::get_u32(buf)? as usize;
    let args = (0..n)
        .map(|_| {
            let key = buf.get_string()?;
            let value = buf.get_value()?;
            Ok((key, value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Message { name, args })
}

pub fn agent_ack<B: Buf>(buf: &mut B, meta: Metadata) -> Result<agent::Ack> {
    let n = varint::get_u32(buf)? as usize;
    let actions = (0..n).map(|_| action(buf)).collect::<Result<Vec<_>>>()?;

    Ok(agent::Ack {
        aborted: meta.is_aborted(),
        stream_id: meta.stream_id,
        frame_id: meta.frame_id,
        actions,
    })
}

pub fn action<B: Buf>(buf: &mut B) -> Result<Action> {
    if !buf.has_remaining() {
        return Err(Error::UnexpectedEof);
    }
    let kind = buf.get_u8();

    if !buf.has_remaining() {
        return Err(Error::UnexpectedEof);
    }
    let scope = Scope::try_from(buf.get_u8()).map_err(|_| Error::Malformed)?;
    let name = buf.get_string()?;

    match kind {
        1 => {
            let value = buf.get_value()?;
            Ok(Action::SetVar { scope, name, value })
        }
        2 => Ok(Action::UnsetVar { scope, name }),
        _ => Err(Error::Malformed),
    }
}

pub fn disconnect<B: Buf>(buf: &mut B) -> Result<frame::Disconnect> {
    let code = varint::get_u32(buf)?;
    let status = Status::try_from(code).map_err(|_| Error::Malformed)?;
    let message = buf.get_string()?;

    Ok(frame::Disconnect { status, message })
}
