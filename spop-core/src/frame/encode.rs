use bytes::BufMut;

use crate::action::Action;
use crate::frame::{self, agent, haproxy, kv, Message};
use crate::value::BufMutExt;
use crate::varint;

/// Encodes one complete frame body (caller is responsible for the 4-byte
/// length prefix).
pub fn frame<B: BufMut>(buf: &mut B, f: &frame::Frame) {
    buf.put_u8(f.frame_type() as u8);
    metadata(buf, f.metadata());

    match f {
        frame::Frame::HaproxyHello(hello) => haproxy_hello(buf, hello),
        frame::Frame::HaproxyDisconnect(d) => disconnect(buf, d),
        frame::Frame::HaproxyNotify(notify) => haproxy_notify(buf, notify),
        frame::Frame::AgentHello(hello) => agent_hello(buf, hello),
        frame::Frame::AgentDisconnect(d) => disconnect(buf, d),
        frame::Frame::AgentAck(ack) => agent_ack(buf, ack),
    }
}

pub fn metadata<B: BufMut>(buf: &mut B, metadata: frame::Metadata) {
    buf.put_u8(metadata.flags.bits());
    varint::put(buf, metadata.stream_id);
    varint::put(buf, metadata.frame_id);
}

fn string_list<B: BufMut, S: AsRef<str>>(buf: &mut B, items: &[S]) {
    varint::put(buf, items.len() as u64);
    for item in items {
        buf.put_string(item.as_ref());
    }
}

pub fn haproxy_hello<B: BufMut>(buf: &mut B, hello: &haproxy::Hello) {
    buf.put_string(kv::SUPPORTED_VERSIONS_KEY);
    let versions = hello
        .supported_versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    string_list(buf, &versions);

    buf.put_string(kv::MAX_FRAME_SIZE_KEY);
    varint::put(buf, hello.max_frame_size as u64);

    buf.put_string(kv::CAPABILITIES_KEY);
    string_list(buf, &hello.capabilities);
}

pub fn agent_hello<B: BufMut>(buf: &mut B, hello: &agent::Hello) {
    buf.put_string(&hello.version.to_string());
    varint::put(buf, hello.max_frame_size as u64);
    string_list(buf, &hello.capabilities);
}

pub fn haproxy_notify<B: BufMut>(buf: &mut B, notify: &haproxy::Notify) {
    varint::put(buf, notify.messages.len() as u64);
    for msg in &notify.messages {
        message(buf, msg);
    }
}

fn message<B: BufMut>(buf: &mut B, msg: &Message) {
    buf.put_string(&msg.name);
    varint::put(buf, msg.args.len() as u64);
    for (key, value) in &msg.args {
        buf.put_string(key);
        buf.put_value(value);
    }
}

pub fn agent_ack<B: BufMut>(buf: &mut B, ack: &agent::Ack) {
    varint::put(buf, ack.actions.len() as u64);
    for act in &ack.actions {
        action(buf, act);
    }
}

pub fn action<B: BufMut>(buf: &mut B, act: &Action) {
    match act {
        Action::SetVar { scope, name, value } => {
            buf.put_u8(1);
            buf.put_u8(*scope as u8);
            buf.put_string(name);
            buf.put_value(value);
        }
        Action::UnsetVar { scope, name } => {
            buf.put_u8(2);
            buf.put_u8(*scope as u8);
            buf.put_string(name);
        }
    }
}

pub fn disconnect<B: BufMut>(buf: &mut B, d: &frame::Disconnect) {
    varint::put(buf, d.status as u64);
    buf.put_string(&d.message);
}
