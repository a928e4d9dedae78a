use derive_more::{From, IsVariant};

use crate::frame::{self, agent, haproxy, Message, Metadata, Type};

/// A decoded frame, in either direction.
#[derive(Clone, Debug, PartialEq, From, IsVariant)]
pub enum Frame {
    /// Sent by HAProxy when it opens a connection on an agent.
    HaproxyHello(haproxy::Hello),
    /// Sent by HAProxy to close the connection, or in reply to AGENT-DISCONNECT.
    #[from(skip)]
    HaproxyDisconnect(frame::Disconnect),
    /// Sent by HAProxy to pass information to an agent.
    HaproxyNotify(haproxy::Notify),
    /// Reply to a HAPROXY-HELLO frame, when the connection is established.
    AgentHello(agent::Hello),
    /// Sent by an agent just before closing the connection.
    #[from(skip)]
    AgentDisconnect(frame::Disconnect),
    /// Sent to acknowledge a NOTIFY frame.
    AgentAck(agent::Ack),
}

impl Frame {
    pub const LENGTH_SIZE: usize = std::mem::size_of::<u32>();

    pub fn frame_type(&self) -> Type {
        match self {
            Frame::HaproxyHello(_) => Type::HaproxyHello,
            Frame::HaproxyDisconnect(_) => Type::HaproxyDisconnect,
            Frame::HaproxyNotify(_) => Type::HaproxyNotify,
            Frame::AgentHello(_) => Type::AgentHello,
            Frame::AgentDisconnect(_) => Type::AgentDisconnect,
            Frame::AgentAck(_) => Type::AgentAck,
        }
    }

    pub fn notify<I, T>(stream_id: u64, frame_id: u64, msgs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Message>,
    {
        Frame::HaproxyNotify(haproxy::Notify {
            stream_id,
            frame_id,
            messages: msgs.into_iter().map(Into::into).collect(),
        })
    }

    pub fn ack(ack: agent::Ack) -> Self {
        Frame::AgentAck(ack)
    }

    pub fn haproxy_disconnect<S: Into<String>>(
        status: crate::frame::disconnect::Status,
        reason: S,
    ) -> Self {
        Frame::HaproxyDisconnect(frame::Disconnect::new(status, reason))
    }

    pub fn agent_disconnect<S: Into<String>>(
        status: crate::frame::disconnect::Status,
        reason: S,
    ) -> Self {
        Frame::AgentDisconnect(frame::Disconnect::new(status, reason))
    }

    /// The metadata (flags, stream id, frame id) frames carry on the wire.
    ///
    /// HELLO and DISCONNECT frames always carry zeroed stream/frame ids.
    pub fn metadata(&self) -> Metadata {
        match self {
            Frame::HaproxyNotify(notify) => {
                Metadata::new(Default::default(), notify.stream_id, notify.frame_id)
            }
            Frame::AgentAck(ack) => ack.metadata(),
            _ => Metadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::action::{Action, Scope};
    use crate::frame::disconnect::Status;
    use crate::frame::{decode, encode};
    use crate::value::Value;
    use crate::version::Version;

    use super::*;

    fn roundtrip(frame: Frame) {
        let mut wire = Vec::new();
        encode::frame(&mut wire, &frame);
        assert_eq!(decode::frame(&wire), Ok(frame));
    }

    #[test]
    fn round_trips_agent_hello() {
        roundtrip(Frame::AgentHello(agent::Hello {
            version: Version::V2_0,
            max_frame_size: 1024,
            capabilities: vec!["pipelining".into()],
        }));
    }

    #[test]
    fn round_trips_agent_ack_with_actions() {
        roundtrip(Frame::AgentAck(agent::Ack {
            aborted: true,
            stream_id: 123,
            frame_id: 456,
            actions: vec![
                Action::set_var(Scope::Session, "ip_score", Value::Int32(95)),
                Action::unset_var(Scope::Request, "foo"),
            ],
        }));
    }

    #[test]
    fn round_trips_agent_ack_with_no_actions() {
        roundtrip(Frame::AgentAck(agent::Ack::new(7, 3)));
    }

    #[test]
    fn round_trips_agent_disconnect() {
        roundtrip(Frame::agent_disconnect(Status::Stop, "bye"));
    }

    #[test]
    fn decodes_haproxy_hello_with_keyed_entries() {
        let mut wire = vec![frame::Type::HaproxyHello as u8];
        encode::metadata(&mut wire, Metadata::default());
        encode::haproxy_hello(
            &mut wire,
            &haproxy::Hello {
                supported_versions: vec![Version::V2_0],
                max_frame_size: 16384,
                capabilities: vec!["pipelining".into()],
            },
        );

        let frame = decode::frame(&wire).unwrap();
        assert_eq!(
            frame,
            Frame::HaproxyHello(haproxy::Hello {
                supported_versions: vec![Version::V2_0],
                max_frame_size: 16384,
                capabilities: vec!["pipelining".into()],
            })
        );
    }

    #[test]
    fn decodes_haproxy_notify_with_messages() {
        let notify = haproxy::Notify {
            stream_id: 7,
            frame_id: 3,
            messages: vec![Message::new(
                "check-client-ip",
                [("src", Value::Str("8.8.8.8".into()))],
            )],
        };

        let mut wire = vec![frame::Type::HaproxyNotify as u8];
        encode::metadata(
            &mut wire,
            Metadata::new(Default::default(), notify.stream_id, notify.frame_id),
        );
        encode::haproxy_notify(&mut wire, &notify);

        assert_eq!(decode::frame(&wire), Ok(Frame::HaproxyNotify(notify)));
    }

    #[test]
    fn rejects_unknown_frame_kind() {
        let wire = vec![99u8, 0, 0, 0];
        assert_eq!(
            decode::frame(&wire),
            Err(crate::error::Error::UnknownFrameKind(99))
        );
    }

    #[test]
    fn fragmented_notify_is_a_protocol_error() {
        let mut wire = vec![frame::Type::HaproxyNotify as u8];
        wire.push(frame::Flags::FRAGMENTED.bits());
        wire.push(0); // stream_id
        wire.push(0); // frame_id
        wire.push(0); // zero messages

        assert_eq!(
            decode::frame(&wire),
            Err(crate::error::Error::FragmentNotSupported)
        );
    }
}
