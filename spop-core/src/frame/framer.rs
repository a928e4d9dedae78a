use bytes::{BufMut, BytesMut};
use hexplay::HexViewBuilder;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::error::{Error, Result};
use crate::frame::{decode, encode, Frame};

/// Reads and writes the 4-byte length-prefixed frame envelope, rejecting
/// any frame whose declared length exceeds the negotiated bound before
/// its body is read.
#[derive(Clone, Copy, Debug)]
pub struct Framer {
    max_frame_size: u32,
}

impl Framer {
    pub fn new(max_frame_size: u32) -> Framer {
        Framer { max_frame_size }
    }

    pub async fn read_frame<R>(&self, mut r: R) -> Result<Frame>
    where
        R: AsyncRead + Unpin,
    {
        let len = r.read_u32().await.map_err(|e| Error::Io(e.to_string()))?;

        if len > self.max_frame_size {
            trace!(len, max_frame_size = self.max_frame_size, "frame exceeds bound, not reading body");
            return Err(Error::TooBig);
        }

        let mut body = vec![0u8; len as usize];
        r.read_exact(&mut body)
            .await
            .map_err(|e| Error::Io(e.to_string()))?;

        trace!(len, buf = %HexViewBuilder::new(&body).finish(), "frame ready");
        decode::frame(&body)
    }

    pub async fn write_frame<W>(&self, mut w: W, frame: &Frame) -> Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        let mut body = BytesMut::new();
        encode::frame(&mut body, frame);

        if body.len() as u32 > self.max_frame_size {
            return Err(Error::TooBig);
        }

        let mut out = BytesMut::with_capacity(Frame::LENGTH_SIZE + body.len());
        out.put_u32(body.len() as u32);
        out.put_slice(&body);

        w.write_all(&out).await.map_err(|e| Error::Io(e.to_string()))?;

        trace!(buf = %HexViewBuilder::new(&body).finish(), "frame wrote");
        Ok(out.len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::action::{Action, Scope};
    use crate::frame::agent;
    use crate::version::Version;

    use super::*;

    #[tokio::test]
    async fn rejects_oversized_frame_without_reading_body() {
        let framer = Framer::new(4096);
        let mut wire = Vec::new();
        wire.extend_from_slice(&5000u32.to_be_bytes());
        // No body bytes follow: if the framer tried to read it, this would
        // surface as an I/O error instead of TooBig.
        let mut cursor = Cursor::new(wire);

        assert_eq!(framer.read_frame(&mut cursor).await, Err(Error::TooBig));
    }

    #[tokio::test]
    async fn round_trips_a_frame_through_the_wire() {
        let framer = Framer::new(16384);
        let ack = agent::Ack {
            aborted: false,
            stream_id: 7,
            frame_id: 3,
            actions: vec![Action::set_var(Scope::Session, "ip_score", 95i32)],
        };
        let frame = Frame::AgentAck(ack);

        let mut wire = Vec::new();
        framer.write_frame(&mut wire, &frame).await.unwrap();

        let mut cursor = Cursor::new(wire);
        let decoded = framer.read_frame(&mut cursor).await.unwrap();

        assert_eq!(decoded, frame);
    }

    #[tokio::test]
    async fn writing_a_frame_larger_than_the_bound_fails() {
        let framer = Framer::new(4);
        let hello = agent::Hello {
            version: Version::V2_0,
            max_frame_size: 16384,
            capabilities: vec!["pipelining".into()],
        };

        let mut wire = Vec::new();
        let result = framer
            .write_frame(&mut wire, &Frame::AgentHello(hello))
            .await;

        assert_eq!(result, Err(Error::TooBig));
    }
}
