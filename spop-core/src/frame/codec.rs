use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufStream};

use crate::error::{Error, Result};
use crate::frame::{Frame, Framer};

pub type BufCodec<T> = Codec<BufStream<T>>;

impl<T> BufCodec<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn buffered(stream: T, framer: Framer) -> Self {
        Self {
            stream: BufStream::new(stream),
            framer,
        }
    }
}

/// Pairs a `Framer` with the socket it reads/writes frames through.
#[derive(Debug)]
pub struct Codec<T> {
    stream: T,
    framer: Framer,
}

impl<T> Codec<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: T, framer: Framer) -> Self {
        Self { stream, framer }
    }

    /// Rebinds the frame-size bound this codec enforces, e.g. once a
    /// handshake has negotiated a smaller value than the one it was built
    /// with.
    pub fn set_max_frame_size(&mut self, max_frame_size: u32) {
        self.framer = Framer::new(max_frame_size);
    }

    pub async fn read_frame(&mut self) -> Result<Frame> {
        self.framer.read_frame(&mut self.stream).await
    }

    pub async fn write_frame(&mut self, frame: &Frame) -> Result<usize> {
        let sz = self.framer.write_frame(&mut self.stream, frame).await?;

        self.stream
            .flush()
            .await
            .map_err(|e| Error::Io(e.to_string()))?;

        Ok(sz)
    }
}
