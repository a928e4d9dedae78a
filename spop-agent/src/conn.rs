use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use spop_core::{
    AgentAck, AgentHello, BufCodec, Disconnect, DisconnectStatus, Error as CoreError, Frame, Framer,
    HaproxyHello, Version,
};

use crate::error::{Error, Result};
use crate::handler::Handler;

/// Negotiated parameters a connection settled on during its handshake.
#[derive(Clone, Debug)]
struct Negotiated {
    version: Version,
    max_frame_size: u32,
    pipelining: bool,
}

/// One HAProxy TCP connection, driven through INIT, NEGOTIATING, LIVE and
/// CLOSED in order.
///
/// Ordering of NOTIFY/ACK exchanges is guaranteed within a single
/// connection; nothing here coordinates across connections.
pub struct Connection<T> {
    codec: BufCodec<T>,
    handler: Arc<dyn Handler>,
    max_frame_size: u32,
    idle_timeout: Duration,
    pipelining: bool,
    running: Arc<AtomicBool>,
}

impl<T> Connection<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(
        stream: T,
        handler: Arc<dyn Handler>,
        max_frame_size: u32,
        idle_timeout: Duration,
        pipelining: bool,
        running: Arc<AtomicBool>,
    ) -> Self {
        Connection {
            codec: BufCodec::buffered(stream, Framer::new(max_frame_size)),
            handler,
            max_frame_size,
            idle_timeout,
            pipelining,
            running,
        }
    }

    /// Drives this connection until the peer disconnects, the engine stops,
    /// an unrecoverable error occurs, or the idle deadline is hit.
    #[instrument(skip(self), fields(max_frame_size = self.max_frame_size))]
    pub async fn serve(mut self) -> Result<()> {
        let negotiated = self.negotiate().await?;
        debug!(version = %negotiated.version, pipelining = negotiated.pipelining, "handshake complete");

        loop {
            if !self.running.load(Ordering::SeqCst) {
                debug!("engine stopped, closing connection");
                self.close(DisconnectStatus::Stop, "engine stopped").await?;
                return Ok(());
            }

            let frame = match timeout(self.idle_timeout, self.codec.read_frame()).await {
                Ok(Ok(frame)) => frame,
                Ok(Err(CoreError::FragmentNotSupported)) => {
                    self.close(DisconnectStatus::Abort, "fragmented NOTIFY is not supported")
                        .await?;
                    return Err(Error::Protocol(CoreError::FragmentNotSupported));
                }
                Ok(Err(err)) => {
                    warn!(%err, "closing connection after protocol error");
                    let _ = self.close(DisconnectStatus::Abort, err.to_string()).await;
                    return Err(Error::Protocol(err));
                }
                Err(_) => {
                    let _ = self.close(DisconnectStatus::Stop, "idle timeout").await;
                    return Err(Error::Timeout(self.idle_timeout));
                }
            };

            match frame {
                Frame::HaproxyNotify(notify) => {
                    let mut ack = AgentAck::new(notify.stream_id, notify.frame_id);
                    for message in &notify.messages {
                        match self.handler.process(message).await {
                            Ok(actions) => ack.actions.extend(actions),
                            Err(err) => warn!(message = %message.name, %err, "handler failed"),
                        }
                    }
                    self.codec.write_frame(&Frame::ack(ack)).await?;
                }
                Frame::HaproxyDisconnect(disconnect) => {
                    debug!(status = ?disconnect.status, message = %disconnect.message, "peer disconnected");
                    return Ok(());
                }
                other => {
                    warn!(frame_type = ?other.frame_type(), "ignoring unexpected frame kind");
                }
            }
        }
    }

    async fn negotiate(&mut self) -> Result<Negotiated> {
        let hello = match self.codec.read_frame().await? {
            Frame::HaproxyHello(hello) => hello,
            _ => return Err(Error::Protocol(CoreError::Malformed)),
        };

        let negotiated = self.pick(&hello);
        self.codec.set_max_frame_size(negotiated.max_frame_size);

        self.codec
            .write_frame(&Frame::AgentHello(AgentHello {
                version: negotiated.version,
                max_frame_size: negotiated.max_frame_size,
                capabilities: if negotiated.pipelining {
                    vec![spop_core::PIPELINING.to_owned()]
                } else {
                    vec![]
                },
            }))
            .await?;

        Ok(negotiated)
    }

    /// Picks the first version HAProxy offered, with no compatibility
    /// filtering against this crate's own supported set; falls back to 2.0
    /// only if HAProxy offered none at all (OP-2). Bounds the frame size to
    /// the smaller of what either side proposed; keeps pipelining only if
    /// both sides want it.
    fn pick(&self, hello: &HaproxyHello) -> Negotiated {
        let version = hello.supported_versions.first().copied().unwrap_or(Version::V2_0);

        Negotiated {
            version,
            max_frame_size: self.max_frame_size.min(hello.max_frame_size),
            pipelining: self.pipelining && spop_core::supports_pipelining(&hello.capabilities),
        }
    }

    async fn close(&mut self, status: DisconnectStatus, message: impl Into<String>) -> Result<()> {
        self.codec
            .write_frame(&Frame::AgentDisconnect(Disconnect::new(status, message)))
            .await?;
        Ok(())
    }
}
