use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::conn::Connection;
use crate::engine::Builder;
use crate::error::{Error, Result};
use crate::handler::Handler;

/// Hosts a TCP listener that speaks SPOP to HAProxy.
///
/// Each accepted connection runs its own [`Connection`] on a dedicated
/// task; a `ProtocolError` on one connection only ever closes that
/// connection, never the engine.
pub struct Engine {
    port: u16,
    handler: Arc<dyn Handler>,
    max_frame_size: u32,
    idle_timeout: Duration,
    pipelining: bool,
    started: AtomicBool,
    running: Arc<AtomicBool>,
}

impl Engine {
    pub(crate) fn new(
        port: u16,
        handler: Arc<dyn Handler>,
        max_frame_size: u32,
        idle_timeout: Duration,
        pipelining: bool,
    ) -> Self {
        Engine {
            port,
            handler,
            max_frame_size,
            idle_timeout,
            pipelining,
            started: AtomicBool::new(false),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Binds the listener and spawns a task per accepted connection.
    ///
    /// Returns a [`JoinHandle`] for the accept loop; dropping or aborting
    /// it directly, rather than through [`Engine::stop`], leaves
    /// connections already spawned running. Calling `start` twice on the
    /// same engine is a configuration error.
    #[instrument(skip(self), fields(port = self.port))]
    pub async fn start(self: Arc<Self>) -> Result<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(Error::Configuration("engine already started".into()));
        }

        let listener = TcpListener::bind(("0.0.0.0", self.port)).await?;
        info!(port = self.port, "listening");

        let engine = self;
        Ok(tokio::spawn(async move {
            loop {
                let (stream, peer) = match listener.accept().await {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        error!(%err, "accept failed");
                        continue;
                    }
                };

                let conn = Connection::new(
                    stream,
                    engine.handler.clone(),
                    engine.max_frame_size,
                    engine.idle_timeout,
                    engine.pipelining,
                    engine.running.clone(),
                );

                tokio::spawn(async move {
                    if let Err(err) = conn.serve().await {
                        error!(%peer, %err, "connection closed");
                    }
                });
            }
        }))
    }

    /// Stops accepting new connections and signals every connection already
    /// spawned by `start` to close.
    ///
    /// The accept loop is aborted immediately; spawned connections instead
    /// observe the signal at their next read boundary and proceed to
    /// CLOSED on their own, so a connection blocked mid-handler finishes
    /// that work before it notices.
    pub fn stop(&self, handle: &JoinHandle<()>) {
        self.running.store(false, Ordering::SeqCst);
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use spop_core::{Action, Message};

    use super::*;
    use crate::handler::HandlerError;

    struct NoOp;

    #[async_trait]
    impl Handler for NoOp {
        async fn process(&self, _message: &Message) -> std::result::Result<Vec<Action>, HandlerError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn starting_twice_is_a_configuration_error() {
        let engine = Arc::new(Engine::builder().port(0).handler(NoOp).build().unwrap());

        let handle = engine.clone().start().await.unwrap();
        let err = engine.start().await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        handle.abort();
    }

    #[tokio::test]
    async fn stop_aborts_the_accept_loop() {
        let engine = Arc::new(Engine::builder().port(0).handler(NoOp).build().unwrap());
        let handle = engine.clone().start().await.unwrap();

        engine.stop(&handle);
        assert!(handle.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn stop_flags_the_running_signal_connections_observe() {
        let engine = Arc::new(Engine::builder().port(0).handler(NoOp).build().unwrap());
        assert!(engine.running.load(Ordering::SeqCst));

        let handle = engine.clone().start().await.unwrap();
        engine.stop(&handle);

        assert!(!engine.running.load(Ordering::SeqCst));
    }
}
